//! Unit-of-measure REST routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use tracing::{debug, error, info};

use crate::error::{ApiError, ErrorCode};
use crate::models::{UnidadMedida, UnidadMedidaActualizar, UnidadMedidaCrear};
use crate::services::unidad_medida::UnidadMedidaError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListarQuery {
    /// When true, inactive records are left out.
    pub activos: Option<bool>,
}

pub(crate) fn store_error(err: UnidadMedidaError) -> ApiError {
    let status = match &err {
        UnidadMedidaError::NotFound(_) => StatusCode::NOT_FOUND,
        UnidadMedidaError::DescripcionVacia | UnidadMedidaError::DescripcionDemasiadoLarga => {
            StatusCode::BAD_REQUEST
        }
        UnidadMedidaError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        error!(error = %err, code = err.error_code(), retryable = err.retryable(), "unidad de medida store failed");
    } else {
        debug!(error = %err, code = err.error_code(), "unidad de medida request rejected");
    }

    ApiError::new(status, &err)
}

/// `GET /api/unidades-medida` — list records, optionally only active ones.
pub async fn listar(
    State(state): State<AppState>,
    Query(query): Query<ListarQuery>,
) -> Result<Json<Vec<UnidadMedida>>, ApiError> {
    let rows = state
        .unidades
        .listar(query.activos.unwrap_or(false))
        .await
        .map_err(store_error)?;
    Ok(Json(rows))
}

/// `GET /api/unidades-medida/:id` — fetch one record.
pub async fn obtener(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<UnidadMedida>, ApiError> {
    let row = state.unidades.obtener(id).await.map_err(store_error)?;
    Ok(Json(row))
}

/// `POST /api/unidades-medida` — create a record from its description.
pub async fn crear(
    State(state): State<AppState>,
    Json(body): Json<UnidadMedidaCrear>,
) -> Result<(StatusCode, Json<UnidadMedida>), ApiError> {
    let row = state.unidades.crear(body).await.map_err(store_error)?;
    info!(id = row.id, "POST /api/unidades-medida");
    Ok((StatusCode::CREATED, Json(row)))
}

/// `PATCH /api/unidades-medida/:id` — sparse update. Body `id` must match the path.
pub async fn actualizar(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UnidadMedidaActualizar>,
) -> Result<Json<UnidadMedida>, ApiError> {
    if body.id != id {
        return Err(ApiError::bad_request(
            "E_ID_MISMATCH",
            format!("body id {} does not match path id {id}", body.id),
        ));
    }

    let row = state.unidades.actualizar(body).await.map_err(store_error)?;
    Ok(Json(row))
}

#[cfg(test)]
#[path = "unidades_medida_test.rs"]
mod tests;
