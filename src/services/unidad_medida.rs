//! Unit-of-measure store, the authoritative owner of `UnidadMedida` rows.
//!
//! DESIGN
//! ======
//! `UnidadMedidaStore` is the seam between HTTP handlers and storage.
//! Production runs on [`PgUnidadMedidaStore`]; the test suite swaps in the
//! in-memory store from `state::test_helpers`. The store assigns ids and
//! both timestamps, so callers only ever send `UnidadMedidaCrear` and
//! `UnidadMedidaActualizar` payloads.
//!
//! Updates are sparse: a field absent from the payload keeps its stored
//! value. `fechamodificacion` is bumped on every update and never drops
//! below `fechacreacion`. Both stores merge through [`aplicar_cambios`];
//! the Postgres store does it under a row lock inside a transaction.
//!
//! Listings order by `descripcion` byte-wise (`COLLATE "C"`), the same
//! order `String::cmp` gives the in-memory store.

use sqlx::PgPool;
use time::OffsetDateTime;
use tracing::info;

use crate::error::ErrorCode;
use crate::models::{UnidadMedida, UnidadMedidaActualizar, UnidadMedidaCrear};

pub const DESCRIPCION_MAX_CHARS: usize = 100;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum UnidadMedidaError {
    #[error("unidad de medida not found: {0}")]
    NotFound(i32),
    #[error("descripcion must not be empty")]
    DescripcionVacia,
    #[error("descripcion exceeds {} characters", DESCRIPCION_MAX_CHARS)]
    DescripcionDemasiadoLarga,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ErrorCode for UnidadMedidaError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_NOT_FOUND",
            Self::DescripcionVacia => "E_DESCRIPCION_VACIA",
            Self::DescripcionDemasiadoLarga => "E_DESCRIPCION_DEMASIADO_LARGA",
            Self::Database(_) => "E_DATABASE",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Database(_))
    }
}

/// Storage contract for unit-of-measure records. Enables mocking in tests.
#[async_trait::async_trait]
pub trait UnidadMedidaStore: Send + Sync {
    /// List records ordered by `descripcion`, then `id`.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    async fn listar(&self, solo_activos: bool) -> Result<Vec<UnidadMedida>, UnidadMedidaError>;

    /// Fetch one record.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record has this id.
    async fn obtener(&self, id: i32) -> Result<UnidadMedida, UnidadMedidaError>;

    /// Create an active record, assigning its id and timestamps.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank or oversized description.
    async fn crear(&self, nueva: UnidadMedidaCrear) -> Result<UnidadMedida, UnidadMedidaError>;

    /// Apply the supplied fields of `cambios` and return the stored record.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id, or a validation error for a
    /// blank or oversized description.
    async fn actualizar(&self, cambios: UnidadMedidaActualizar) -> Result<UnidadMedida, UnidadMedidaError>;
}

// =============================================================================
// RULES
// =============================================================================

/// Trim a description and enforce the store's length limits.
///
/// # Errors
///
/// Returns `DescripcionVacia` or `DescripcionDemasiadoLarga`.
pub fn normalizar_descripcion(raw: &str) -> Result<String, UnidadMedidaError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UnidadMedidaError::DescripcionVacia);
    }
    if trimmed.chars().count() > DESCRIPCION_MAX_CHARS {
        return Err(UnidadMedidaError::DescripcionDemasiadoLarga);
    }
    Ok(trimmed.to_owned())
}

/// Merge a sparse update into `actual`, stamping the modification time.
///
/// `descripcion` must already be normalized.
#[must_use]
pub fn aplicar_cambios(
    actual: &UnidadMedida,
    descripcion: Option<String>,
    activo: Option<bool>,
    ahora: OffsetDateTime,
) -> UnidadMedida {
    let fechamodificacion = match actual.fechacreacion {
        Some(creada) if ahora < creada => creada,
        _ => ahora,
    };

    UnidadMedida {
        id: actual.id,
        descripcion: descripcion.unwrap_or_else(|| actual.descripcion.clone()),
        activo: activo.unwrap_or(actual.activo),
        fechacreacion: actual.fechacreacion,
        fechamodificacion: Some(fechamodificacion),
    }
}

// =============================================================================
// POSTGRES
// =============================================================================

type UnidadMedidaTuple = (i32, String, bool, OffsetDateTime, OffsetDateTime);

fn from_tuple((id, descripcion, activo, fechacreacion, fechamodificacion): UnidadMedidaTuple) -> UnidadMedida {
    UnidadMedida {
        id,
        descripcion,
        activo,
        fechacreacion: Some(fechacreacion),
        fechamodificacion: Some(fechamodificacion),
    }
}

pub struct PgUnidadMedidaStore {
    pool: PgPool,
}

impl PgUnidadMedidaStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl UnidadMedidaStore for PgUnidadMedidaStore {
    async fn listar(&self, solo_activos: bool) -> Result<Vec<UnidadMedida>, UnidadMedidaError> {
        let rows = sqlx::query_as::<_, UnidadMedidaTuple>(
            r#"SELECT id, descripcion, activo, fechacreacion, fechamodificacion
             FROM unidades_medida
             WHERE activo OR NOT $1
             ORDER BY descripcion COLLATE "C", id"#,
        )
        .bind(solo_activos)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(from_tuple).collect())
    }

    async fn obtener(&self, id: i32) -> Result<UnidadMedida, UnidadMedidaError> {
        let row = sqlx::query_as::<_, UnidadMedidaTuple>(
            "SELECT id, descripcion, activo, fechacreacion, fechamodificacion
             FROM unidades_medida WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(UnidadMedidaError::NotFound(id))?;

        Ok(from_tuple(row))
    }

    async fn crear(&self, nueva: UnidadMedidaCrear) -> Result<UnidadMedida, UnidadMedidaError> {
        let descripcion = normalizar_descripcion(&nueva.descripcion)?;
        let row = sqlx::query_as::<_, UnidadMedidaTuple>(
            "INSERT INTO unidades_medida (descripcion, activo, fechacreacion, fechamodificacion)
             VALUES ($1, TRUE, now(), now())
             RETURNING id, descripcion, activo, fechacreacion, fechamodificacion",
        )
        .bind(&descripcion)
        .fetch_one(&self.pool)
        .await?;

        let created = from_tuple(row);
        info!(id = created.id, descripcion = %created.descripcion, "unidad de medida created");
        Ok(created)
    }

    async fn actualizar(&self, cambios: UnidadMedidaActualizar) -> Result<UnidadMedida, UnidadMedidaError> {
        let descripcion = cambios.descripcion.as_deref().map(normalizar_descripcion).transpose()?;
        let mut tx = self.pool.begin().await?;

        let actual = sqlx::query_as::<_, UnidadMedidaTuple>(
            "SELECT id, descripcion, activo, fechacreacion, fechamodificacion
             FROM unidades_medida WHERE id = $1 FOR UPDATE",
        )
        .bind(cambios.id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(UnidadMedidaError::NotFound(cambios.id))?;

        let merged = aplicar_cambios(&from_tuple(actual), descripcion, cambios.activo, OffsetDateTime::now_utc());
        let row = sqlx::query_as::<_, UnidadMedidaTuple>(
            "UPDATE unidades_medida
             SET descripcion = $2, activo = $3, fechamodificacion = $4
             WHERE id = $1
             RETURNING id, descripcion, activo, fechacreacion, fechamodificacion",
        )
        .bind(merged.id)
        .bind(&merged.descripcion)
        .bind(merged.activo)
        .bind(merged.fechamodificacion)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        let updated = from_tuple(row);
        info!(id = updated.id, activo = updated.activo, "unidad de medida updated");
        Ok(updated)
    }
}

#[cfg(test)]
#[path = "unidad_medida_test.rs"]
mod tests;
