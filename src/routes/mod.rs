//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the unit-of-measure REST endpoints and the icon table under a single
//! Axum router, with permissive CORS for the browser front-end and a tower
//! trace layer for per-request spans.

pub mod icons;
pub mod unidades_medida;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/unidades-medida",
            get(unidades_medida::listar).post(unidades_medida::crear),
        )
        .route(
            "/api/unidades-medida/{id}",
            get(unidades_medida::obtener).patch(unidades_medida::actualizar),
        )
        .route("/api/icons", get(icons::list_icons))
        .route("/api/icons/{name}", get(icons::get_icon))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
