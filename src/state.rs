//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the unit-of-measure store behind a trait object so tests can run
//! the full handler stack without a live database.

use std::sync::Arc;

use crate::services::unidad_medida::UnidadMedidaStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the store is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub unidades: Arc<dyn UnidadMedidaStore>,
}

impl AppState {
    #[must_use]
    pub fn new(unidades: Arc<dyn UnidadMedidaStore>) -> Self {
        Self { unidades }
    }
}
