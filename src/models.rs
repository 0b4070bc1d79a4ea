//! Unit-of-measure shapes exchanged between the API and its callers.
//!
//! These are plain data. Checks on their contents (non-empty description,
//! id existence) belong to the store in `services::unidad_medida`.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A unit-of-measure record. Mirrors the `unidades_medida` table.
///
/// `id` and both timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnidadMedida {
    pub id: i32,
    pub descripcion: String,
    pub activo: bool,
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub fechacreacion: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub fechamodificacion: Option<OffsetDateTime>,
}

/// Payload for creating a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnidadMedidaCrear {
    pub descripcion: String,
}

/// Sparse update payload. Omitted fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnidadMedidaActualizar {
    pub id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

#[cfg(test)]
#[path = "models_test.rs"]
mod tests;
