//! Icon table routes.

use std::collections::BTreeMap;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::Json;

use crate::error::ApiError;
use crate::icons::{self, IconHandle, IconName};

/// `GET /api/icons` — the whole table keyed by icon name.
pub async fn list_icons() -> Json<BTreeMap<&'static str, IconHandle>> {
    Json(icons::registry())
}

/// `GET /api/icons/:name` — one handle, 404 for a name outside the set.
pub async fn get_icon(Path(name): Path<String>) -> Result<Json<IconHandle>, ApiError> {
    let icon = name
        .parse::<IconName>()
        .map_err(|err| ApiError::new(StatusCode::NOT_FOUND, &err))?;
    Ok(Json(icon.handle()))
}

#[cfg(test)]
#[path = "icons_test.rs"]
mod tests;
