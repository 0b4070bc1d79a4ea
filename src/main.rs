mod config;
mod db;
mod error;
mod icons;
mod models;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::services::unidad_medida::PgUnidadMedidaStore;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real deployments set the environment directly.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::AppConfig::from_env().expect("invalid configuration");

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("database init failed");
    let state = state::AppState::new(Arc::new(PgUnidadMedidaStore::new(pool)));

    let app = routes::app(state);
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "unidades listening");
    axum::serve(listener, app).await.expect("server failed");
}
