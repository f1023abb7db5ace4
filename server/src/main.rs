mod config;
mod db;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use crate::services::tool_store::PgToolStore;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");

    let state = match config.database_url.as_deref() {
        Some(database_url) => {
            let pool = db::init_pool(database_url, config.db_max_connections)
                .await
                .expect("database init failed");
            tracing::info!(max_connections = config.db_max_connections, "tool store: postgres");
            state::AppState::new(Arc::new(PgToolStore::new(pool)))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; tool store is in-memory and will not persist");
            state::AppState::in_memory()
        }
    };

    let app = routes::app(state);

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "toolbox listening");
    axum::serve(listener, app).await.expect("server failed");
}
