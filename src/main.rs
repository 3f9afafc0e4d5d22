mod api;
mod config;
mod error;
mod models;
mod observability;
mod repository;
mod state;

use std::sync::Arc;

use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::EnvFilter;

use crate::repository::SqlActiveRepository;

#[tokio::main]
async fn main() -> Result<(), error::AppError> {
    let config = config::Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level.clone()))
        .with_target(false)
        .compact()
        .init();

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await
        .map_err(|err| {
            error::AppError::Internal(format!(
                "failed to connect to {}: {err}",
                config.database_url
            ))
        })?;
    tracing::info!(
        max_connections = config.db_max_connections,
        "database pool ready"
    );

    let repository = Arc::new(SqlActiveRepository::new(pool.clone()));
    let shared_state = Arc::new(state::AppState::new(repository));

    let app = api::rest::router(shared_state);

    let bind_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|err| error::AppError::Internal(format!("failed to bind {bind_addr}: {err}")))?;

    tracing::info!(http_port = config.http_port, "http server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| error::AppError::Internal(format!("server error: {err}")))?;

    pool.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
