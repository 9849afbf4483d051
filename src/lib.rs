pub mod app;
pub mod config;
pub mod error;
pub mod infra;
pub mod routes;

use config::Config;
use infra::init_db;
use routes::{create_router, AppState};

/// Ensure the schema, then serve HTTP until Ctrl-C.
pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let db_path = config.resolve_db_path();
    log::info!("DB path: {:?}", db_path);

    let db = init_db(&db_path).map_err(|e| {
        log::error!("DB init failed: {}", e);
        e
    })?;

    let state = AppState {
        db,
        index_html: config.index_html.clone(),
    };
    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Listening on http://{}", addr);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Ctrl-C handler unavailable: {}", e);
        std::future::pending::<()>().await;
    }
}
