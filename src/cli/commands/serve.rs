use anyhow::Context;
use tracing::info;

use crate::config::AppConfig;
use crate::database::Database;
use crate::routes::router;
use crate::state::AppState;

/// Applies the schema and reference data, then serves until Ctrl-C.
pub async fn handle(port: Option<u16>) -> anyhow::Result<()> {
    let mut config = AppConfig::from_env()?;
    if let Some(port) = port {
        config.server.port = port;
    }
    info!("Starting company registry in {:?} mode", config.environment);

    let db = Database::connect(&config.database)
        .await
        .context("failed to connect to database")?;
    db.apply_schema().await?;
    db.seed_reference_data().await?;

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let app = router(AppState::new(db.clone(), config));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    info!("Listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    db.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
