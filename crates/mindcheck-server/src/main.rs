use anyhow::{Context, Result};
use mindcheck_infrastructure::config_loader::load_config;
use mindcheck_infrastructure::logging::init_logging;
use mindcheck_server::bootstrap::SESSION_SWEEP_INTERVAL;
use mindcheck_server::{bootstrap, router, spawn_session_sweeper};

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config().context("Failed to load configuration")?;
    let _log_guard = init_logging(&config)?;

    tracing::info!(
        "[Main] Starting MindCheck v{} ({} mode)",
        env!("CARGO_PKG_VERSION"),
        config.environment
    );

    let addr = config.bind_address();
    let ctx = bootstrap(config)?;
    let _sweeper = spawn_session_sweeper(ctx.sessions.clone(), SESSION_SWEEP_INTERVAL);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("[Main] Listening on {}", addr);

    axum::serve(listener, router(ctx))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("[Main] Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("[Main] Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
