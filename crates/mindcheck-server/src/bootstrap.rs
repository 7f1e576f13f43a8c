//! Composition root.

use crate::context::AppContext;
use anyhow::{Context, Result};
use mindcheck_core::config::AppConfig;
use mindcheck_core::session::SessionStore;
use mindcheck_infrastructure::try_load_model_bundle;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// How often idle sessions are swept from the store.
pub const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(10 * 60);

/// Builds the application context from a resolved configuration.
///
/// Artifact load failures are logged and leave prediction unavailable; they
/// never abort startup.
pub fn bootstrap(config: AppConfig) -> Result<AppContext> {
    if config.uses_insecure_secret() {
        tracing::warn!(
            "[Bootstrap] SECRET_KEY is not set; session cookies are signed with the built-in default secret"
        );
    }

    tracing::info!(
        "[Bootstrap] Loading artifacts: model={}, scaler={}",
        config.model_path.display(),
        config.scaler_path.display()
    );
    let model = try_load_model_bundle(&config.model_path, &config.scaler_path);
    if model.is_none() {
        tracing::warn!("[Bootstrap] Prediction is disabled until the artifacts are fixed and the server restarted");
    }

    AppContext::new(config, model).context("Failed to build application context")
}

/// Periodically evicts expired sessions.
pub fn spawn_session_sweeper(store: Arc<dyn SessionStore>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        // First tick fires immediately; nothing can have expired yet
        interval.tick().await;
        loop {
            interval.tick().await;
            if let Err(e) = store.evict_expired().await {
                tracing::error!("[Bootstrap] Session sweep failed: {}", e);
            }
        }
    })
}
