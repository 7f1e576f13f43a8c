//! Application context shared by every handler.
//!
//! Services, the cookie signer and loaded artifacts are built once at startup
//! and handed to axum as state.

use crate::views::Views;
use mindcheck_application::{
    ChatbotService, JournalService, PredictionService, SessionReportService, SessionUpdater,
};
use mindcheck_core::config::AppConfig;
use mindcheck_core::error::Result;
use mindcheck_core::model::ModelBundle;
use mindcheck_core::session::SessionStore;
use mindcheck_infrastructure::{InMemorySessionStore, SessionSigner};
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<AppConfig>,
    pub sessions: Arc<dyn SessionStore>,
    pub signer: SessionSigner,
    pub prediction: Arc<PredictionService>,
    pub chatbot: Arc<ChatbotService>,
    pub journal: Arc<JournalService>,
    pub reports: Arc<SessionReportService>,
    pub views: Arc<Views>,
}

impl AppContext {
    /// Builds the context with an in-memory session store.
    ///
    /// `model` is `None` when the artifacts failed to load.
    pub fn new(config: AppConfig, model: Option<ModelBundle>) -> Result<Self> {
        let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new(config.session_ttl()));
        Self::with_store(config, model, store)
    }

    /// Builds the context over a caller-supplied session store.
    pub fn with_store(
        config: AppConfig,
        model: Option<ModelBundle>,
        sessions: Arc<dyn SessionStore>,
    ) -> Result<Self> {
        let signer = SessionSigner::new(config.secret_key.as_bytes())?;
        let updater = SessionUpdater::new(sessions.clone());

        Ok(Self {
            config: Arc::new(config),
            sessions,
            signer,
            prediction: Arc::new(PredictionService::new(model, updater.clone())),
            chatbot: Arc::new(ChatbotService::new(updater.clone())),
            journal: Arc::new(JournalService::new(updater.clone())),
            reports: Arc::new(SessionReportService::new(updater)),
            views: Arc::new(Views::new()?),
        })
    }

    /// Returns true if the classifier and scaler are loaded.
    pub fn models_loaded(&self) -> bool {
        self.prediction.is_available()
    }
}
