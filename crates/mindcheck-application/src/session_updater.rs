//! Session updater helper for the "load → mutate → store" pattern.

use mindcheck_core::error::Result;
use mindcheck_core::session::{SessionId, SessionState, SessionStore};
use std::sync::Arc;

/// Thin wrapper over a `SessionStore` used by every service.
///
/// Reads never fail on a missing session: an unknown id yields
/// `SessionState::default()`.
#[derive(Clone)]
pub struct SessionUpdater {
    store: Arc<dyn SessionStore>,
}

impl SessionUpdater {
    /// Creates a new `SessionUpdater` over the given store.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Returns the current session state, or defaults if none exists.
    pub async fn snapshot(&self, session_id: &SessionId) -> Result<SessionState> {
        Ok(self.store.get(session_id).await?.unwrap_or_default())
    }

    /// Applies `updater` to the session and returns the updated state.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    pub async fn update<F>(&self, session_id: &SessionId, updater: F) -> Result<SessionState>
    where
        F: FnOnce(&mut SessionState) + Send,
    {
        tracing::debug!("[SessionUpdater] update() called for session_id: {}", session_id);
        self.store.update(session_id, Box::new(updater)).await
    }
}
