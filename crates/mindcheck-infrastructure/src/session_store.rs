//! In-memory session store.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use mindcheck_core::error::Result;
use mindcheck_core::session::{SessionId, SessionMutation, SessionState, SessionStore};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-local session storage with idle expiry.
///
/// Sessions live only as long as the process; an idle session older than
/// the TTL is treated as missing and dropped on the next access or sweep.
#[derive(Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SessionState>>>,
    ttl: Duration,
}

impl InMemorySessionStore {
    /// Creates an empty store whose sessions expire after `ttl` of inactivity.
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Number of sessions currently held, expired or not.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, id: &SessionId) -> Result<Option<SessionState>> {
        let mut sessions = self.sessions.write().await;
        let now = Utc::now();

        if sessions
            .get(id)
            .is_some_and(|state| state.is_expired(self.ttl, now))
        {
            tracing::debug!("[SessionStore] Session expired on access: {}", id);
            sessions.remove(id);
            return Ok(None);
        }

        Ok(sessions.get_mut(id).map(|state| {
            state.touch();
            state.clone()
        }))
    }

    async fn insert(&self, id: &SessionId, state: SessionState) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(*id, state);
        tracing::debug!("[SessionStore] Session created: {}", id);
        Ok(())
    }

    async fn update<'a>(
        &self,
        id: &SessionId,
        mutation: SessionMutation<'a>,
    ) -> Result<SessionState> {
        let mut sessions = self.sessions.write().await;
        let now = Utc::now();

        let expired = sessions
            .get(id)
            .is_some_and(|state| state.is_expired(self.ttl, now));
        if expired {
            tracing::debug!("[SessionStore] Replacing expired session: {}", id);
            sessions.remove(id);
        }

        let state = sessions.entry(*id).or_default();
        mutation(state);
        state.touch();
        Ok(state.clone())
    }

    async fn remove(&self, id: &SessionId) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(id);
        Ok(())
    }

    async fn evict_expired(&self) -> Result<usize> {
        let mut sessions = self.sessions.write().await;
        let now = Utc::now();
        let before = sessions.len();

        sessions.retain(|_, state| !state.is_expired(self.ttl, now));

        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::info!("[SessionStore] Evicted {} expired session(s)", evicted);
        }
        Ok(evicted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> InMemorySessionStore {
        InMemorySessionStore::new(Duration::hours(1))
    }

    fn stale_state() -> SessionState {
        let mut state = SessionState::new();
        state.last_accessed = Utc::now() - Duration::hours(2);
        state
    }

    #[tokio::test]
    async fn test_get_missing() {
        let store = store();
        assert!(store.get(&SessionId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_creates_default_session() {
        let store = store();
        let id = SessionId::new();

        let state = store
            .update(&id, Box::new(|s: &mut SessionState| s.set_mood("calm")))
            .await
            .unwrap();

        assert_eq!(state.mood, "calm");
        assert!(state.journal.is_empty());
        assert_eq!(store.get(&id).await.unwrap().unwrap().mood, "calm");
    }

    #[tokio::test]
    async fn test_updates_accumulate() {
        let store = store();
        let id = SessionId::new();

        store
            .update(&id, Box::new(|s: &mut SessionState| { s.push_journal_entry("one"); }))
            .await
            .unwrap();
        let state = store
            .update(&id, Box::new(|s: &mut SessionState| { s.push_journal_entry("two"); }))
            .await
            .unwrap();

        assert_eq!(state.journal, vec!["one", "two"]);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = store();
        let a = SessionId::new();
        let b = SessionId::new();

        store
            .update(&a, Box::new(|s: &mut SessionState| s.set_prediction("Schizophrenia")))
            .await
            .unwrap();
        store.insert(&b, SessionState::new()).await.unwrap();

        assert!(store.get(&b).await.unwrap().unwrap().prediction.is_none());
    }

    #[tokio::test]
    async fn test_expired_session_reads_as_missing() {
        let store = store();
        let id = SessionId::new();
        store.insert(&id, stale_state()).await.unwrap();

        assert!(store.get(&id).await.unwrap().is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_update_on_expired_session_starts_fresh() {
        let store = store();
        let id = SessionId::new();
        let mut stale = stale_state();
        stale.push_journal_entry("old");
        store.insert(&id, stale).await.unwrap();

        let state = store.update(&id, Box::new(|_: &mut SessionState| {})).await.unwrap();
        assert!(state.journal.is_empty());
    }

    #[tokio::test]
    async fn test_evict_expired() {
        let store = store();
        store.insert(&SessionId::new(), stale_state()).await.unwrap();
        store.insert(&SessionId::new(), stale_state()).await.unwrap();
        store.insert(&SessionId::new(), SessionState::new()).await.unwrap();

        assert_eq!(store.evict_expired().await.unwrap(), 2);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_remove() {
        let store = store();
        let id = SessionId::new();
        store.insert(&id, SessionState::new()).await.unwrap();
        assert!(store.contains(&id).await.unwrap());

        store.remove(&id).await.unwrap();
        assert!(!store.contains(&id).await.unwrap());
    }
}
