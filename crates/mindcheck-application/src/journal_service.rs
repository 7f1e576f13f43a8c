//! Journal use case.

use crate::session_updater::SessionUpdater;
use mindcheck_core::error::Result;
use mindcheck_core::session::SessionId;

/// Appends free-text entries to the session journal.
#[derive(Clone)]
pub struct JournalService {
    sessions: SessionUpdater,
}

impl JournalService {
    pub fn new(sessions: SessionUpdater) -> Self {
        Self { sessions }
    }

    /// Returns the session's entries, oldest first.
    pub async fn entries(&self, session_id: &SessionId) -> Result<Vec<String>> {
        Ok(self.sessions.snapshot(session_id).await?.journal)
    }

    /// Appends `entry` after trimming it and returns the updated entries.
    ///
    /// Missing, empty and whitespace-only entries are dropped silently.
    pub async fn add_entry(&self, session_id: &SessionId, entry: Option<&str>) -> Result<Vec<String>> {
        let entry = entry.unwrap_or_default();
        if entry.trim().is_empty() {
            return self.entries(session_id).await;
        }

        let state = self
            .sessions
            .update(session_id, |state| {
                state.push_journal_entry(entry);
            })
            .await?;
        tracing::debug!(
            "[JournalService] Entry added, session {} now has {} entries",
            session_id,
            state.journal.len()
        );
        Ok(state.journal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindcheck_infrastructure::InMemorySessionStore;
    use std::sync::Arc;

    fn service() -> JournalService {
        let store = Arc::new(InMemorySessionStore::new(chrono::Duration::hours(1)));
        JournalService::new(SessionUpdater::new(store))
    }

    #[tokio::test]
    async fn test_entry_is_trimmed() {
        let service = service();
        let id = SessionId::new();

        let entries = service.add_entry(&id, Some("  hello  ")).await.unwrap();
        assert_eq!(entries, vec!["hello"]);
    }

    #[tokio::test]
    async fn test_blank_entries_are_dropped() {
        let service = service();
        let id = SessionId::new();
        service.add_entry(&id, Some("first")).await.unwrap();

        assert_eq!(service.add_entry(&id, Some("   ")).await.unwrap(), vec!["first"]);
        assert_eq!(service.add_entry(&id, None).await.unwrap(), vec!["first"]);
    }

    #[tokio::test]
    async fn test_entries_keep_insertion_order() {
        let service = service();
        let id = SessionId::new();
        for entry in ["a", "b", "c"] {
            service.add_entry(&id, Some(entry)).await.unwrap();
        }

        assert_eq!(service.entries(&id).await.unwrap(), vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_unknown_session_has_no_entries() {
        let service = service();
        assert!(service.entries(&SessionId::new()).await.unwrap().is_empty());
    }
}
