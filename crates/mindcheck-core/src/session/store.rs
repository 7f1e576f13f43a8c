//! Session store trait.
//!
//! Defines the interface for reading and mutating per-browser session state.

use super::id::SessionId;
use super::model::SessionState;
use crate::error::Result;
use async_trait::async_trait;

/// A mutation applied to a session inside the store's critical section.
pub type SessionMutation<'a> = Box<dyn FnOnce(&mut SessionState) + Send + 'a>;

/// An abstract store for session state.
///
/// This trait decouples request handling from where session state lives
/// (process memory today). Sessions are transient: nothing here implies
/// persistence across restarts.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Apply `update` as one read-modify-write, so two requests on the same
///   session cannot lose each other's changes
/// - Treat an expired session exactly like a missing one
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns a snapshot of the session, or `None` if it does not exist
    /// or has expired.
    async fn get(&self, id: &SessionId) -> Result<Option<SessionState>>;

    /// Returns true if a live session exists for `id`.
    async fn contains(&self, id: &SessionId) -> Result<bool> {
        Ok(self.get(id).await?.is_some())
    }

    /// Stores a fresh session under `id`, replacing any previous state.
    async fn insert(&self, id: &SessionId, state: SessionState) -> Result<()>;

    /// Applies `mutation` to the session and returns the updated snapshot.
    ///
    /// A missing or expired session is replaced by `SessionState::default()`
    /// before the mutation runs.
    async fn update<'a>(
        &self,
        id: &SessionId,
        mutation: SessionMutation<'a>,
    ) -> Result<SessionState>;

    /// Deletes a session (no-op if it does not exist).
    async fn remove(&self, id: &SessionId) -> Result<()>;

    /// Drops every session idle for longer than the store's TTL.
    ///
    /// Returns the number of sessions evicted.
    async fn evict_expired(&self) -> Result<usize>;
}
