//! Session domain module.
//!
//! This module contains the per-browser session record, the chat transcript
//! types and the storage interface the server layer resolves sessions through.
//!
//! # Module Structure
//!
//! - `model`: Typed session record (`SessionState`) with defaults
//! - `message`: Chat transcript types (`Speaker`, `ChatEntry`)
//! - `id`: Opaque session identifier (`SessionId`)
//! - `store`: Storage trait for session state (`SessionStore`)

mod id;
mod message;
mod model;
mod store;

// Re-export public API
pub use id::SessionId;
pub use message::{ChatEntry, Speaker};
pub use model::{DEFAULT_MOOD, SessionState};
pub use store::{SessionMutation, SessionStore};
