//! Domain layer for MindCheck.
//!
//! Holds the typed session record, the artifact traits the prediction path
//! depends on, the configuration model and the shared error type. Nothing in
//! this crate touches the file system or the network.

pub mod config;
pub mod error;
pub mod model;
pub mod session;

// Re-export common error type
pub use error::{MindcheckError, Result};
