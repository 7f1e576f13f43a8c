//! Infrastructure layer for MindCheck.
//!
//! Concrete implementations of the domain interfaces: artifact loading from
//! disk, the in-memory session store, cookie signing, configuration loading
//! and logging setup.

pub mod artifacts;
pub mod config_loader;
pub mod logging;
pub mod session_store;
pub mod signing;

pub use crate::artifacts::{LogisticRegression, StandardScaler, try_load_model_bundle};
pub use crate::config_loader::load_config;
pub use crate::session_store::InMemorySessionStore;
pub use crate::signing::SessionSigner;
