//! HTTP server for MindCheck.
//!
//! Wires the application services into an axum router. `main.rs` only
//! loads configuration, installs logging and serves [`routes::router`].

pub mod bootstrap;
pub mod context;
pub mod error;
pub mod routes;
pub mod session_layer;
pub mod views;

pub use bootstrap::{bootstrap, spawn_session_sweeper};
pub use context::AppContext;
pub use routes::router;
