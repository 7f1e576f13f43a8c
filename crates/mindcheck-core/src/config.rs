//! Application configuration model.
//!
//! The values here are resolved once at startup (see the infrastructure
//! `config_loader`) and are immutable for the rest of the process.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use strum::{Display, EnumString};

/// Session-signing secret used when `SECRET_KEY` is not provided.
///
/// Anyone who knows this value can forge session cookies; the loader logs a
/// warning whenever it is in effect.
pub const INSECURE_DEFAULT_SECRET: &str = "mindcheck-insecure-development-secret";

/// Deployment environment.
#[derive(
    Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Environment {
    /// Verbose logging, human-readable log format.
    Development,
    #[default]
    Production,
}

/// Root configuration.
///
/// Every field has a default so that an empty config file, or none at all,
/// yields a runnable server.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Deployment environment.
    pub environment: Environment,
    /// Secret used to sign session cookies.
    pub secret_key: String,
    /// Path of the serialized classifier.
    pub model_path: PathBuf,
    /// Path of the serialized feature scaler.
    pub scaler_path: PathBuf,
    /// Idle lifetime of a session, in seconds.
    pub session_ttl_secs: u64,
    /// Directory for daily-rolling log files. Stdout only when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            environment: Environment::default(),
            secret_key: INSECURE_DEFAULT_SECRET.to_string(),
            model_path: PathBuf::from("schiz_model.json"),
            scaler_path: PathBuf::from("scaler.json"),
            session_ttl_secs: 24 * 60 * 60,
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Returns true when running in development mode.
    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    /// Returns true if the session secret is the hardcoded fallback.
    pub fn uses_insecure_secret(&self) -> bool {
        self.secret_key == INSECURE_DEFAULT_SECRET
    }

    /// `host:port` string suitable for binding a listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Session idle lifetime.
    pub fn session_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(i64::try_from(self.session_ttl_secs).unwrap_or(i64::MAX))
    }
}
