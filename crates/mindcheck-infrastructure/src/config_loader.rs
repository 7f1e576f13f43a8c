//! Startup configuration loading.
//!
//! Resolution order (later wins):
//! 1. Built-in defaults (`AppConfig::default()`)
//! 2. Optional TOML file named by `MINDCHECK_CONFIG`
//! 3. Individual environment variables (`PORT`, `HOST`, `APP_ENV`,
//!    `SECRET_KEY`, `MODEL_PATH`, `SCALER_PATH`, `SESSION_TTL_SECS`, `LOG_DIR`)
//!
//! Empty environment values count as unset.

use mindcheck_core::config::{AppConfig, Environment};
use mindcheck_core::error::{MindcheckError, Result};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Names the optional TOML config file.
pub const CONFIG_FILE_ENV: &str = "MINDCHECK_CONFIG";

/// Loads the configuration from the process environment.
pub fn load_config() -> Result<AppConfig> {
    load_config_with(|key| std::env::var(key).ok())
}

/// Loads the configuration using `lookup` in place of the process environment.
///
/// # Errors
///
/// Returns `MindcheckError::Config` if the config file cannot be read or a
/// numeric variable does not parse.
pub fn load_config_with<F>(lookup: F) -> Result<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let mut config = match var(CONFIG_FILE_ENV) {
        Some(path) => load_config_file(Path::new(&path))?,
        None => AppConfig::default(),
    };

    if let Some(host) = var("HOST") {
        config.host = host;
    }
    if let Some(port) = var("PORT") {
        config.port = parse_var("PORT", &port)?;
    }
    if let Some(env) = var("APP_ENV") {
        config.environment = if env.trim().eq_ignore_ascii_case("development") {
            Environment::Development
        } else {
            Environment::Production
        };
    }
    if let Some(secret) = var("SECRET_KEY") {
        config.secret_key = secret;
    }
    if let Some(path) = var("MODEL_PATH") {
        config.model_path = PathBuf::from(path);
    }
    if let Some(path) = var("SCALER_PATH") {
        config.scaler_path = PathBuf::from(path);
    }
    if let Some(ttl) = var("SESSION_TTL_SECS") {
        config.session_ttl_secs = parse_var("SESSION_TTL_SECS", &ttl)?;
    }
    if let Some(dir) = var("LOG_DIR") {
        config.log_dir = Some(PathBuf::from(dir));
    }

    Ok(config)
}

/// Reads an `AppConfig` from a TOML file. Missing keys keep their defaults.
pub fn load_config_file(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        MindcheckError::config(format!(
            "Failed to read configuration file at {}: {}",
            path.display(),
            e
        ))
    })?;

    toml::from_str(&content).map_err(|e| {
        MindcheckError::config(format!(
            "Failed to parse configuration file at {}: {}",
            path.display(),
            e
        ))
    })
}

fn parse_var<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| MindcheckError::config(format!("{} must be a number, got '{}': {}", key, value, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = load_config_with(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.uses_insecure_secret());
    }

    #[test]
    fn test_environment_overrides() {
        let config = load_config_with(lookup(&[
            ("PORT", "8080"),
            ("APP_ENV", "development"),
            ("SECRET_KEY", "real-secret"),
            ("MODEL_PATH", "/srv/model.json"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert!(config.is_development());
        assert!(!config.uses_insecure_secret());
        assert_eq!(config.model_path, PathBuf::from("/srv/model.json"));
        assert_eq!(config.scaler_path, PathBuf::from("scaler.json"));
    }

    #[test]
    fn test_non_development_env_is_production() {
        let config = load_config_with(lookup(&[("APP_ENV", "staging")])).unwrap();
        assert_eq!(config.environment, Environment::Production);
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let config = load_config_with(lookup(&[("SECRET_KEY", ""), ("PORT", "  ")])).unwrap();
        assert!(config.uses_insecure_secret());
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_invalid_port_is_config_error() {
        let err = load_config_with(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_file_then_environment() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mindcheck.toml");
        std::fs::write(&path, "port = 7000\nhost = \"127.0.0.1\"\nsession_ttl_secs = 60\n").unwrap();

        let config = load_config_with(lookup(&[
            (CONFIG_FILE_ENV, path.to_str().unwrap()),
            ("PORT", "7001"),
        ]))
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 7001);
        assert_eq!(config.session_ttl_secs, 60);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = load_config_with(lookup(&[(CONFIG_FILE_ENV, "/nonexistent/mindcheck.toml")]))
            .unwrap_err();
        assert!(err.is_config());
    }
}
