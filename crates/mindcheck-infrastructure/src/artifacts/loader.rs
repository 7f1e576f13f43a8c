//! Startup loading of the classifier and scaler.

use super::classifier::LogisticRegression;
use super::dto::{LogisticRegressionDto, StandardScalerDto};
use super::scaler::StandardScaler;
use mindcheck_core::error::{MindcheckError, Result};
use mindcheck_core::model::ModelBundle;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;

fn read_artifact<T: DeserializeOwned>(artifact: &str, path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        MindcheckError::io(format!(
            "Failed to read {} artifact at {}: {}",
            artifact,
            path.display(),
            e
        ))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        MindcheckError::artifact(
            artifact,
            format!("failed to parse {}: {}", path.display(), e),
        )
    })
}

/// Loads and validates the feature scaler at `path`.
pub fn load_scaler(path: &Path) -> Result<StandardScaler> {
    let dto: StandardScalerDto = read_artifact("scaler", path)?;
    StandardScaler::try_from(dto)
}

/// Loads and validates the classifier at `path`.
pub fn load_classifier(path: &Path) -> Result<LogisticRegression> {
    let dto: LogisticRegressionDto = read_artifact("classifier", path)?;
    LogisticRegression::try_from(dto)
}

/// Loads both artifacts into a bundle.
///
/// # Errors
///
/// Returns the first failure; a bundle is never built from a single artifact.
pub fn load_model_bundle(model_path: &Path, scaler_path: &Path) -> Result<ModelBundle> {
    let classifier = load_classifier(model_path)?;
    let scaler = load_scaler(scaler_path)?;
    Ok(ModelBundle::new(Arc::new(scaler), Arc::new(classifier)))
}

/// Loads both artifacts, logging and swallowing any failure.
///
/// Returns `None` when either artifact is unusable; the server keeps running
/// and the prediction route reports that the model is unavailable.
pub fn try_load_model_bundle(model_path: &Path, scaler_path: &Path) -> Option<ModelBundle> {
    match load_model_bundle(model_path, scaler_path) {
        Ok(bundle) => {
            tracing::info!(
                model = %model_path.display(),
                scaler = %scaler_path.display(),
                "[Artifacts] Models loaded successfully"
            );
            Some(bundle)
        }
        Err(e) => {
            tracing::error!("[Artifacts] Error loading models: {}", e);
            None
        }
    }
}
