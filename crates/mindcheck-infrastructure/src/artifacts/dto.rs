//! On-disk artifact formats.

use mindcheck_core::error::{MindcheckError, Result};
use mindcheck_core::model::FEATURE_COUNT;
use serde::{Deserialize, Serialize};

/// The only artifact format version this build understands.
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// Standardization parameters as exported by the training pipeline.
///
/// ```json
/// { "format_version": 1, "mean": [..7], "scale": [..7] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScalerDto {
    pub format_version: u32,
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Linear decision function as exported by the training pipeline.
///
/// ```json
/// { "format_version": 1, "coefficients": [..7], "intercept": 0.0, "classes": [0, 1] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegressionDto {
    pub format_version: u32,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default = "default_classes")]
    pub classes: Vec<i64>,
}

fn default_classes() -> Vec<i64> {
    vec![0, 1]
}

pub(super) fn check_version(artifact: &str, version: u32) -> Result<()> {
    if version != ARTIFACT_FORMAT_VERSION {
        return Err(MindcheckError::artifact(
            artifact,
            format!(
                "unsupported format_version {} (expected {})",
                version, ARTIFACT_FORMAT_VERSION
            ),
        ));
    }
    Ok(())
}

/// Converts a vector of exactly `FEATURE_COUNT` finite values into an array.
pub(super) fn feature_array(artifact: &str, field: &str, values: &[f64]) -> Result<[f64; FEATURE_COUNT]> {
    let array: [f64; FEATURE_COUNT] = values.try_into().map_err(|_| {
        MindcheckError::artifact(
            artifact,
            format!(
                "expected {} values for '{}', got {}",
                FEATURE_COUNT,
                field,
                values.len()
            ),
        )
    })?;

    if let Some(pos) = array.iter().position(|v| !v.is_finite()) {
        return Err(MindcheckError::artifact(
            artifact,
            format!("'{}' contains a non-finite value at index {}", field, pos),
        ));
    }

    Ok(array)
}
