//! Artifact traits and the loaded model bundle.

use super::features::FEATURE_COUNT;
use crate::error::Result;
use std::fmt;
use std::sync::Arc;

/// A deterministic transform applied to raw features before classification.
pub trait FeatureScaler: Send + Sync {
    /// Transforms one feature vector.
    ///
    /// # Errors
    ///
    /// Returns `MindcheckError::Computation` if the transform produces a
    /// non-finite value.
    fn transform(&self, features: &[f64; FEATURE_COUNT]) -> Result<[f64; FEATURE_COUNT]>;
}

/// A binary classifier over scaled features.
pub trait Classifier: Send + Sync {
    /// Returns the predicted class label for one scaled feature vector.
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<i64>;
}

/// The classifier and scaler, loaded together.
///
/// A bundle only exists when both artifacts loaded; the application holds an
/// `Option<ModelBundle>` and treats `None` as "model not available".
#[derive(Clone)]
pub struct ModelBundle {
    scaler: Arc<dyn FeatureScaler>,
    classifier: Arc<dyn Classifier>,
}

impl ModelBundle {
    pub fn new(scaler: Arc<dyn FeatureScaler>, classifier: Arc<dyn Classifier>) -> Self {
        Self { scaler, classifier }
    }

    /// Scales `features` and classifies the result.
    pub fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<i64> {
        let scaled = self.scaler.transform(features)?;
        self.classifier.predict(&scaled)
    }
}

impl fmt::Debug for ModelBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelBundle").finish_non_exhaustive()
    }
}
