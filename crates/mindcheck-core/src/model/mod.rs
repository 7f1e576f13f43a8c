//! Classification domain module.
//!
//! The classifier and the feature scaler are opaque, externally trained
//! artifacts. This module only fixes what the rest of the application relies
//! on: the shape of the feature vector, the two operations the artifacts
//! expose, and how a raw class label maps onto a displayed diagnosis.

mod bundle;
mod diagnosis;
mod features;

pub use bundle::{Classifier, FeatureScaler, ModelBundle};
pub use diagnosis::{Diagnosis, MODEL_UNAVAILABLE_MESSAGE};
pub use features::{FEATURE_COUNT, FEATURE_NAMES, FeatureVector};
