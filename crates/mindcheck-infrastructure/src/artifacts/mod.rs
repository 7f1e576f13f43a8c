//! Serialized model artifacts.
//!
//! The classifier and scaler are trained elsewhere and exported as small JSON
//! documents. This module validates those documents into concrete
//! `FeatureScaler` / `Classifier` implementations and assembles them into a
//! `ModelBundle`.

mod classifier;
mod dto;
mod loader;
mod scaler;

pub use classifier::LogisticRegression;
pub use dto::{ARTIFACT_FORMAT_VERSION, LogisticRegressionDto, StandardScalerDto};
pub use loader::{load_classifier, load_model_bundle, load_scaler, try_load_model_bundle};
pub use scaler::StandardScaler;
