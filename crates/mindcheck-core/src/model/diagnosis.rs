//! Mapping from classifier labels to displayed results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shown in place of a result when the artifacts failed to load.
pub const MODEL_UNAVAILABLE_MESSAGE: &str = "Model not available. Please contact administrator.";

/// The two outcomes a prediction can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diagnosis {
    /// Classifier label `1`.
    Schizophrenia,
    /// Every other label.
    Sibling,
}

impl Diagnosis {
    /// Maps a raw class label to a diagnosis.
    ///
    /// Only `1` is positive. Any other value, including labels the model was
    /// never trained to produce, falls into the negative class; callers log
    /// those with [`Diagnosis::is_expected_label`].
    pub fn from_label(label: i64) -> Self {
        if label == 1 {
            Self::Schizophrenia
        } else {
            Self::Sibling
        }
    }

    /// Returns true for the two labels the classifier is trained on.
    pub fn is_expected_label(label: i64) -> bool {
        label == 0 || label == 1
    }

    /// Human-readable label stored in the session.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Schizophrenia => "Schizophrenia",
            Self::Sibling => "Sibling (no schizophrenia)",
        }
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
