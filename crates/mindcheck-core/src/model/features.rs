//! Feature vector passed to the scaler and classifier.

use serde::{Deserialize, Serialize};

/// Number of features the artifacts are trained on.
pub const FEATURE_COUNT: usize = 7;

/// Feature names in the order the artifacts expect them.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] =
    ["age", "yrschool", "gender", "q1", "q2", "q3", "q4"];

/// The seven screening inputs.
///
/// `yrschool` and `gender` are integral on input and widened to `f64` when the
/// vector is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub age: f64,
    pub yrschool: i64,
    pub gender: i64,
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    pub q4: f64,
}

impl FeatureVector {
    /// Returns the features in the fixed order
    /// `[age, yrschool, gender, q1, q2, q3, q4]`.
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.age,
            self.yrschool as f64,
            self.gender as f64,
            self.q1,
            self.q2,
            self.q3,
            self.q4,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_array_order() {
        let features = FeatureVector {
            age: 30.5,
            yrschool: 12,
            gender: 1,
            q1: 2.0,
            q2: 3.0,
            q3: 4.0,
            q4: 5.0,
        };
        assert_eq!(
            features.to_array(),
            [30.5, 12.0, 1.0, 2.0, 3.0, 4.0, 5.0]
        );
    }
}
