use super::dto::{LogisticRegressionDto, check_version, feature_array};
use mindcheck_core::error::{MindcheckError, Result};
use mindcheck_core::model::{Classifier, FEATURE_COUNT};

/// Binary logistic regression.
///
/// Predicts `classes[1]` when `w·x + b > 0`, `classes[0]` otherwise. The
/// sigmoid is never evaluated since only the sign of the decision matters.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticRegression {
    coefficients: [f64; FEATURE_COUNT],
    intercept: f64,
    classes: [i64; 2],
}

impl LogisticRegression {
    pub fn new(coefficients: [f64; FEATURE_COUNT], intercept: f64, classes: [i64; 2]) -> Self {
        Self {
            coefficients,
            intercept,
            classes,
        }
    }

    /// Signed distance of `features` from the decision boundary.
    pub fn decision_function(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        self.coefficients
            .iter()
            .zip(features.iter())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept
    }
}

impl TryFrom<LogisticRegressionDto> for LogisticRegression {
    type Error = MindcheckError;

    fn try_from(dto: LogisticRegressionDto) -> Result<Self> {
        check_version("classifier", dto.format_version)?;
        let coefficients = feature_array("classifier", "coefficients", &dto.coefficients)?;

        if !dto.intercept.is_finite() {
            return Err(MindcheckError::artifact(
                "classifier",
                "'intercept' is not a finite number",
            ));
        }

        let classes: [i64; 2] = dto.classes.as_slice().try_into().map_err(|_| {
            MindcheckError::artifact(
                "classifier",
                format!("expected 2 classes, got {}", dto.classes.len()),
            )
        })?;

        Ok(Self::new(coefficients, dto.intercept, classes))
    }
}

impl Classifier for LogisticRegression {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<i64> {
        let decision = self.decision_function(features);
        if decision.is_nan() {
            return Err(MindcheckError::computation("decision function returned NaN"));
        }
        Ok(if decision > 0.0 {
            self.classes[1]
        } else {
            self.classes[0]
        })
    }
}
