//! Prediction use case.
//!
//! Parses the seven screening fields, runs them through the loaded model
//! bundle and stores the resulting label in the session. Every failure is
//! turned into a displayable message; nothing here fails the request.

use crate::form_fields::FormFields;
use crate::session_updater::SessionUpdater;
use mindcheck_core::error::{MindcheckError, Result};
use mindcheck_core::model::{Diagnosis, FeatureVector, MODEL_UNAVAILABLE_MESSAGE, ModelBundle};
use mindcheck_core::session::SessionId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Raw form fields as submitted. Parsing happens in [`PredictionForm::parse`]
/// so that bad input becomes a message rather than a rejected request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionForm {
    pub age: Option<String>,
    pub yrschool: Option<String>,
    pub gender: Option<String>,
    pub q1: Option<String>,
    pub q2: Option<String>,
    pub q3: Option<String>,
    pub q4: Option<String>,
}

/// Why a submission could not be evaluated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    #[error("missing field '{0}'")]
    MissingField(&'static str),

    #[error("could not convert '{value}' to {expected} for field '{field}': {reason}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        expected: &'static str,
        reason: String,
    },

    #[error(transparent)]
    Model(#[from] MindcheckError),
}

fn parse_field<T>(field: &'static str, raw: Option<&str>, expected: &'static str) -> std::result::Result<T, PredictionError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = raw.ok_or(PredictionError::MissingField(field))?;
    raw.trim()
        .parse()
        .map_err(|e: T::Err| PredictionError::InvalidNumber {
            field,
            value: raw.to_string(),
            expected,
            reason: e.to_string(),
        })
}

impl PredictionForm {
    /// Picks the seven screening fields out of a raw submission.
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            age: fields.first_owned("age"),
            yrschool: fields.first_owned("yrschool"),
            gender: fields.first_owned("gender"),
            q1: fields.first_owned("q1"),
            q2: fields.first_owned("q2"),
            q3: fields.first_owned("q3"),
            q4: fields.first_owned("q4"),
        }
    }

    /// Parses the fields into a feature vector.
    ///
    /// `age` and `q1..q4` are floats; `yrschool` and `gender` must be integers.
    pub fn parse(&self) -> std::result::Result<FeatureVector, PredictionError> {
        Ok(FeatureVector {
            age: parse_field("age", self.age.as_deref(), "float")?,
            yrschool: parse_field("yrschool", self.yrschool.as_deref(), "integer")?,
            gender: parse_field("gender", self.gender.as_deref(), "integer")?,
            q1: parse_field("q1", self.q1.as_deref(), "float")?,
            q2: parse_field("q2", self.q2.as_deref(), "float")?,
            q3: parse_field("q3", self.q3.as_deref(), "float")?,
            q4: parse_field("q4", self.q4.as_deref(), "float")?,
        })
    }
}

/// Result of one prediction submission.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    /// The artifacts are not loaded.
    Unavailable,
    /// The model produced a diagnosis.
    Predicted(Diagnosis),
    /// Input could not be parsed or evaluated.
    Failed(PredictionError),
}

impl PredictionOutcome {
    /// The text shown to the user.
    pub fn message(&self) -> String {
        match self {
            Self::Unavailable => MODEL_UNAVAILABLE_MESSAGE.to_string(),
            Self::Predicted(diagnosis) => diagnosis.as_str().to_string(),
            Self::Failed(err) => format!("Error: {}", err),
        }
    }
}

/// Runs submissions against the optional model bundle.
#[derive(Clone)]
pub struct PredictionService {
    model: Option<ModelBundle>,
    sessions: SessionUpdater,
}

impl PredictionService {
    pub fn new(model: Option<ModelBundle>, sessions: SessionUpdater) -> Self {
        Self { model, sessions }
    }

    /// Returns true if both artifacts are loaded.
    pub fn is_available(&self) -> bool {
        self.model.is_some()
    }

    /// Evaluates a submission without touching any session.
    pub fn evaluate(&self, form: &PredictionForm) -> PredictionOutcome {
        let Some(model) = &self.model else {
            return PredictionOutcome::Unavailable;
        };

        let features = match form.parse() {
            Ok(features) => features,
            Err(e) => return PredictionOutcome::Failed(e),
        };

        match model.predict(&features.to_array()) {
            Ok(label) => {
                if !Diagnosis::is_expected_label(label) {
                    tracing::warn!(
                        "[PredictionService] Classifier returned unexpected label {}, treating as negative class",
                        label
                    );
                }
                PredictionOutcome::Predicted(Diagnosis::from_label(label))
            }
            Err(e) => PredictionOutcome::Failed(e.into()),
        }
    }

    /// Evaluates a submission and stores a successful label in the session.
    ///
    /// # Errors
    ///
    /// Only session store failures are returned; evaluation failures are
    /// reported through the outcome.
    pub async fn submit(&self, session_id: &SessionId, form: &PredictionForm) -> Result<PredictionOutcome> {
        let outcome = self.evaluate(form);

        match &outcome {
            PredictionOutcome::Predicted(diagnosis) => {
                let label = diagnosis.as_str();
                self.sessions
                    .update(session_id, |state| state.set_prediction(label))
                    .await?;
                tracing::info!("[PredictionService] Prediction stored: {}", label);
            }
            PredictionOutcome::Failed(e) => {
                tracing::debug!("[PredictionService] Submission rejected: {}", e);
            }
            PredictionOutcome::Unavailable => {
                tracing::warn!("[PredictionService] Prediction requested but model is not loaded");
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindcheck_core::model::{Classifier, FEATURE_COUNT, FeatureScaler};
    use mindcheck_core::session::SessionStore;
    use mindcheck_infrastructure::{InMemorySessionStore, LogisticRegression, StandardScaler};
    use std::sync::Arc;

    fn valid_form() -> PredictionForm {
        PredictionForm {
            age: Some("30".into()),
            yrschool: Some("12".into()),
            gender: Some("1".into()),
            q1: Some("1".into()),
            q2: Some("1".into()),
            q3: Some("1".into()),
            q4: Some("1".into()),
        }
    }

    #[test]
    fn test_from_fields_keeps_first_of_repeated_values() {
        let fields = FormFields::new(vec![
            ("age".to_string(), "30".to_string()),
            ("age".to_string(), "31".to_string()),
            ("yrschool".to_string(), "12".to_string()),
            ("gender".to_string(), "1".to_string()),
            ("q1".to_string(), "1".to_string()),
            ("q2".to_string(), "1".to_string()),
            ("q3".to_string(), "1".to_string()),
            ("q4".to_string(), "1".to_string()),
        ]);

        assert_eq!(PredictionForm::from_fields(&fields), valid_form());
    }

    #[test]
    fn test_from_empty_fields_reports_first_missing_field() {
        let form = PredictionForm::from_fields(&FormFields::default());
        assert_eq!(form.parse(), Err(PredictionError::MissingField("age")));
    }

    fn store() -> Arc<InMemorySessionStore> {
        Arc::new(InMemorySessionStore::new(chrono::Duration::hours(1)))
    }

    fn bundle(intercept: f64) -> ModelBundle {
        ModelBundle::new(
            Arc::new(StandardScaler::new([35.0, 12.0, 0.5, 1.0, 1.0, 1.0, 1.0], [10.0; 7])),
            Arc::new(LogisticRegression::new([0.0; 7], intercept, [0, 1])),
        )
    }

    struct ConstantLabel(i64);

    impl Classifier for ConstantLabel {
        fn predict(&self, _features: &[f64; FEATURE_COUNT]) -> Result<i64> {
            Ok(self.0)
        }
    }

    struct Identity;

    impl FeatureScaler for Identity {
        fn transform(&self, features: &[f64; FEATURE_COUNT]) -> Result<[f64; FEATURE_COUNT]> {
            Ok(*features)
        }
    }

    #[test]
    fn test_parse_valid_form() {
        let features = valid_form().parse().unwrap();
        assert_eq!(features.to_array(), [30.0, 12.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_yrschool_must_be_integer() {
        let mut form = valid_form();
        form.yrschool = Some("12.5".into());
        let err = form.parse().unwrap_err();
        assert!(matches!(err, PredictionError::InvalidNumber { field: "yrschool", .. }));
    }

    #[test]
    fn test_missing_field() {
        let mut form = valid_form();
        form.q3 = None;
        assert_eq!(form.parse().unwrap_err(), PredictionError::MissingField("q3"));
    }

    #[test]
    fn test_unavailable_without_model() {
        let service = PredictionService::new(None, SessionUpdater::new(store()));
        let outcome = service.evaluate(&valid_form());

        assert!(!service.is_available());
        assert_eq!(
            outcome.message(),
            "Model not available. Please contact administrator."
        );
    }

    #[test]
    fn test_unavailable_even_with_bad_input() {
        let service = PredictionService::new(None, SessionUpdater::new(store()));
        let mut form = valid_form();
        form.age = Some("abc".into());

        assert_eq!(service.evaluate(&form), PredictionOutcome::Unavailable);
    }

    #[test]
    fn test_non_numeric_age_is_error_message() {
        let service = PredictionService::new(Some(bundle(1.0)), SessionUpdater::new(store()));
        let mut form = valid_form();
        form.age = Some("abc".into());

        let message = service.evaluate(&form).message();
        assert!(message.starts_with("Error: "), "got {}", message);
        assert!(message.contains("age"));
    }

    #[test]
    fn test_reference_input_yields_a_known_label() {
        for intercept in [-1.0, 1.0] {
            let service = PredictionService::new(Some(bundle(intercept)), SessionUpdater::new(store()));
            let message = service.evaluate(&valid_form()).message();
            assert!(
                message == "Schizophrenia" || message == "Sibling (no schizophrenia)",
                "got {}",
                message
            );
        }
    }

    #[test]
    fn test_unexpected_label_maps_to_sibling() {
        let model = ModelBundle::new(Arc::new(Identity), Arc::new(ConstantLabel(5)));
        let service = PredictionService::new(Some(model), SessionUpdater::new(store()));

        assert_eq!(
            service.evaluate(&valid_form()),
            PredictionOutcome::Predicted(Diagnosis::Sibling)
        );
    }

    #[test]
    fn test_non_finite_input_is_error_message() {
        let service = PredictionService::new(Some(bundle(1.0)), SessionUpdater::new(store()));
        let mut form = valid_form();
        form.q1 = Some("inf".into());

        assert!(service.evaluate(&form).message().starts_with("Error: "));
    }

    #[tokio::test]
    async fn test_submit_stores_label() {
        let store = store();
        let service = PredictionService::new(Some(bundle(1.0)), SessionUpdater::new(store.clone()));
        let id = SessionId::new();

        let outcome = service.submit(&id, &valid_form()).await.unwrap();
        assert_eq!(outcome, PredictionOutcome::Predicted(Diagnosis::Schizophrenia));

        let state = store.get(&id).await.unwrap().unwrap();
        assert_eq!(state.prediction.as_deref(), Some("Schizophrenia"));
    }

    #[tokio::test]
    async fn test_submit_failure_stores_nothing() {
        let store = store();
        let service = PredictionService::new(Some(bundle(1.0)), SessionUpdater::new(store.clone()));
        let id = SessionId::new();
        let mut form = valid_form();
        form.gender = Some("x".into());

        service.submit(&id, &form).await.unwrap();
        assert!(store.get(&id).await.unwrap().is_none());
    }
}
