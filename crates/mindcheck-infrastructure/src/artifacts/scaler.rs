use super::dto::{StandardScalerDto, check_version, feature_array};
use mindcheck_core::error::{MindcheckError, Result};
use mindcheck_core::model::{FEATURE_COUNT, FEATURE_NAMES, FeatureScaler};

/// Per-feature standardization: `(x - mean) / scale`.
///
/// A zero scale (a constant feature in the training data) is treated as `1`,
/// so the feature is only centered.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: [f64; FEATURE_COUNT],
    scale: [f64; FEATURE_COUNT],
}

impl StandardScaler {
    pub fn new(mean: [f64; FEATURE_COUNT], scale: [f64; FEATURE_COUNT]) -> Self {
        let scale = scale.map(|s| if s == 0.0 { 1.0 } else { s });
        Self { mean, scale }
    }
}

impl TryFrom<StandardScalerDto> for StandardScaler {
    type Error = MindcheckError;

    fn try_from(dto: StandardScalerDto) -> Result<Self> {
        check_version("scaler", dto.format_version)?;
        let mean = feature_array("scaler", "mean", &dto.mean)?;
        let scale = feature_array("scaler", "scale", &dto.scale)?;
        Ok(Self::new(mean, scale))
    }
}

impl FeatureScaler for StandardScaler {
    fn transform(&self, features: &[f64; FEATURE_COUNT]) -> Result<[f64; FEATURE_COUNT]> {
        let mut scaled = [0.0; FEATURE_COUNT];
        for (i, value) in features.iter().enumerate() {
            let v = (value - self.mean[i]) / self.scale[i];
            if !v.is_finite() {
                return Err(MindcheckError::computation(format!(
                    "feature '{}' is not a finite number after scaling",
                    FEATURE_NAMES[i]
                )));
            }
            scaled[i] = v;
        }
        Ok(scaled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(mean: Vec<f64>, scale: Vec<f64>) -> StandardScalerDto {
        StandardScalerDto {
            format_version: 1,
            mean,
            scale,
        }
    }

    #[test]
    fn test_transform_standardizes() {
        let scaler = StandardScaler::new([10.0; 7], [2.0; 7]);
        let scaled = scaler.transform(&[12.0, 8.0, 10.0, 14.0, 10.0, 10.0, 10.0]).unwrap();
        assert_eq!(scaled, [1.0, -1.0, 0.0, 2.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_zero_scale_only_centers() {
        let scaler = StandardScaler::new([1.0; 7], [0.0; 7]);
        let scaled = scaler.transform(&[3.0; 7]).unwrap();
        assert_eq!(scaled, [2.0; 7]);
    }

    #[test]
    fn test_non_finite_input_is_an_error() {
        let scaler = StandardScaler::new([0.0; 7], [1.0; 7]);
        let mut input = [0.0; 7];
        input[0] = f64::INFINITY;

        let err = scaler.transform(&input).unwrap_err();
        assert!(err.to_string().contains("age"));
    }

    #[test]
    fn test_dto_dimension_mismatch() {
        let err = StandardScaler::try_from(dto(vec![0.0; 6], vec![1.0; 7])).unwrap_err();
        assert!(err.is_artifact());
        assert!(err.to_string().contains("expected 7 values for 'mean', got 6"));
    }

    #[test]
    fn test_dto_version_mismatch() {
        let mut bad = dto(vec![0.0; 7], vec![1.0; 7]);
        bad.format_version = 2;
        let err = StandardScaler::try_from(bad).unwrap_err();
        assert!(err.to_string().contains("unsupported format_version 2"));
    }
}
