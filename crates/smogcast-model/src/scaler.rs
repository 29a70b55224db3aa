//! Standard (z-score) feature scaler.

use serde::Deserialize;
use smogcast_core::{feature_names, FEATURE_COUNT};

use crate::{ArtifactError, FeatureScaler, ModelError};

/// Scales below this magnitude are treated as 1 (constant feature).
const MIN_SCALE: f64 = 1e-10;

/// Per-feature standardization: `z = (x - mean) / scale`.
#[derive(Debug, Clone, Deserialize)]
pub struct StandardScaler {
    /// Column names the scaler was fit on, if recorded.
    #[serde(default)]
    feature_names: Option<Vec<String>>,
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    pub fn new(mean: [f64; FEATURE_COUNT], scale: [f64; FEATURE_COUNT]) -> Self {
        Self {
            feature_names: Some(feature_names().iter().map(|s| s.to_string()).collect()),
            mean: mean.to_vec(),
            scale: scale.to_vec(),
        }
    }

    /// A scaler that passes features through unchanged.
    pub fn identity() -> Self {
        Self::new([0.0; FEATURE_COUNT], [1.0; FEATURE_COUNT])
    }

    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    /// Checks the fitted parameters against the fixed feature schema.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        for (name, values) in [("mean", &self.mean), ("scale", &self.scale)] {
            if values.len() != FEATURE_COUNT {
                return Err(ArtifactError::Shape(format!(
                    "scaler {name}: expected {FEATURE_COUNT} values, got {}",
                    values.len()
                )));
            }
            if let Some(i) = values.iter().position(|v| !v.is_finite()) {
                return Err(ArtifactError::Shape(format!(
                    "scaler {name}[{i}] is not finite"
                )));
            }
        }

        if let Some(names) = &self.feature_names {
            let expected = feature_names();
            if names.len() != expected.len() || names.iter().zip(expected).any(|(a, b)| a != b) {
                return Err(ArtifactError::Shape(format!(
                    "scaler feature order {names:?} does not match {expected:?}"
                )));
            }
        }

        Ok(())
    }
}

impl FeatureScaler for StandardScaler {
    fn transform(&self, features: &[f64; FEATURE_COUNT]) -> Result<[f64; FEATURE_COUNT], ModelError> {
        if self.mean.len() != FEATURE_COUNT || self.scale.len() != FEATURE_COUNT {
            return Err(ModelError::DimensionMismatch {
                expected: FEATURE_COUNT,
                actual: self.mean.len().min(self.scale.len()),
            });
        }

        let mut scaled = [0.0; FEATURE_COUNT];
        for (j, out) in scaled.iter_mut().enumerate() {
            let scale = if self.scale[j].abs() < MIN_SCALE { 1.0 } else { self.scale[j] };
            *out = (features[j] - self.mean[j]) / scale;
        }
        Ok(scaled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_standardizes() {
        let mut mean = [0.0; FEATURE_COUNT];
        let mut scale = [1.0; FEATURE_COUNT];
        mean[0] = 60.0;
        scale[0] = 20.0;
        mean[6] = 2.0;
        scale[6] = 0.5;

        let scaler = StandardScaler::new(mean, scale);
        let mut raw = [0.0; FEATURE_COUNT];
        raw[0] = 100.0;
        raw[6] = 1.0;
        raw[11] = 3.0;

        let scaled = scaler.transform(&raw).unwrap();
        assert_eq!(scaled[0], 2.0);
        assert_eq!(scaled[6], -2.0);
        assert_eq!(scaled[11], 3.0);
    }

    #[test]
    fn test_zero_scale_is_treated_as_one() {
        let mut mean = [0.0; FEATURE_COUNT];
        let mut scale = [1.0; FEATURE_COUNT];
        mean[3] = 5.0;
        scale[3] = 0.0;

        let scaled = StandardScaler::new(mean, scale).transform(&[7.0; FEATURE_COUNT]).unwrap();
        assert_eq!(scaled[3], 2.0);
        assert!(scaled.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_identity() {
        let raw = [1.5; FEATURE_COUNT];
        assert_eq!(StandardScaler::identity().transform(&raw).unwrap(), raw);
    }

    #[test]
    fn test_validate_feature_order() {
        let json = serde_json::json!({
            "feature_names": ["PM10", "PM2.5", "NO", "NO2", "NOx", "NH3", "CO", "SO2", "O3", "Benzene", "Toluene", "Xylene"],
            "mean": vec![0.0; 12],
            "scale": vec![1.0; 12],
        });
        let scaler: StandardScaler = serde_json::from_value(json).unwrap();
        let err = scaler.validate().unwrap_err();
        assert!(err.to_string().contains("feature order"));

        assert!(StandardScaler::identity().validate().is_ok());
    }

    #[test]
    fn test_unvalidated_short_scaler_errors_instead_of_panicking() {
        let scaler: StandardScaler =
            serde_json::from_value(serde_json::json!({"mean": [0.0], "scale": [1.0]})).unwrap();
        let err = scaler.transform(&[0.0; FEATURE_COUNT]).unwrap_err();
        assert_eq!(err, ModelError::DimensionMismatch { expected: 12, actual: 1 });
    }
}
