//! AQI prediction pipeline: readings → scale → infer → categorize.

use smogcast_core::{round_aqi, AqiCategory};
use smogcast_model::ModelError;

use crate::dto::{PredictRequest, PredictResponse};
use crate::error::AppError;
use crate::ServerState;

/// Raw model estimate and its band, before rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub aqi: f64,
    pub category: AqiCategory,
}

/// Runs the scaler and regressor over one set of readings.
pub fn estimate(state: &ServerState, req: &PredictRequest) -> Result<Prediction, AppError> {
    let features = req.readings.to_array();
    let scaled = state.scaler.transform(&features)?;

    let outputs = state.regressor.predict(&scaled)?;
    let aqi = *outputs.first().ok_or(ModelError::EmptyOutput)?;
    if !aqi.is_finite() {
        return Err(ModelError::NonFinite { stage: "prediction", value: aqi }.into());
    }

    Ok(Prediction {
        aqi,
        category: AqiCategory::from_aqi(aqi),
    })
}

/// Builds the `/predict` response body.
pub fn predict(state: &ServerState, req: &PredictRequest) -> Result<PredictResponse, AppError> {
    let prediction = estimate(state, req)?;
    Ok(PredictResponse {
        aqi: round_aqi(prediction.aqi),
        category: prediction.category.label(),
        color: prediction.category.color(),
        city: req.city_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use smogcast_core::{PollutantReadings, FEATURE_COUNT};
    use smogcast_model::{Regressor, StandardScaler};

    struct FixedRegressor(f64);

    impl Regressor for FixedRegressor {
        fn predict(&self, _: &[f64; FEATURE_COUNT]) -> Result<Vec<f64>, ModelError> {
            Ok(vec![self.0])
        }
    }

    /// `weight * x[0] + bias`
    struct AffineRegressor {
        weight: f64,
        bias: f64,
    }

    impl Regressor for AffineRegressor {
        fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<Vec<f64>, ModelError> {
            Ok(vec![self.weight * features[0] + self.bias])
        }
    }

    struct SumRegressor;

    impl Regressor for SumRegressor {
        fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<Vec<f64>, ModelError> {
            Ok(vec![features.iter().sum()])
        }
    }

    struct NoOutput;

    impl Regressor for NoOutput {
        fn predict(&self, _: &[f64; FEATURE_COUNT]) -> Result<Vec<f64>, ModelError> {
            Ok(vec![])
        }
    }

    fn request(readings: PollutantReadings) -> PredictRequest {
        PredictRequest { readings, city: None }
    }

    #[test]
    fn test_categorizes_unrounded_value() {
        let state = ServerState::new(StandardScaler::identity(), FixedRegressor(50.004));
        let response = predict(&state, &request(PollutantReadings::default())).unwrap();
        assert_eq!(response.aqi, 50.0);
        assert_eq!(response.category, "Moderate");
        assert_eq!(response.city, json!("Unknown"));
    }

    #[test]
    fn test_scaler_feeds_regressor() {
        let mut mean = [0.0; FEATURE_COUNT];
        let mut scale = [1.0; FEATURE_COUNT];
        mean[0] = 50.0;
        scale[0] = 10.0;

        let state = ServerState::new(
            StandardScaler::new(mean, scale),
            AffineRegressor { weight: 40.0, bias: 100.0 },
        );
        let mut readings = PollutantReadings::default();
        readings.pm2_5 = 70.0;

        let prediction = estimate(&state, &request(readings)).unwrap();
        assert_eq!(prediction.aqi, 180.0);
        assert_eq!(prediction.category, AqiCategory::Unhealthy);
    }

    #[test]
    fn test_empty_output_is_request_error() {
        let state = ServerState::new(StandardScaler::identity(), NoOutput);
        let err = estimate(&state, &request(PollutantReadings::default())).unwrap_err();
        assert_eq!(err.message(), "Model produced no output");
    }

    #[test]
    fn test_non_finite_is_request_error() {
        let state = ServerState::new(StandardScaler::identity(), SumRegressor);
        let mut readings = PollutantReadings::default();
        readings.co = f64::INFINITY;
        let err = estimate(&state, &request(readings)).unwrap_err();
        assert!(err.message().contains("Non-finite"));
    }
}
