//! AQI prediction handler.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::Json;
use tracing::{debug, warn};

use crate::dto::{PredictRequest, PredictResponse};
use crate::error::AppError;
use crate::services::prediction;
use crate::ServerState;

/// POST /predict - Predict AQI from pollutant readings.
///
/// The body is read raw so that malformed JSON and wrong content types come
/// back as 400 `{error}` rather than the extractor's own rejection.
pub async fn predict(
    State(state): State<Arc<ServerState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<PredictResponse>, AppError> {
    let result = body
        .map_err(AppError::from)
        .and_then(|body| PredictRequest::from_slice(&body))
        .and_then(|req| prediction::predict(&state, &req));

    match result {
        Ok(response) => {
            debug!(aqi = response.aqi, category = response.category, "Prediction served");
            Ok(Json(response))
        }
        Err(e) => {
            warn!("Prediction request failed: {}", e.message());
            Err(e)
        }
    }
}
