use serde::Serialize;
use serde_json::Value;
use smogcast_core::PollutantReadings;

use crate::error::AppError;

/// City label used when the request does not name one.
pub const UNKNOWN_CITY: &str = "Unknown";

// === HTTP DTOs ===

/// Parsed body of `POST /predict`.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictRequest {
    pub readings: PollutantReadings,
    /// Echoed back verbatim, whatever JSON type it has.
    pub city: Option<Value>,
}

impl PredictRequest {
    /// Parses a raw request body. Content type is not checked.
    pub fn from_slice(body: &[u8]) -> Result<Self, AppError> {
        let value: Value = serde_json::from_slice(body)?;
        let readings = PollutantReadings::from_json(&value)?;
        Ok(Self {
            readings,
            city: value.get("city").cloned(),
        })
    }

    pub fn city_or_default(&self) -> Value {
        self.city
            .clone()
            .unwrap_or_else(|| Value::String(UNKNOWN_CITY.into()))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictResponse {
    pub aqi: f64,
    pub category: &'static str,
    pub color: &'static str,
    pub city: Value,
}
