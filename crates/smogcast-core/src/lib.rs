//! Core domain types for smogcast.
//!
//! This crate provides the pieces shared by the model and server crates:
//!
//! - [`Pollutant`] and [`PollutantReadings`]: the fixed 12-feature input schema
//! - [`AqiCategory`]: severity bands with their display colors
//! - [`CITIES`]: static city reference table
//!
//! # Example
//!
//! ```rust
//! use smogcast_core::{AqiCategory, PollutantReadings, Pollutant};
//!
//! let mut readings = PollutantReadings::default();
//! readings.set(Pollutant::Pm10, 80.0);
//! assert_eq!(readings.to_array()[1], 80.0);
//!
//! let category = AqiCategory::from_aqi(42.0);
//! assert_eq!(category.label(), "Good");
//! assert_eq!(category.color(), "#00E400");
//! ```

mod category;
mod cities;
mod pollutant;

pub use category::{round_aqi, AqiCategory};
pub use cities::{city_names, City, CityCoordinates, CITIES};
pub use pollutant::{feature_names, Pollutant, PollutantReadings, FEATURE_COUNT};

use thiserror::Error;

/// Errors raised while turning a request payload into pollutant readings.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReadingError {
    /// The payload was valid JSON but not an object.
    #[error("request body must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// A string value could not be parsed as a number.
    #[error("could not convert string to float: '{value}' (field {field})")]
    NotANumber { field: &'static str, value: String },

    /// The value has a JSON type that has no numeric meaning.
    #[error("field {field} must be a number, got {kind}")]
    UnsupportedType {
        field: &'static str,
        kind: &'static str,
    },
}

/// Name of a JSON value's type, for error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
