//! Pre-trained artifacts for AQI inference.
//!
//! Two artifacts are loaded once at startup and shared read-only:
//!
//! - a [`FeatureScaler`] that normalizes the raw 12-feature vector
//! - a [`Regressor`] that maps the scaled vector to an AQI estimate
//!
//! The shipped implementations are [`StandardScaler`] (JSON) and
//! [`OnnxRegressor`] (ONNX, run with tract).

mod artifact;
mod onnx;
mod scaler;

pub use artifact::{load_regressor, load_scaler, read_artifact, ArtifactError};
pub use onnx::OnnxRegressor;
pub use scaler::StandardScaler;

use smogcast_core::FEATURE_COUNT;
use thiserror::Error;

/// Errors raised while scaling or running inference on one request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Model produced no output")]
    EmptyOutput,

    #[error("Dimension mismatch: expected {expected} values, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Non-finite value in {stage}: {value}")]
    NonFinite { stage: &'static str, value: f64 },
}

/// Fitted transform applied to raw readings before inference.
pub trait FeatureScaler: Send + Sync {
    fn transform(&self, features: &[f64; FEATURE_COUNT]) -> Result<[f64; FEATURE_COUNT], ModelError>;
}

/// Trained model mapping scaled features to output values.
pub trait Regressor: Send + Sync {
    /// Runs one forward pass. The first output is the AQI estimate.
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<Vec<f64>, ModelError>;
}
