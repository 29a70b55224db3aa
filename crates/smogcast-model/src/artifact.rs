//! Artifact loading: JSON scaler, ONNX regressor.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

use crate::{OnnxRegressor, StandardScaler};

/// Errors from reading or validating an artifact file.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Failed to read artifact {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse artifact {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to load ONNX model {}: {message}", .path.display())]
    Onnx { path: PathBuf, message: String },

    #[error("Invalid artifact shape: {0}")]
    Shape(String),
}

/// Reads and deserializes a JSON artifact.
pub fn read_artifact<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ArtifactError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads and validates the scaler artifact.
pub fn load_scaler(path: impl AsRef<Path>) -> Result<StandardScaler, ArtifactError> {
    let path = path.as_ref();
    let scaler: StandardScaler = read_artifact(path)?;
    scaler.validate()?;
    info!(path = %path.display(), features = scaler.mean().len(), "Loaded feature scaler");
    Ok(scaler)
}

/// Loads and optimizes the ONNX regressor.
pub fn load_regressor(path: impl AsRef<Path>) -> Result<OnnxRegressor, ArtifactError> {
    let path = path.as_ref();
    let regressor = OnnxRegressor::load(path)?;
    info!(path = %path.display(), "Loaded ONNX regressor");
    Ok(regressor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FeatureScaler;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_scaler("/nonexistent/smogcast/scaler.json").unwrap_err();
        assert!(matches!(err, ArtifactError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/smogcast/scaler.json"));
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let file = temp_file("{ not json");
        let err = load_scaler(file.path()).unwrap_err();
        assert!(matches!(err, ArtifactError::Parse { .. }));
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        let file = temp_file(r#"{"mean": [0.0], "scale": [1.0]}"#);
        let err = load_scaler(file.path()).unwrap_err();
        assert!(matches!(err, ArtifactError::Shape(_)));
        assert!(err.to_string().contains("expected 12 values"));
    }

    #[test]
    fn test_loads_valid_scaler() {
        let file = temp_file(
            r#"{"mean": [1,1,1,1,1,1,1,1,1,1,1,1], "scale": [2,2,2,2,2,2,2,2,2,2,2,2]}"#,
        );
        let scaler = load_scaler(file.path()).unwrap();
        assert_eq!(scaler.transform(&[3.0; 12]).unwrap(), [1.0; 12]);
    }

    #[test]
    fn test_missing_model_is_rejected() {
        let err = load_regressor("/nonexistent/smogcast/model.onnx").err().unwrap();
        assert!(matches!(err, ArtifactError::Onnx { .. }));
        assert!(err.to_string().contains("/nonexistent/smogcast/model.onnx"));
    }
}
