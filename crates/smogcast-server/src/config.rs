//! Server configuration read from the environment.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MODEL_PATH: &str = "artifacts/model.onnx";
const DEFAULT_SCALER_PATH: &str = "artifacts/scaler.json";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub model_path: PathBuf,
    pub scaler_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            model_path: DEFAULT_MODEL_PATH.into(),
            scaler_path: DEFAULT_SCALER_PATH.into(),
        }
    }
}

impl ServerConfig {
    /// Reads `SMOGCAST_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("SMOGCAST_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "SMOGCAST_PORT",
                value: raw,
            })?,
            None => defaults.port,
        };

        Ok(Self {
            host: lookup("SMOGCAST_HOST").unwrap_or(defaults.host),
            port,
            model_path: lookup("SMOGCAST_MODEL_PATH").map_or(defaults.model_path, PathBuf::from),
            scaler_path: lookup("SMOGCAST_SCALER_PATH").map_or(defaults.scaler_path, PathBuf::from),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
        assert_eq!(config.model_path, PathBuf::from("artifacts/model.onnx"));
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("SMOGCAST_HOST", "0.0.0.0"),
            ("SMOGCAST_PORT", "8080"),
            ("SMOGCAST_MODEL_PATH", "/srv/model.onnx"),
            ("SMOGCAST_SCALER_PATH", "/srv/scaler.json"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.model_path, PathBuf::from("/srv/model.onnx"));
        assert_eq!(config.scaler_path, PathBuf::from("/srv/scaler.json"));
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_lookup(lookup(&[("SMOGCAST_PORT", "http")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid { key: "SMOGCAST_PORT", value: "http".into() }
        );
    }
}
