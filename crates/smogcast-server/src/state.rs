use smogcast_model::{load_regressor, load_scaler, ArtifactError, FeatureScaler, Regressor};
use tracing::info;

use crate::config::ServerConfig;

/// Read-only artifacts shared by every request.
pub struct ServerState {
    pub scaler: Box<dyn FeatureScaler>,
    pub regressor: Box<dyn Regressor>,
}

impl ServerState {
    pub fn new(scaler: impl FeatureScaler + 'static, regressor: impl Regressor + 'static) -> Self {
        Self {
            scaler: Box::new(scaler),
            regressor: Box::new(regressor),
        }
    }

    /// Loads both artifacts from the configured paths. Either one failing is fatal.
    pub fn load(config: &ServerConfig) -> Result<Self, ArtifactError> {
        let scaler = load_scaler(&config.scaler_path)?;
        let regressor = load_regressor(&config.model_path)?;
        info!("Artifacts loaded");
        Ok(Self::new(scaler, regressor))
    }
}
