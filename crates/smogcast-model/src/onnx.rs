//! ONNX regressor backed by tract.

use std::path::Path;

use smogcast_core::FEATURE_COUNT;
use tract_onnx::prelude::*;

use crate::{ArtifactError, ModelError, Regressor};

type OnnxPlan = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// Optimized ONNX graph taking a `[1, 12]` f32 input.
pub struct OnnxRegressor {
    model: OnnxPlan,
}

impl OnnxRegressor {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let onnx_error = |e: TractError| ArtifactError::Onnx {
            path: path.to_path_buf(),
            message: format!("{e:#}"),
        };

        let model = tract_onnx::onnx()
            .model_for_path(path)
            .map_err(onnx_error)?
            .with_input_fact(
                0,
                InferenceFact::dt_shape(f32::datum_type(), tvec!(1, FEATURE_COUNT)),
            )
            .map_err(onnx_error)?
            .into_optimized()
            .map_err(onnx_error)?
            .into_runnable()
            .map_err(onnx_error)?;

        Ok(Self { model })
    }

    fn run(&self, features: &[f64; FEATURE_COUNT]) -> TractResult<Vec<f64>> {
        let input: Vec<f32> = features.iter().map(|v| *v as f32).collect();
        let tensor = Tensor::from_shape(&[1, FEATURE_COUNT], &input)?;
        let outputs = self.model.run(tvec!(tensor.into()))?;
        let first = outputs
            .first()
            .ok_or_else(|| anyhow::anyhow!("model has no outputs"))?;
        Ok(first.to_array_view::<f32>()?.iter().map(|v| *v as f64).collect())
    }
}

impl Regressor for OnnxRegressor {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<Vec<f64>, ModelError> {
        let outputs = self
            .run(features)
            .map_err(|e| ModelError::Inference(format!("{e:#}")))?;
        if outputs.is_empty() {
            return Err(ModelError::EmptyOutput);
        }
        Ok(outputs)
    }
}
