//! ONNX Runtime predictors.
//!
//! Loads the pre-trained cost regressor and delay classifier via the
//! `ort` crate (v2). Input is a single `[1, n_features]` f32 tensor built
//! from the feature schema.

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use ort::value::Tensor;
use sitecast_core::errors::{ArtifactError, InferenceError, SitecastResult};
use sitecast_core::project::ProjectInput;
use sitecast_core::traits::IPredictor;
use tracing::debug;

use crate::schema::FeatureSchema;

/// A loaded ONNX session shared by the model-backed predictors.
///
/// Session requires `&mut self` for `run`, so we wrap in Mutex to keep
/// prediction callable through `&self`.
pub struct OnnxSession {
    session: Mutex<Session>,
    model_name: String,
}

// Safety: Session is Send but not Sync by default. The Mutex provides Sync.
unsafe impl Sync for OnnxSession {}

impl OnnxSession {
    /// Load an ONNX model from the given path.
    ///
    /// # Errors
    /// Returns `ArtifactError` if the file is missing or the model cannot
    /// be loaded.
    pub fn load(model_path: &Path) -> Result<Self, ArtifactError> {
        if !model_path.exists() {
            return Err(ArtifactError::NotFound {
                path: model_path.display().to_string(),
            });
        }

        let session = Session::builder()
            .map_err(|e| ArtifactError::LoadFailed {
                path: model_path.display().to_string(),
                reason: e.to_string(),
            })?
            .with_intra_threads(1)
            .map_err(|e| ArtifactError::LoadFailed {
                path: model_path.display().to_string(),
                reason: e.to_string(),
            })?
            .commit_from_file(model_path)
            .map_err(|e| ArtifactError::LoadFailed {
                path: model_path.display().to_string(),
                reason: e.to_string(),
            })?;

        let model_name = model_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("onnx-model")
            .to_string();

        debug!(model = %model_name, "ONNX model loaded");

        Ok(Self {
            session: Mutex::new(session),
            model_name,
        })
    }

    /// The model's file-stem name.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Run inference on one feature vector, returning the first output
    /// that extracts as f32.
    ///
    /// Converted classifiers emit a label tensor (int64) alongside the
    /// probability tensor; skipping outputs that fail f32 extraction
    /// lands on the probabilities regardless of output order.
    fn run(&self, features: Vec<f32>) -> Result<Vec<f32>, InferenceError> {
        let n = features.len();
        let input_tensor = Tensor::from_array((vec![1i64, n as i64], features)).map_err(|e| {
            InferenceError::Failed {
                reason: format!("tensor creation error: {e}"),
            }
        })?;

        let mut session = self.session.lock().map_err(|e| InferenceError::Failed {
            reason: format!("session lock poisoned: {e}"),
        })?;

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError::Failed {
                reason: e.to_string(),
            })?;

        for (_name, output) in outputs.iter() {
            if let Ok((_shape, data)) = output.try_extract_tensor::<f32>() {
                if !data.is_empty() {
                    return Ok(data.to_vec());
                }
            }
        }

        Err(InferenceError::Failed {
            reason: "no f32 output tensor".to_string(),
        })
    }
}

/// Model-backed cost predictor: regressor scalar output, currency units.
pub struct OnnxCostModel {
    session: OnnxSession,
    schema: FeatureSchema,
}

impl OnnxCostModel {
    pub fn new(session: OnnxSession, schema: FeatureSchema) -> Self {
        Self { session, schema }
    }
}

impl IPredictor for OnnxCostModel {
    fn predict(&self, input: &ProjectInput) -> SitecastResult<f64> {
        let output = self.session.run(self.schema.vector(input))?;
        Ok(output[0] as f64)
    }

    fn name(&self) -> &str {
        self.session.model_name()
    }

    fn is_available(&self) -> bool {
        true // Load already succeeded.
    }
}

/// Model-backed delay predictor: probability of the positive ("delayed")
/// class, scaled to a percentage.
pub struct OnnxDelayModel {
    session: OnnxSession,
    schema: FeatureSchema,
}

impl OnnxDelayModel {
    pub fn new(session: OnnxSession, schema: FeatureSchema) -> Self {
        Self { session, schema }
    }
}

impl IPredictor for OnnxDelayModel {
    fn predict(&self, input: &ProjectInput) -> SitecastResult<f64> {
        let output = self.session.run(self.schema.vector(input))?;

        // Two-class probability pair → index 1 is P(delayed); a single
        // sigmoid output already is.
        let positive = if output.len() >= 2 {
            output[1]
        } else {
            output[0]
        };

        Ok(positive as f64 * 100.0)
    }

    fn name(&self) -> &str {
        self.session.model_name()
    }

    fn is_available(&self) -> bool {
        true
    }
}
