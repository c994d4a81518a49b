use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{ArtifactError, SitecastResult};

use super::defaults;

/// Locations of the optional pre-trained model artifacts.
///
/// Absence of any file is not an error; it selects the closed-form
/// fallback for that sub-prediction at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactConfig {
    /// Path to the cost regressor (ONNX).
    pub cost_model_path: PathBuf,
    /// Path to the delay classifier (ONNX).
    pub delay_model_path: PathBuf,
    /// Path to the ordered feature column list (JSON array of names).
    pub columns_path: PathBuf,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self::from_dir(defaults::DEFAULT_MODEL_DIR)
    }
}

impl ArtifactConfig {
    /// Point all three artifacts at their default file names inside `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            cost_model_path: dir.join(defaults::DEFAULT_COST_MODEL_FILE),
            delay_model_path: dir.join(defaults::DEFAULT_DELAY_MODEL_FILE),
            columns_path: dir.join(defaults::DEFAULT_COLUMNS_FILE),
        }
    }

    /// Load the config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> SitecastResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ArtifactError::LoadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config = toml::from_str(&raw).map_err(|e| ArtifactError::LoadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_models_dir() {
        let config = ArtifactConfig::default();
        assert_eq!(
            config.cost_model_path,
            PathBuf::from("models/cost_model.onnx")
        );
        assert_eq!(
            config.columns_path,
            PathBuf::from("models/feature_columns.json")
        );
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: ArtifactConfig =
            toml::from_str("cost_model_path = \"custom/cost.onnx\"").unwrap();
        assert_eq!(config.cost_model_path, PathBuf::from("custom/cost.onnx"));
        assert_eq!(
            config.delay_model_path,
            PathBuf::from("models/delay_model.onnx")
        );
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let result = ArtifactConfig::load("does/not/exist.toml");
        assert!(result.is_err());
    }
}
