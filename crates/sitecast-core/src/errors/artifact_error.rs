/// Errors loading the pre-trained model artifacts at startup.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact not found: {path}")]
    NotFound { path: String },

    #[error("failed to load artifact {path}: {reason}")]
    LoadFailed { path: String, reason: String },

    #[error("feature column list {path} is invalid: {reason}")]
    ColumnsInvalid { path: String, reason: String },
}
