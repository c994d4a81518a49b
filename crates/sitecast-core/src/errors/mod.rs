//! Error taxonomy for the sitecast workspace.
//!
//! Artifact problems are resolved at startup (silent fallback selection);
//! inference problems are resolved per call (chain fallback). Neither is
//! ever surfaced to the end user as a raw failure.

mod artifact_error;
mod inference_error;

pub use artifact_error::ArtifactError;
pub use inference_error::InferenceError;

/// Umbrella error for the whole workspace.
#[derive(Debug, thiserror::Error)]
pub enum SitecastError {
    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    #[error(transparent)]
    Inference(#[from] InferenceError),
}

/// Workspace-wide result alias.
pub type SitecastResult<T> = Result<T, SitecastError>;
