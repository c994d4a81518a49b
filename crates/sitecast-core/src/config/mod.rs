//! Configuration for artifact locations.

pub mod defaults;

mod artifact_config;

pub use artifact_config::ArtifactConfig;
