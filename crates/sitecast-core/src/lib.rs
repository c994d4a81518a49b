//! # sitecast-core
//!
//! Foundation crate for the sitecast estimation system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod project;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ArtifactConfig;
pub use errors::{SitecastError, SitecastResult};
pub use models::{CostRange, DelayProbability, EstimationResult, RiskLevel};
pub use project::{Pressure, ProjectInput, ProjectSize, ProjectType};
pub use traits::IPredictor;
