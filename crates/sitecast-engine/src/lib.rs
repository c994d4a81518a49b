//! # sitecast-engine
//!
//! The per-request estimation pipeline. One call to
//! [`EstimationEngine::predict`] runs:
//!
//! 1. cost prediction (model or closed form) through the cost chain
//! 2. raw delay prediction through the delay chain
//! 3. workload-pressure adjustment of the raw delay probability
//! 4. risk-tier classification
//! 5. template-based recommendation generation
//!
//! The engine is stateless across calls: identical inputs with unchanged
//! artifacts yield identical results.

pub mod adjust;
pub mod engine;
pub mod recommend;

pub use engine::EstimationEngine;
pub use recommend::ResourceGaps;
