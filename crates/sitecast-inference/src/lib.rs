//! # sitecast-inference
//!
//! Prediction providers for the estimation engine: ONNX-backed models
//! loaded once at startup, closed-form fallbacks that are always
//! available, and the fallback chain that ties them together.
//!
//! ## Provider selection
//!
//! | Provider | Role | Availability |
//! |----------|------|--------------|
//! | `OnnxCostModel` | cost regressor | artifact + column list loaded |
//! | `OnnxDelayModel` | delay classifier | artifact + column list loaded |
//! | `FormulaCostModel` | cost fallback | always |
//! | `PressureDelayModel` | delay fallback | always |
//!
//! A missing or corrupt artifact silently selects the fallback at
//! startup; an inference failure after load falls back per call and is
//! recorded as a degradation event.

pub mod chain;
pub mod providers;
pub mod schema;

pub use chain::PredictorChain;
pub use providers::build_chains;
pub use schema::{FeatureKind, FeatureSchema};
