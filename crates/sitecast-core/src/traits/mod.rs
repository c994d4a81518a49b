//! Capability traits implemented across the workspace.

mod predictor;

pub use predictor::IPredictor;
