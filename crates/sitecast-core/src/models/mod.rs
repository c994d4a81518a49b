//! Result and event models shared across the workspace.

mod degradation_event;
mod delay;
mod estimation;
mod risk;

pub use degradation_event::DegradationEvent;
pub use delay::DelayProbability;
pub use estimation::{CostRange, EstimationResult};
pub use risk::RiskLevel;
