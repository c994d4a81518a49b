use serde::{Deserialize, Serialize};
use std::fmt;

/// Schedule-delay probability as a percentage, clamped to [0.0, 90.0]
/// and carried at one decimal place of precision.
///
/// The 90 cap is deliberate: the system never reports certainty of delay.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct DelayProbability(f64);

impl DelayProbability {
    /// Upper bound reported by the system.
    pub const MAX: f64 = 90.0;

    /// Create a new probability, clamping to [0.0, 90.0] and rounding to
    /// one decimal place.
    pub fn new(value: f64) -> Self {
        let clamped = if value.is_finite() {
            value.clamp(0.0, Self::MAX)
        } else {
            0.0
        };
        Self((clamped * 10.0).round() / 10.0)
    }

    /// Get the raw percentage value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for DelayProbability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

impl From<f64> for DelayProbability {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<DelayProbability> for f64 {
    fn from(p: DelayProbability) -> Self {
        p.0
    }
}
