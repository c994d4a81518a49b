use serde::{Deserialize, Serialize};
use std::fmt;

use super::DelayProbability;

/// Delay-risk tier derived from the adjusted delay probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Probability at or above which risk is at least Medium.
    pub const MEDIUM_FLOOR: f64 = 30.0;
    /// Probability at or above which risk is High.
    pub const HIGH_FLOOR: f64 = 55.0;

    /// Classify a delay probability into a tier.
    ///
    /// Bands are half-open on the low side: exactly 30.0 is Medium and
    /// exactly 55.0 is High.
    pub fn classify(probability: DelayProbability) -> Self {
        let p = probability.value();
        if p < Self::MEDIUM_FLOOR {
            RiskLevel::Low
        } else if p < Self::HIGH_FLOOR {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(p: f64) -> RiskLevel {
        RiskLevel::classify(DelayProbability::new(p))
    }

    #[test]
    fn band_boundaries_land_in_the_upper_tier() {
        assert_eq!(classify(29.9), RiskLevel::Low);
        assert_eq!(classify(30.0), RiskLevel::Medium);
        assert_eq!(classify(54.9), RiskLevel::Medium);
        assert_eq!(classify(55.0), RiskLevel::High);
    }

    #[test]
    fn extremes() {
        assert_eq!(classify(0.0), RiskLevel::Low);
        assert_eq!(classify(90.0), RiskLevel::High);
    }
}
