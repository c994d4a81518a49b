use serde::{Deserialize, Serialize};

use crate::constants::COST_MARGIN;

use super::{DelayProbability, RiskLevel};

/// Expected band around the estimated cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostRange {
    pub low: f64,
    pub high: f64,
}

impl CostRange {
    /// Band of ±10% around an estimate.
    pub fn around(cost: f64) -> Self {
        Self {
            low: cost * (1.0 - COST_MARGIN),
            high: cost * (1.0 + COST_MARGIN),
        }
    }
}

/// The full result bundle for one estimation request.
///
/// Built fresh per request and never mutated afterwards; the rendering
/// layer owns it once returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimationResult {
    /// Estimated cost in whole currency units.
    pub estimated_cost: f64,
    /// Expected cost band around the estimate.
    pub cost_range: CostRange,
    /// Pressure-adjusted delay probability.
    pub delay_probability: DelayProbability,
    /// Risk tier derived from the delay probability.
    pub risk_level: RiskLevel,
    /// Ordered guidance, most actionable first. Never empty.
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_symmetric_around_cost() {
        let range = CostRange::around(360000.0);
        assert_eq!(range.low, 324000.0);
        assert_eq!(range.high, 396000.0);
    }

    #[test]
    fn result_serializes() {
        let result = EstimationResult {
            estimated_cost: 360000.0,
            cost_range: CostRange::around(360000.0),
            delay_probability: DelayProbability::new(45.0),
            risk_level: RiskLevel::Medium,
            recommendations: vec!["extend the schedule".to_string()],
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"risk_level\":\"Medium\""));
    }
}
