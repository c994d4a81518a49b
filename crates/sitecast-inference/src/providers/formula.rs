//! Closed-form fallback predictors.
//!
//! Pure arithmetic, no external dependencies — always available, so a
//! chain that ends in one of these can never be exhausted.

use sitecast_core::constants::BASE_RATE_PER_M2;
use sitecast_core::errors::SitecastResult;
use sitecast_core::project::{Pressure, ProjectInput};
use sitecast_core::traits::IPredictor;

/// Raw delay percentage for high-pressure projects.
const RAW_DELAY_HIGH: f64 = 65.0;
/// Raw delay percentage for elevated-pressure projects.
const RAW_DELAY_ELEVATED: f64 = 45.0;
/// Raw delay percentage for everything else.
const RAW_DELAY_CALM: f64 = 20.0;

/// Fallback cost model: area times base rate, scaled by the size band.
pub struct FormulaCostModel;

impl IPredictor for FormulaCostModel {
    fn predict(&self, input: &ProjectInput) -> SitecastResult<f64> {
        Ok(input.area_m2 * BASE_RATE_PER_M2 * input.project_size.cost_factor())
    }

    fn name(&self) -> &str {
        "formula-cost"
    }

    fn is_available(&self) -> bool {
        true // Pure arithmetic.
    }
}

/// Fallback delay model: raw percentage tiered by workload pressure.
pub struct PressureDelayModel;

impl IPredictor for PressureDelayModel {
    fn predict(&self, input: &ProjectInput) -> SitecastResult<f64> {
        let pressure = Pressure::of(input);
        let raw = if pressure.is_high() {
            RAW_DELAY_HIGH
        } else if pressure.is_elevated() {
            RAW_DELAY_ELEVATED
        } else {
            RAW_DELAY_CALM
        };
        Ok(raw)
    }

    fn name(&self) -> &str {
        "pressure-delay"
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitecast_core::project::{ProjectSize, ProjectType};

    fn input(size: ProjectSize, area: f64, duration: f64, workers: u32) -> ProjectInput {
        ProjectInput::new(
            ProjectType::ResidentialConstruction,
            size,
            area,
            duration,
            workers,
        )
    }

    #[test]
    fn medium_cost_is_exact() {
        let cost = FormulaCostModel
            .predict(&input(ProjectSize::Medium, 300.0, 3.0, 10))
            .unwrap();
        assert_eq!(cost, 360000.0);
    }

    #[test]
    fn large_cost_is_exact() {
        let cost = FormulaCostModel
            .predict(&input(ProjectSize::Large, 300.0, 3.0, 10))
            .unwrap();
        assert_eq!(cost, 414000.0);
    }

    #[test]
    fn small_cost_is_discounted() {
        let cost = FormulaCostModel
            .predict(&input(ProjectSize::Small, 300.0, 3.0, 10))
            .unwrap();
        assert_eq!(cost, 324000.0);
    }

    #[test]
    fn delay_tiers() {
        // pressure 13.0
        let high = PressureDelayModel
            .predict(&input(ProjectSize::Medium, 130.0, 2.0, 5))
            .unwrap();
        assert_eq!(high, 65.0);

        // pressure 9.0
        let elevated = PressureDelayModel
            .predict(&input(ProjectSize::Medium, 90.0, 2.0, 5))
            .unwrap();
        assert_eq!(elevated, 45.0);

        // pressure 5.0
        let calm = PressureDelayModel
            .predict(&input(ProjectSize::Medium, 50.0, 2.0, 5))
            .unwrap();
        assert_eq!(calm, 20.0);
    }

    #[test]
    fn boundary_pressure_stays_in_lower_tier() {
        // pressure exactly 12.0 → elevated, not high
        let at_twelve = PressureDelayModel
            .predict(&input(ProjectSize::Medium, 120.0, 2.0, 5))
            .unwrap();
        assert_eq!(at_twelve, 45.0);

        // pressure exactly 8.0 → calm
        let at_eight = PressureDelayModel
            .predict(&input(ProjectSize::Medium, 80.0, 2.0, 5))
            .unwrap();
        assert_eq!(at_eight, 20.0);
    }

    #[test]
    fn always_available() {
        assert!(FormulaCostModel.is_available());
        assert!(PressureDelayModel.is_available());
    }
}
