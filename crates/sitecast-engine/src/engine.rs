//! EstimationEngine — the single entry point exposed to the rendering
//! layer.

use sitecast_core::config::ArtifactConfig;
use sitecast_core::errors::SitecastResult;
use sitecast_core::models::{CostRange, DegradationEvent, EstimationResult, RiskLevel};
use sitecast_core::project::{Pressure, ProjectInput};
use sitecast_inference::providers::{self, FormulaCostModel, PressureDelayModel};
use sitecast_inference::PredictorChain;
use tracing::info;

use crate::adjust;
use crate::recommend;

/// The estimation engine.
///
/// Holds one predictor chain per role, both resolved once at
/// construction. The engine itself is stateless across calls: `predict`
/// is a pure pipeline over its input, so identical inputs with unchanged
/// artifacts yield identical results.
pub struct EstimationEngine {
    cost: PredictorChain,
    delay: PredictorChain,
}

impl EstimationEngine {
    /// Build an engine from the artifact config.
    ///
    /// Missing or corrupt artifacts select the closed-form predictors;
    /// this constructor cannot fail.
    pub fn from_artifacts(config: &ArtifactConfig) -> Self {
        let (cost, delay) = providers::build_chains(config);
        Self::from_chains(cost, delay)
    }

    /// Build an engine from explicit predictor chains.
    ///
    /// This is the dependency-injection seam: tests (and embedders with
    /// their own predictors) construct chains directly, without touching
    /// the filesystem.
    pub fn from_chains(cost: PredictorChain, delay: PredictorChain) -> Self {
        info!(
            cost_predictor = cost.active_provider_name(),
            delay_predictor = delay.active_provider_name(),
            "EstimationEngine initialized"
        );
        Self { cost, delay }
    }

    /// Build an engine that only uses the closed-form predictors.
    pub fn formula_only() -> Self {
        let mut cost = PredictorChain::new("cost");
        cost.push(Box::new(FormulaCostModel));
        let mut delay = PredictorChain::new("delay");
        delay.push(Box::new(PressureDelayModel));
        Self::from_chains(cost, delay)
    }

    /// Run one estimation request.
    ///
    /// The chains degrade internally, so with well-formed chains the only
    /// error path is a chain with no working predictor at all.
    pub fn predict(&self, input: &ProjectInput) -> SitecastResult<EstimationResult> {
        let estimated_cost = self.cost.predict(input)?.max(0.0).round();

        let raw_delay = self.delay.predict(input)?;
        let pressure = Pressure::of(input);
        let delay_probability = adjust::adjust(raw_delay, pressure);
        let risk_level = RiskLevel::classify(delay_probability);

        let recommendations = recommend::generate(risk_level, input);

        Ok(EstimationResult {
            estimated_cost,
            cost_range: CostRange::around(estimated_cost),
            delay_probability,
            risk_level,
            recommendations,
        })
    }

    /// Name of the predictor currently serving the cost role.
    pub fn active_cost_predictor(&self) -> &str {
        self.cost.active_provider_name()
    }

    /// Name of the predictor currently serving the delay role.
    pub fn active_delay_predictor(&self) -> &str {
        self.delay.active_provider_name()
    }

    /// Drain degradation events accumulated by both chains.
    pub fn drain_degradation_events(&self) -> Vec<DegradationEvent> {
        let mut events = self.cost.drain_events();
        events.extend(self.delay.drain_events());
        events
    }
}
