//! Prediction providers and startup strategy selection.

pub mod formula;
pub mod onnx_model;

pub use formula::{FormulaCostModel, PressureDelayModel};
pub use onnx_model::{OnnxCostModel, OnnxDelayModel, OnnxSession};

use sitecast_core::config::ArtifactConfig;
use tracing::warn;

use crate::chain::PredictorChain;
use crate::schema::FeatureSchema;

/// Build the cost and delay predictor chains from the artifact config.
///
/// Strategy selection happens here, once: each ONNX predictor joins its
/// chain only if the column list and its model file both loaded; the
/// closed-form predictor is always pushed last so neither chain can run
/// dry. Artifact problems are logged and otherwise silent — the caller
/// sees a working engine either way.
pub fn build_chains(config: &ArtifactConfig) -> (PredictorChain, PredictorChain) {
    let mut cost = PredictorChain::new("cost");
    let mut delay = PredictorChain::new("delay");

    let schema = match FeatureSchema::load(&config.columns_path) {
        Ok(schema) => Some(schema),
        Err(e) => {
            warn!(error = %e, "feature columns unavailable, using closed-form predictors");
            None
        }
    };

    if let Some(schema) = &schema {
        match OnnxSession::load(&config.cost_model_path) {
            Ok(session) => cost.push(Box::new(OnnxCostModel::new(session, schema.clone()))),
            Err(e) => warn!(error = %e, "cost model unavailable, using closed-form predictor"),
        }

        match OnnxSession::load(&config.delay_model_path) {
            Ok(session) => delay.push(Box::new(OnnxDelayModel::new(session, schema.clone()))),
            Err(e) => warn!(error = %e, "delay model unavailable, using closed-form predictor"),
        }
    }

    cost.push(Box::new(FormulaCostModel));
    delay.push(Box::new(PressureDelayModel));

    (cost, delay)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_artifacts_yield_formula_only_chains() {
        let config = ArtifactConfig::from_dir("no/such/dir");
        let (cost, delay) = build_chains(&config);
        assert_eq!(cost.len(), 1);
        assert_eq!(delay.len(), 1);
        assert_eq!(cost.active_provider_name(), "formula-cost");
        assert_eq!(delay.active_provider_name(), "pressure-delay");
    }

    #[test]
    fn corrupt_columns_disable_both_models() {
        let dir = std::env::temp_dir().join("sitecast_corrupt_columns");
        let _ = std::fs::create_dir_all(&dir);
        std::fs::write(dir.join("feature_columns.json"), "not json at all").unwrap();

        let (cost, delay) = build_chains(&ArtifactConfig::from_dir(&dir));
        assert_eq!(cost.len(), 1);
        assert_eq!(delay.len(), 1);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
