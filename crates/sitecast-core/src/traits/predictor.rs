use crate::errors::SitecastResult;
use crate::project::ProjectInput;

/// Scalar prediction provider.
///
/// Both the cost role (currency units) and the delay role (raw percentage)
/// are served by this one capability; the engine owns one predictor chain
/// per role. Model-backed and closed-form implementations are
/// interchangeable behind it.
pub trait IPredictor: Send + Sync {
    /// Predict a scalar for the given input.
    fn predict(&self, input: &ProjectInput) -> SitecastResult<f64>;

    /// Human-readable predictor name.
    fn name(&self) -> &str;

    /// Whether this predictor is currently available.
    fn is_available(&self) -> bool;
}
