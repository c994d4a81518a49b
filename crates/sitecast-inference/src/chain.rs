//! Fallback chain for scalar prediction.
//!
//! Providers are tried in order; on failure the chain logs a degradation
//! event and moves to the next provider. Chains built by this crate
//! always end in a closed-form predictor, so in practice they cannot be
//! exhausted.

use std::sync::Mutex;

use chrono::Utc;
use sitecast_core::errors::{InferenceError, SitecastResult};
use sitecast_core::models::DegradationEvent;
use sitecast_core::project::ProjectInput;
use sitecast_core::traits::IPredictor;
use tracing::warn;

/// Ordered predictor fallback chain for one role (cost or delay).
///
/// `predict` takes `&self` so a single chain can serve concurrent
/// requests; the event log sits behind a Mutex for that reason.
pub struct PredictorChain {
    component: String,
    chain: Vec<Box<dyn IPredictor>>,
    /// Accumulated degradation events since the last drain.
    events: Mutex<Vec<DegradationEvent>>,
}

impl PredictorChain {
    /// Create an empty chain for the named component.
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            chain: Vec::new(),
            events: Mutex::new(Vec::new()),
        }
    }

    /// Add a provider to the end of the chain.
    pub fn push(&mut self, provider: Box<dyn IPredictor>) {
        self.chain.push(provider);
    }

    /// Predict using the first provider that succeeds.
    ///
    /// Logs a `DegradationEvent` whenever a provider other than the first
    /// produces the result.
    pub fn predict(&self, input: &ProjectInput) -> SitecastResult<f64> {
        let mut last_failure: Option<String> = None;

        for (i, provider) in self.chain.iter().enumerate() {
            if !provider.is_available() {
                continue;
            }

            match provider.predict(input) {
                Ok(value) => {
                    if i > 0 {
                        // We fell back — log it.
                        let primary_name = self
                            .chain
                            .first()
                            .map(|p| p.name())
                            .unwrap_or("unknown");
                        let failure = last_failure
                            .unwrap_or_else(|| format!("{primary_name} unavailable"));
                        if let Ok(mut events) = self.events.lock() {
                            events.push(DegradationEvent {
                                component: self.component.clone(),
                                failure,
                                fallback_used: provider.name().to_string(),
                                timestamp: Utc::now(),
                            });
                        }
                    }
                    return Ok(value);
                }
                Err(e) => {
                    warn!(
                        component = %self.component,
                        provider = provider.name(),
                        error = %e,
                        "predictor failed, trying next in chain"
                    );
                    last_failure = Some(e.to_string());
                }
            }
        }

        Err(InferenceError::ChainExhausted {
            attempted: self.chain.len(),
        }
        .into())
    }

    /// Get the name of the currently active (first available) provider.
    pub fn active_provider_name(&self) -> &str {
        self.chain
            .iter()
            .find(|p| p.is_available())
            .map(|p| p.name())
            .unwrap_or("none")
    }

    /// Drain accumulated degradation events.
    pub fn drain_events(&self) -> Vec<DegradationEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }

    /// Number of providers in the chain.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}
