use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{MIN_DURATION_MONTHS, MIN_WORKERS};

use super::ProjectInput;

/// Workload density of a project: area per worker per month.
///
/// Derived per request, never persisted. High pressure means too much
/// area is being covered by too few workers in too little time.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Pressure(f64);

impl Pressure {
    /// Above this, a project is under high workload pressure.
    pub const HIGH: f64 = 12.0;
    /// Above this (and up to `HIGH`), pressure is elevated.
    pub const ELEVATED: f64 = 8.0;

    /// Compute pressure as `(area / workers) / duration`.
    ///
    /// Both denominators are clamped (workers ≥ 1, duration ≥ 0.5) so the
    /// metric stays finite even for degenerate input.
    pub fn compute(area_m2: f64, workers: u32, duration_months: f64) -> Self {
        let workers = workers.max(MIN_WORKERS) as f64;
        let duration = duration_months.max(MIN_DURATION_MONTHS);
        Self((area_m2.max(0.0) / workers) / duration)
    }

    /// Compute pressure for a full estimation input.
    pub fn of(input: &ProjectInput) -> Self {
        Self::compute(input.area_m2, input.workers, input.duration_months)
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether this pressure is above the high threshold.
    pub fn is_high(self) -> bool {
        self.0 > Self::HIGH
    }

    /// Whether this pressure is above the elevated threshold.
    pub fn is_elevated(self) -> bool {
        self.0 > Self::ELEVATED
    }
}

impl fmt::Display for Pressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<Pressure> for f64 {
    fn from(p: Pressure) -> Self {
        p.0
    }
}
