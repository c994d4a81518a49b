//! Pressure adjustment of the raw delay probability.
//!
//! The raw model (or fallback) output is bounded by what the workload
//! pressure says is plausible: a high-pressure project cannot report a
//! suspiciously low risk, and a low-pressure project cannot report an
//! alarmingly high one.

use sitecast_core::models::DelayProbability;
use sitecast_core::project::Pressure;

/// Floor percentage at the high-pressure threshold.
const HIGH_PRESSURE_FLOOR: f64 = 60.0;
/// Floor percentage at the elevated-pressure threshold.
const ELEVATED_PRESSURE_FLOOR: f64 = 40.0;
/// Each unit of pressure above a threshold raises its floor by this much.
const PRESSURE_SLOPE: f64 = 2.0;
/// Ceiling percentage for low-pressure projects.
const CALM_CEILING: f64 = 25.0;

/// Adjust a raw delay percentage by workload pressure.
///
/// - pressure > 12: at least `60 + (pressure − 12) × 2`
/// - pressure in (8, 12]: at least `40 + (pressure − 8) × 2`
/// - pressure ≤ 8: at most 25
///
/// The result is clamped to [0, 90] and rounded to one decimal place by
/// the `DelayProbability` constructor.
pub fn adjust(raw: f64, pressure: Pressure) -> DelayProbability {
    let p = pressure.value();
    let adjusted = if p > Pressure::HIGH {
        raw.max(HIGH_PRESSURE_FLOOR + (p - Pressure::HIGH) * PRESSURE_SLOPE)
    } else if p > Pressure::ELEVATED {
        raw.max(ELEVATED_PRESSURE_FLOOR + (p - Pressure::ELEVATED) * PRESSURE_SLOPE)
    } else {
        raw.min(CALM_CEILING)
    };
    DelayProbability::new(adjusted)
}
