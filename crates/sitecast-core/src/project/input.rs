use serde::{Deserialize, Serialize};

use crate::constants::{MIN_DURATION_MONTHS, MIN_WORKERS};

use super::{ProjectSize, ProjectType};

/// Validated input for one estimation request.
///
/// The calling layer is expected to validate ranges before handing input
/// to the engine; the constructor clamps anyway so out-of-range values
/// degrade to the nearest legal value instead of breaking downstream
/// arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectInput {
    pub project_type: ProjectType,
    pub project_size: ProjectSize,
    /// Built area in square metres. Always finite and non-negative.
    pub area_m2: f64,
    /// Planned duration in months. At least 0.5.
    pub duration_months: f64,
    /// Planned workforce headcount. At least 1.
    pub workers: u32,
}

impl ProjectInput {
    /// Build an input, clamping each numeric field to its legal range.
    ///
    /// Non-finite area or duration collapse to the minimum rather than
    /// propagating NaN through the cost and pressure formulas.
    pub fn new(
        project_type: ProjectType,
        project_size: ProjectSize,
        area_m2: f64,
        duration_months: f64,
        workers: u32,
    ) -> Self {
        let area_m2 = if area_m2.is_finite() { area_m2.max(0.0) } else { 0.0 };
        let duration_months = if duration_months.is_finite() {
            duration_months.max(MIN_DURATION_MONTHS)
        } else {
            MIN_DURATION_MONTHS
        };
        Self {
            project_type,
            project_size,
            area_m2,
            duration_months,
            workers: workers.max(MIN_WORKERS),
        }
    }
}
