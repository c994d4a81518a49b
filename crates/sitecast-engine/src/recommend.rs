//! Template-based recommendation generation.
//!
//! A pure function of (area, workers, duration, risk tier): identical
//! inputs always yield identical text. Guidance is conditioned on the
//! gap between actual and ideal resourcing — one worker per ~40 m² and
//! one month per ~120 m².

use sitecast_core::constants::{IDEAL_AREA_PER_MONTH, IDEAL_AREA_PER_WORKER};
use sitecast_core::models::RiskLevel;
use sitecast_core::project::ProjectInput;

/// Extra workers recommended on top of the measured shortfall.
const WORKERS_GAP_CUSHION: i64 = 2;
/// Extra months recommended on top of the measured shortfall.
const DURATION_GAP_CUSHION: f64 = 1.0;

/// Shortfall between ideal and actual resourcing.
///
/// Positive values mean the plan is under-resourced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceGaps {
    /// Workers short of ideal, rounded to a whole count.
    pub workers: i64,
    /// Months short of ideal, rounded to one decimal.
    pub duration: f64,
}

impl ResourceGaps {
    /// Measure the gaps for an input.
    pub fn of(input: &ProjectInput) -> Self {
        let ideal_workers = input.area_m2 / IDEAL_AREA_PER_WORKER;
        let ideal_duration = input.area_m2 / IDEAL_AREA_PER_MONTH;
        Self {
            workers: (ideal_workers - input.workers as f64).round() as i64,
            duration: round1(ideal_duration - input.duration_months),
        }
    }
}

/// Generate the guidance list for a classified request.
///
/// Always returns at least one non-empty string, most actionable first.
pub fn generate(risk: RiskLevel, input: &ProjectInput) -> Vec<String> {
    let gaps = ResourceGaps::of(input);
    let workers = input.workers;
    let duration = input.duration_months;

    let mut recs = Vec::new();

    match risk {
        RiskLevel::High => {
            if gaps.workers > 0 && gaps.duration > 0.0 {
                recs.push(format!(
                    "Delay risk is high because the workforce ({workers} workers) and the \
                     schedule ({duration} months) are both below what a project of this size \
                     needs. Raising the workforce by about {} workers and extending the \
                     schedule by roughly {:.1} months should reduce the chance of delay.",
                    gaps.workers + WORKERS_GAP_CUSHION,
                    round1(gaps.duration + DURATION_GAP_CUSHION),
                ));
            } else if gaps.workers > 0 {
                recs.push(format!(
                    "Delay risk is high because the workforce ({workers} workers) is small \
                     for the project size. Adding {} workers could help stabilise the \
                     schedule.",
                    gaps.workers + WORKERS_GAP_CUSHION,
                ));
            } else if gaps.duration > 0.0 {
                recs.push(format!(
                    "Delay risk is high because the schedule ({duration} months) is short. \
                     Extending it by roughly {:.1} months could reduce delays.",
                    round1(gaps.duration + DURATION_GAP_CUSHION),
                ));
            } else {
                recs.push(
                    "Delay risk is high due to general execution pressure on the project; \
                     a modest adjustment to resources or schedule should improve the outlook."
                        .to_string(),
                );
            }
        }
        RiskLevel::Medium => {
            if gaps.workers > 0 {
                recs.push(
                    "Delay risk is moderate because the workforce is close to the minimum \
                     for the project size. Adding one or two workers could bring the risk \
                     down to low."
                        .to_string(),
                );
            } else if gaps.duration > 0.0 {
                recs.push(format!(
                    "Delay risk is moderate because the schedule ({duration} months) is \
                     relatively tight. Extending it by half a month to a month could reduce \
                     the chance of delay.",
                ));
            } else {
                recs.push(
                    "Delay risk is moderate due to a limited balance between schedule and \
                     workforce. A small improvement in either is enough to lower the risk."
                        .to_string(),
                );
            }
        }
        RiskLevel::Low => {
            recs.push(
                "The current plan looks suitable; the inputs show no delay risk.".to_string(),
            );
        }
    }

    recs
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitecast_core::project::{ProjectSize, ProjectType};

    fn input(area: f64, duration: f64, workers: u32) -> ProjectInput {
        ProjectInput::new(
            ProjectType::CommercialFitOut,
            ProjectSize::Medium,
            area,
            duration,
            workers,
        )
    }

    #[test]
    fn gaps_measure_the_shortfall() {
        // ideal workers = 400/40 = 10, ideal duration = 400/120 ≈ 3.3
        let gaps = ResourceGaps::of(&input(400.0, 2.0, 6));
        assert_eq!(gaps.workers, 4);
        assert_eq!(gaps.duration, 1.3);
    }

    #[test]
    fn overstaffed_projects_have_negative_gaps() {
        let gaps = ResourceGaps::of(&input(100.0, 6.0, 20));
        assert!(gaps.workers < 0);
        assert!(gaps.duration < 0.0);
    }

    #[test]
    fn high_risk_with_both_gaps_cites_both() {
        let recs = generate(RiskLevel::High, &input(400.0, 2.0, 6));
        assert_eq!(recs.len(), 1);
        // workers gap 4 + 2 cushion, duration gap 1.3 + 1 cushion
        assert!(recs[0].contains("6 workers"));
        assert!(recs[0].contains("2.3 months"));
    }

    #[test]
    fn high_risk_with_workers_gap_only_targets_workers() {
        // ideal workers 10 > 4, ideal duration ≈ 3.3 < 6
        let recs = generate(RiskLevel::High, &input(400.0, 6.0, 4));
        assert_eq!(recs.len(), 1);
        assert!(recs[0].contains("workforce"));
        assert!(!recs[0].contains("Extending"));
    }

    #[test]
    fn high_risk_with_duration_gap_only_targets_schedule() {
        // ideal workers 10 < 15, ideal duration ≈ 3.3 > 1
        let recs = generate(RiskLevel::High, &input(400.0, 1.0, 15));
        assert_eq!(recs.len(), 1);
        assert!(recs[0].contains("schedule"));
        assert!(recs[0].contains("Extending"));
    }

    #[test]
    fn high_risk_with_no_gaps_is_generic() {
        let recs = generate(RiskLevel::High, &input(100.0, 6.0, 20));
        assert_eq!(recs.len(), 1);
        assert!(recs[0].contains("general execution pressure"));
    }

    #[test]
    fn medium_risk_prefers_workers_over_duration() {
        // Both gaps positive — the workers branch wins.
        let recs = generate(RiskLevel::Medium, &input(400.0, 2.0, 6));
        assert_eq!(recs.len(), 1);
        assert!(recs[0].contains("one or two workers"));
    }

    #[test]
    fn medium_risk_with_duration_gap_suggests_extension() {
        let recs = generate(RiskLevel::Medium, &input(400.0, 1.0, 15));
        assert!(recs[0].contains("half a month to a month"));
    }

    #[test]
    fn medium_risk_with_no_gaps_is_generic() {
        let recs = generate(RiskLevel::Medium, &input(100.0, 6.0, 20));
        assert!(recs[0].contains("limited balance"));
    }

    #[test]
    fn low_risk_is_a_single_affirmation() {
        let recs = generate(RiskLevel::Low, &input(300.0, 3.0, 10));
        assert_eq!(recs.len(), 1);
        assert!(recs[0].contains("no delay risk"));
    }

    #[test]
    fn generation_is_deterministic() {
        let a = generate(RiskLevel::High, &input(400.0, 2.0, 6));
        let b = generate(RiskLevel::High, &input(400.0, 2.0, 6));
        assert_eq!(a, b);
    }

    #[test]
    fn every_tier_yields_non_empty_guidance() {
        for risk in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High] {
            for (area, duration, workers) in
                [(50.0, 0.5, 1), (400.0, 2.0, 6), (100.0, 6.0, 20)]
            {
                let recs = generate(risk, &input(area, duration, workers));
                assert!(!recs.is_empty());
                assert!(recs.iter().all(|r| !r.is_empty()));
            }
        }
    }
}
