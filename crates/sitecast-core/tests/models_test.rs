use proptest::prelude::*;
use sitecast_core::models::{DelayProbability, RiskLevel};
use sitecast_core::project::Pressure;

#[test]
fn risk_is_monotonic_in_probability() {
    let tiers: Vec<RiskLevel> = (0..=900)
        .map(|tenths| RiskLevel::classify(DelayProbability::new(tenths as f64 / 10.0)))
        .collect();
    // Once the tier steps up it never steps back down.
    for window in tiers.windows(2) {
        let rank = |r: &RiskLevel| match r {
            RiskLevel::Low => 0,
            RiskLevel::Medium => 1,
            RiskLevel::High => 2,
        };
        assert!(rank(&window[1]) >= rank(&window[0]));
    }
}

proptest! {
    #[test]
    fn probability_is_always_bounded(raw in -1e6..1e6f64) {
        let p = DelayProbability::new(raw).value();
        prop_assert!((0.0..=90.0).contains(&p));
    }

    #[test]
    fn pressure_increases_with_area(
        area in 1.0..100_000.0f64,
        extra in 1.0..10_000.0f64,
        workers in 1..500u32,
        duration in 0.5..60.0f64,
    ) {
        let before = Pressure::compute(area, workers, duration);
        let after = Pressure::compute(area + extra, workers, duration);
        prop_assert!(after.value() > before.value());
    }

    #[test]
    fn pressure_decreases_with_workers(
        area in 1.0..100_000.0f64,
        workers in 1..499u32,
        duration in 0.5..60.0f64,
    ) {
        let before = Pressure::compute(area, workers, duration);
        let after = Pressure::compute(area, workers + 1, duration);
        prop_assert!(after.value() < before.value());
    }
}
