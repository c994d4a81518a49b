/// Sitecast system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fallback cost rate in currency units per square metre.
pub const BASE_RATE_PER_M2: f64 = 1200.0;

/// One worker is expected to cover roughly this many square metres.
pub const IDEAL_AREA_PER_WORKER: f64 = 40.0;

/// One month of schedule is expected to cover roughly this many square metres.
pub const IDEAL_AREA_PER_MONTH: f64 = 120.0;

/// Margin applied around the estimated cost to form the expected range.
pub const COST_MARGIN: f64 = 0.10;

/// Minimum duration (months) used wherever duration appears in a denominator.
pub const MIN_DURATION_MONTHS: f64 = 0.5;

/// Minimum worker count used wherever workers appear in a denominator.
pub const MIN_WORKERS: u32 = 1;
