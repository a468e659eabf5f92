// File: crates/metrics-chart-core/src/series.rs
// Summary: Daily metric series model and the synthetic series generator.
// Notes:
// - Values follow a fixed shape (weekend dip, mild uptrend, per-kind clamp)
//   with multiplicative jitter drawn from an injected `JitterSource`.
// - A series is never patched in place; a new input pair means a new Vec.

use crate::metric::{MetricKind, PeriodLength};
use crate::rng::JitterSource;

/// Multiplier applied on weekend days.
pub const WEEKEND_FACTOR: f64 = 0.7;
/// Growth over the whole window (10 %).
pub const TREND_GAIN: f64 = 0.1;
/// Jitter is drawn uniformly from `[JITTER_MIN, JITTER_MIN + JITTER_SPAN)`.
pub const JITTER_MIN: f64 = 0.8;
pub const JITTER_SPAN: f64 = 0.4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    /// 1-based day index.
    pub day: u32,
    pub value: f64,
}

/// Weekend days are those with `(day - 1) % 7` of 0 or 6: days 1, 7, 8, 14, 15, ...
#[inline]
pub fn is_weekend(day: u32) -> bool {
    let dow = (day.saturating_sub(1)) % 7;
    dow == 0 || dow == 6
}

/// Trend multiplier for `day` of a `days`-long window.
#[inline]
pub fn trend_factor(day: u32, days: u32) -> f64 {
    if days == 0 { return 1.0; }
    1.0 + (day as f64 / days as f64) * TREND_GAIN
}

/// Generate `days` points for `metric`, day-ascending, values rounded to cents.
pub fn synthesize<R: JitterSource + ?Sized>(metric: MetricKind, days: u32, rng: &mut R) -> Vec<DataPoint> {
    let base = metric.base();
    let mut out = Vec::with_capacity(days as usize);
    for day in 1..=days {
        let weekend = if is_weekend(day) { WEEKEND_FACTOR } else { 1.0 };
        let trend = trend_factor(day, days);
        let jitter = JITTER_MIN + rng.next_unit() * JITTER_SPAN;

        let value = metric.clamp(base * weekend * trend * jitter);
        out.push(DataPoint { day, value: round2(value) });
    }
    out
}

pub fn synthesize_period<R: JitterSource + ?Sized>(metric: MetricKind, period: PeriodLength, rng: &mut R) -> Vec<DataPoint> {
    synthesize(metric, period.days(), rng)
}

/// (min, max) of the values, or `None` for an empty series.
pub fn value_extent(points: &[DataPoint]) -> Option<(f64, f64)> {
    let first = points.first()?;
    let mut lo = first.value;
    let mut hi = first.value;
    for p in &points[1..] {
        lo = lo.min(p.value);
        hi = hi.max(p.value);
    }
    Some((lo, hi))
}

#[inline]
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
