// File: crates/metrics-chart-core/src/error.rs
// Summary: Error type for caller-side contract violations (unknown metric / period).

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("unknown metric '{0}' (expected one of: impressions, clicks, cpa, roas, ctr, conversions)")]
    UnknownMetric(String),
    #[error("unsupported period '{0}' (expected 7, 14 or 30 days)")]
    UnsupportedPeriod(String),
}
