// File: crates/metrics-chart-core/src/metric.rs
// Summary: Closed set of marketing metrics and period lengths, with per-kind metadata and formatting.
// Notes:
// - Unknown keys are rejected with `ChartError` instead of degrading to a default.

use std::fmt;
use std::str::FromStr;

use skia_safe as skia;

use crate::error::ChartError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Impressions,
    Clicks,
    CostPerAcquisition,
    ReturnOnAdSpend,
    ClickThroughRate,
    Conversions,
}

/// How a metric's values read in labels and tooltips.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueFormat {
    /// `$12.45`
    Currency,
    /// `4.8x`
    Multiplier,
    /// `2.00%`
    Percent,
    /// `80,000`
    Count,
}

/// Static per-kind record.
#[derive(Clone, Copy, Debug)]
pub struct MetricMeta {
    pub key: &'static str,
    pub label: &'static str,
    /// Base magnitude fed to the synthesizer.
    pub base: f64,
    /// Inclusive bound applied after synthesis, if any.
    pub clamp: Option<(f64, f64)>,
    /// Series color as 0xRRGGBB.
    pub rgb: u32,
    pub format: ValueFormat,
}

const METAS: [MetricMeta; 6] = [
    MetricMeta { key: "impressions", label: "Impressions", base: 80_000.0, clamp: None, rgb: 0x22E4AC, format: ValueFormat::Count },
    MetricMeta { key: "clicks", label: "Clicks", base: 1_600.0, clamp: None, rgb: 0xFFB547, format: ValueFormat::Count },
    MetricMeta { key: "cpa", label: "CPA", base: 12.5, clamp: Some((5.0, 25.0)), rgb: 0xFF6B9D, format: ValueFormat::Currency },
    MetricMeta { key: "roas", label: "ROAS", base: 4.8, clamp: Some((1.0, 8.0)), rgb: 0x7F4FFF, format: ValueFormat::Multiplier },
    MetricMeta { key: "ctr", label: "CTR", base: 2.0, clamp: Some((0.5, 5.0)), rgb: 0x36A2EB, format: ValueFormat::Percent },
    MetricMeta { key: "conversions", label: "Conversions", base: 42.0, clamp: None, rgb: 0x28C76F, format: ValueFormat::Count },
];

impl MetricKind {
    /// All kinds, in metric-selector order.
    pub const ALL: [MetricKind; 6] = [
        MetricKind::Impressions,
        MetricKind::Clicks,
        MetricKind::CostPerAcquisition,
        MetricKind::ReturnOnAdSpend,
        MetricKind::ClickThroughRate,
        MetricKind::Conversions,
    ];

    pub fn meta(self) -> &'static MetricMeta {
        let idx = match self {
            MetricKind::Impressions => 0,
            MetricKind::Clicks => 1,
            MetricKind::CostPerAcquisition => 2,
            MetricKind::ReturnOnAdSpend => 3,
            MetricKind::ClickThroughRate => 4,
            MetricKind::Conversions => 5,
        };
        &METAS[idx]
    }

    pub fn key(self) -> &'static str { self.meta().key }
    pub fn label(self) -> &'static str { self.meta().label }
    pub fn base(self) -> f64 { self.meta().base }
    pub fn clamp_range(self) -> Option<(f64, f64)> { self.meta().clamp }

    pub fn color(self) -> skia::Color {
        let rgb = self.meta().rgb;
        skia::Color::from_rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// `#RRGGBB` form of [`MetricKind::color`].
    pub fn color_hex(self) -> String {
        format!("#{:06X}", self.meta().rgb)
    }

    /// Apply the clamp range, if the kind has one.
    pub fn clamp(self, value: f64) -> f64 {
        match self.meta().clamp {
            Some((lo, hi)) => value.clamp(lo, hi),
            None => value,
        }
    }

    pub fn format_value(self, value: f64) -> String {
        match self.meta().format {
            ValueFormat::Currency => format!("${:.2}", value),
            // ties round away from zero: 4.25 -> "4.3x"
            ValueFormat::Multiplier => format!("{:.1}x", (value * 10.0).round() / 10.0),
            ValueFormat::Percent => format!("{:.2}%", value),
            ValueFormat::Count => group_thousands(value.round() as i64),
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MetricKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "impressions" | "impresiones" => MetricKind::Impressions,
            "clicks" | "clics" => MetricKind::Clicks,
            "cpa" | "cost-per-acquisition" => MetricKind::CostPerAcquisition,
            "roas" | "return-on-ad-spend" => MetricKind::ReturnOnAdSpend,
            "ctr" | "click-through-rate" => MetricKind::ClickThroughRate,
            "conversions" | "conversiones" => MetricKind::Conversions,
            _ => return Err(ChartError::UnknownMetric(s.to_string())),
        };
        Ok(kind)
    }
}

/// Comma-grouped integer, e.g. `-1,234,567`.
fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 { out.push('-'); }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Number of days of synthetic history shown by the chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PeriodLength {
    Week,
    TwoWeeks,
    Month,
}

impl PeriodLength {
    pub const ALL: [PeriodLength; 3] = [PeriodLength::Week, PeriodLength::TwoWeeks, PeriodLength::Month];

    pub const fn days(self) -> u32 {
        match self {
            PeriodLength::Week => 7,
            PeriodLength::TwoWeeks => 14,
            PeriodLength::Month => 30,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PeriodLength::Week => "Last 7 days",
            PeriodLength::TwoWeeks => "Last 14 days",
            PeriodLength::Month => "Last 30 days",
        }
    }
}

impl fmt::Display for PeriodLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.days())
    }
}

impl TryFrom<u32> for PeriodLength {
    type Error = ChartError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        match days {
            7 => Ok(PeriodLength::Week),
            14 => Ok(PeriodLength::TwoWeeks),
            30 => Ok(PeriodLength::Month),
            other => Err(ChartError::UnsupportedPeriod(other.to_string())),
        }
    }
}

impl FromStr for PeriodLength {
    type Err = ChartError;

    /// Accepts `"7"` style day counts and `last_7_days` style filter ids.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().to_ascii_lowercase();
        let digits = t
            .strip_prefix("last_")
            .and_then(|rest| rest.strip_suffix("_days"))
            .unwrap_or(t.as_str());
        digits
            .parse::<u32>()
            .map_err(|_| ChartError::UnsupportedPeriod(s.to_string()))
            .and_then(|d| PeriodLength::try_from(d).map_err(|_| ChartError::UnsupportedPeriod(s.to_string())))
    }
}
