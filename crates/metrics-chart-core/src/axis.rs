// File: crates/metrics-chart-core/src/axis.rs
// Summary: Axis titles and tick labels for the day (X) and value (Y) axes.

use crate::grid::horizontal_levels;
use crate::metric::MetricKind;
use crate::scale::ScaleMapper;

/// At most this many day labels under the X axis.
pub const MAX_DAY_LABELS: u32 = 8;
pub const X_AXIS_TITLE: &str = "Days in period";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub anchor: Anchor,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub title: String,
    pub ticks: Vec<AxisLabel>,
}

impl Axis {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), ticks: Vec::new() }
    }

    /// Day axis: up to eight `Day N` labels spread over the window.
    pub fn days(scale: &ScaleMapper) -> Self {
        let baseline = scale.geometry.height - scale.geometry.insets.bottom + 20.0;
        let ticks = day_label_positions(scale.days)
            .into_iter()
            .map(|day| AxisLabel {
                x: scale.x_of_day(day),
                y: baseline,
                text: day_label(day),
                anchor: Anchor::Middle,
            })
            .collect();
        Self { title: X_AXIS_TITLE.to_string(), ticks }
    }

    /// Value axis: one label per horizontal grid level, formatted for the metric.
    pub fn values(scale: &ScaleMapper, metric: MetricKind) -> Self {
        let x = scale.geometry.insets.left - 8.0;
        let ticks = horizontal_levels(&scale.domain)
            .iter()
            .map(|&v| AxisLabel {
                x,
                y: scale.y_of_value(v) + 4.0,
                text: metric.format_value(v),
                anchor: Anchor::End,
            })
            .collect();
        Self { title: metric.label().to_string(), ticks }
    }
}

pub fn day_label(day: u32) -> String {
    format!("Day {day}")
}

/// Days `floor(i * days / 7) + 1` for `i < min(days, 8)`, clamped to the window, no repeats.
pub fn day_label_positions(days: u32) -> Vec<u32> {
    let mut out: Vec<u32> = Vec::new();
    for i in 0..days.min(MAX_DAY_LABELS) {
        let day = ((i * days) / 7 + 1).min(days);
        if out.last() != Some(&day) {
            out.push(day);
        }
    }
    out
}
