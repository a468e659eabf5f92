// File: crates/metrics-chart-core/src/grid.rs
// Summary: Reference-line layout: day columns thinned by period, six value rows.

use crate::scale::ValueDomain;
use crate::types::ViewportGeometry;

/// Number of horizontal reference lines (levels 0..=5).
pub const HORIZONTAL_LINES: usize = 6;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Day spacing between vertical lines.
pub fn day_step(days: u32) -> u32 {
    match days {
        0..=7 => 1,
        8..=14 => 2,
        15..=30 => 5,
        _ => 10,
    }
}

/// Days that get a vertical reference line: 1, 1 + step, ... up to `days`.
pub fn vertical_lines(days: u32) -> Vec<u32> {
    (1..=days).step_by(day_step(days) as usize).collect()
}

/// Six evenly spaced values from the bottom (level 0) to the top (level 5) of the domain.
pub fn horizontal_levels(domain: &ValueDomain) -> [f64; HORIZONTAL_LINES] {
    let step = domain.span() / (HORIZONTAL_LINES - 1) as f64;
    let mut out = [0.0; HORIZONTAL_LINES];
    for (i, v) in out.iter_mut().enumerate() {
        *v = domain.min + step * i as f64;
    }
    out
}

/// Pixel rows of the horizontal lines, top to bottom.
pub fn horizontal_lines(geometry: &ViewportGeometry) -> Vec<f64> {
    let r = geometry.plot_rect();
    linspace(r.top, r.bottom, HORIZONTAL_LINES)
}
