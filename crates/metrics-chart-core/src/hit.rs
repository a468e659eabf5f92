// File: crates/metrics-chart-core/src/hit.rs
// Summary: Nearest-point lookup for hover tooltips.
// Notes:
// - Only horizontal distance counts: hovering picks "which day", the pointer's
//   height is ignored.

use crate::scale::ScaledPoint;

/// Maximum horizontal distance, in logical pixels, for a point to count as hovered.
pub const DEFAULT_TOLERANCE_PX: f64 = 30.0;

/// Closest point to `pointer_x` with distance `< tolerance`. Earliest point wins ties.
/// A NaN pointer matches nothing.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn nearest(pointer_x: f64, points: &[ScaledPoint], tolerance: f64) -> Option<ScaledPoint> {
    let mut best: Option<(f64, &ScaledPoint)> = None;
    for p in points {
        let d = (pointer_x - p.pixel_x).abs();
        // negated so a NaN distance never matches
        if !(d < tolerance) { continue; }
        match best {
            Some((bd, _)) if !(d < bd) => {}
            _ => best = Some((d, p)),
        }
    }
    best.map(|(_, p)| *p)
}
