// File: crates/metrics-chart-core/src/scale.rs
// Summary: Day (X) and value (Y) transforms between the data domain and viewport pixels.

use crate::series::{value_extent, DataPoint};
use crate::types::ViewportGeometry;

/// Fraction of the value range added below the minimum and above the maximum.
pub const DOMAIN_PADDING: f64 = 0.1;
/// Range substituted for a flat series.
pub const FLAT_RANGE: f64 = 1.0;

/// Padded value range that the Y axis spans.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueDomain {
    pub min: f64,
    pub max: f64,
}

impl ValueDomain {
    /// `[min - 10% range, max + 10% range]` over the series values.
    pub fn padded(points: &[DataPoint]) -> Self {
        match value_extent(points) {
            Some((lo, hi)) => Self::padded_extent(lo, hi),
            None => Self { min: 0.0, max: 1.0 },
        }
    }

    pub fn padded_extent(lo: f64, hi: f64) -> Self {
        let mut range = hi - lo;
        if range <= 0.0 || !range.is_finite() { range = FLAT_RANGE; }
        Self { min: lo - range * DOMAIN_PADDING, max: hi + range * DOMAIN_PADDING }
    }

    #[inline]
    pub fn span(&self) -> f64 { self.max - self.min }
}

/// A data point expressed in viewport pixels, still carrying its source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaledPoint {
    pub pixel_x: f64,
    pub pixel_y: f64,
    pub day: u32,
    pub value: f64,
}

/// Linear day/value to pixel mapping for one series on one viewport.
#[derive(Clone, Copy, Debug)]
pub struct ScaleMapper {
    pub geometry: ViewportGeometry,
    pub days: u32,
    pub domain: ValueDomain,
}

impl ScaleMapper {
    pub fn new(geometry: ViewportGeometry, points: &[DataPoint]) -> Self {
        Self { geometry, days: points.len() as u32, domain: ValueDomain::padded(points) }
    }

    pub fn with_domain(geometry: ViewportGeometry, days: u32, domain: ValueDomain) -> Self {
        Self { geometry, days, domain }
    }

    /// Pixels between consecutive days; 0 for a single-day window.
    #[inline]
    pub fn day_spacing(&self) -> f64 {
        if self.days <= 1 { return 0.0; }
        self.geometry.chart_width() / (self.days - 1) as f64
    }

    /// `[1, days]` onto `[left, width - right]`. A single-day window maps to the left edge.
    #[inline]
    pub fn x_of_day(&self, day: u32) -> f64 {
        if self.days <= 1 { return self.geometry.insets.left; }
        let t = (day as f64 - 1.0) / (self.days - 1) as f64;
        self.geometry.insets.left + t * self.geometry.chart_width()
    }

    /// Inverted linear map from the padded domain onto `[height - bottom, top]`.
    #[inline]
    pub fn y_of_value(&self, value: f64) -> f64 {
        let span = self.domain.span().max(1e-12);
        let norm = (value - self.domain.min) / span;
        self.geometry.height - self.geometry.insets.bottom - norm * self.geometry.chart_height()
    }

    /// Fractional day under pixel `px`.
    pub fn day_at_x(&self, px: f64) -> f64 {
        let spacing = self.day_spacing();
        if spacing <= 0.0 { return 1.0; }
        1.0 + (px - self.geometry.insets.left) / spacing
    }

    pub fn value_at_y(&self, py: f64) -> f64 {
        let h = self.geometry.chart_height().max(1e-12);
        let norm = (self.geometry.height - self.geometry.insets.bottom - py) / h;
        self.domain.min + norm * self.domain.span()
    }

    pub fn scale_point(&self, p: &DataPoint) -> ScaledPoint {
        ScaledPoint { pixel_x: self.x_of_day(p.day), pixel_y: self.y_of_value(p.value), day: p.day, value: p.value }
    }

    /// 1:1, order-preserving.
    pub fn scale_points(&self, points: &[DataPoint]) -> Vec<ScaledPoint> {
        points.iter().map(|p| self.scale_point(p)).collect()
    }
}
