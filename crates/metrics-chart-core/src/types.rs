// File: crates/metrics-chart-core/src/types.rs
// Summary: Viewport geometry shared by scaling, grid layout and renderers.

/// Default logical surface width.
pub const WIDTH: f64 = 800.0;
/// Default logical surface height.
pub const HEIGHT: f64 = 400.0;

/// Padding around the drawable rectangle, in logical pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Insets {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(40.0, 60.0, 60.0, 80.0)
    }
}

/// Plot rectangle in pixel coordinates (origin top-left).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotRect {
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportGeometry {
    pub width: f64,
    pub height: f64,
    pub insets: Insets,
}

impl ViewportGeometry {
    pub fn new(width: f64, height: f64, insets: Insets) -> Self {
        Self { width, height, insets }
    }

    pub fn plot_rect(&self) -> PlotRect {
        PlotRect {
            left: self.insets.left,
            top: self.insets.top,
            right: self.width - self.insets.right,
            bottom: self.height - self.insets.bottom,
        }
    }

    /// Whether logical point (x, y) lies in the drawable rectangle (edges included).
    pub fn contains_plot(&self, x: f64, y: f64) -> bool {
        self.plot_rect().contains(x, y)
    }

    pub fn chart_width(&self) -> f64 { (self.width - self.insets.hsum()).max(0.0) }
    pub fn chart_height(&self) -> f64 { (self.height - self.insets.vsum()).max(0.0) }

    /// Map a pointer x measured on a surface displayed `displayed_width` wide
    /// back to logical coordinates. NaN when the width is not a positive finite number.
    pub fn to_logical_x(&self, client_x: f64, displayed_width: f64) -> f64 {
        if !displayed_width.is_finite() || displayed_width <= 0.0 { return f64::NAN; }
        client_x * (self.width / displayed_width)
    }
}

impl Default for ViewportGeometry {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, Insets::default())
    }
}
