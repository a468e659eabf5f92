// File: crates/metrics-chart-core/src/theme.rs
// Summary: Dashboard color palettes for chart chrome (series colors come from the metric).

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_label: skia::Color,
    pub axis_title: skia::Color,
    pub title: skia::Color,
    pub marker_stroke: skia::Color,
    pub tooltip_background: skia::Color,
    pub tooltip_border: skia::Color,
    pub tooltip_title: skia::Color,
    pub tooltip_text: skia::Color,
    pub legend_text: skia::Color,
    /// Opacity applied to grid lines.
    pub grid_alpha: u8,
}

impl Theme {
    /// Dark navy palette of the campaign dashboard.
    pub fn dashboard() -> Self {
        Self {
            name: "dashboard",
            background: skia::Color::from_argb(255, 0x16, 0x17, 0x3A),
            grid: skia::Color::from_argb(255, 0x34, 0x38, 0x4E),
            axis_label: skia::Color::from_argb(255, 0xAA, 0xB3, 0xCC),
            axis_title: skia::Color::from_argb(255, 0xAA, 0xB3, 0xCC),
            title: skia::Color::from_argb(255, 0xF0, 0xF3, 0xFA),
            marker_stroke: skia::Color::WHITE,
            tooltip_background: skia::Color::from_argb(255, 0x0E, 0x0F, 0x2B),
            tooltip_border: skia::Color::from_argb(77, 0x9B, 0x6B, 0xFF), // 30 %
            tooltip_title: skia::Color::from_argb(255, 0xF0, 0xF3, 0xFA),
            tooltip_text: skia::Color::from_argb(255, 0xAA, 0xB3, 0xCC),
            legend_text: skia::Color::from_argb(255, 0xB4, 0xBA, 0xCC),
            grid_alpha: 77,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 200, 200, 210),
            axis_label: skia::Color::from_argb(255, 90, 90, 105),
            axis_title: skia::Color::from_argb(255, 60, 60, 70),
            title: skia::Color::from_argb(255, 20, 20, 30),
            marker_stroke: skia::Color::WHITE,
            tooltip_background: skia::Color::from_argb(255, 255, 255, 255),
            tooltip_border: skia::Color::from_argb(120, 60, 60, 70),
            tooltip_title: skia::Color::from_argb(255, 20, 20, 30),
            tooltip_text: skia::Color::from_argb(255, 90, 90, 105),
            legend_text: skia::Color::from_argb(255, 60, 60, 70),
            grid_alpha: 128,
        }
    }

    /// Grid color with the theme's grid opacity applied.
    pub fn grid_color(&self) -> skia::Color {
        self.grid.with_a(self.grid_alpha)
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dashboard() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dashboard(), Theme::light()]
}

/// Find a theme by its `name` (case-insensitive).
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

/// `#RRGGBB` for SVG output.
pub fn hex(c: skia::Color) -> String {
    format!("#{:02X}{:02X}{:02X}", c.r(), c.g(), c.b())
}

/// Alpha as a 0..1 opacity for SVG output.
pub fn opacity(c: skia::Color) -> f32 {
    c.a() as f32 / 255.0
}
