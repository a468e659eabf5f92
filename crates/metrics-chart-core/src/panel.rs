// File: crates/metrics-chart-core/src/panel.rs
// Summary: Chart panel orchestrator: owns the metric/period inputs, the generated series,
// its scaled points and the hover state, and assembles a renderer-agnostic scene.
// Notes:
// - Input changes regenerate the series and clear hover; pointer events never regenerate.

use skia_safe as skia;

use crate::axis::{day_label, Axis};
use crate::grid::{horizontal_lines, vertical_lines};
use crate::hit::{nearest, DEFAULT_TOLERANCE_PX};
use crate::metric::{MetricKind, PeriodLength};
use crate::path::LinePath;
use crate::rng::{JitterSource, SeededRng};
use crate::scale::{ScaleMapper, ScaledPoint};
use crate::series::{synthesize_period, DataPoint};
use crate::types::{PlotRect, ViewportGeometry};

/// Point under the pointer, in pixels plus the source datum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverState {
    pub pixel_x: f64,
    pub pixel_y: f64,
    pub value: f64,
    pub day: u32,
}

impl From<ScaledPoint> for HoverState {
    fn from(p: ScaledPoint) -> Self {
        Self { pixel_x: p.pixel_x, pixel_y: p.pixel_y, value: p.value, day: p.day }
    }
}

/// Tooltip payload anchored at the hovered point.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub title: String,
    pub day_label: String,
    pub value_text: String,
    pub color: skia::Color,
}

impl Tooltip {
    pub const HEIGHT: f64 = 58.0;
    /// Gap between the box and the hovered point.
    pub const OFFSET: f64 = 12.0;

    /// Box centered above the anchor, shifted horizontally to stay on the surface.
    pub fn frame(&self, geometry: &ViewportGeometry) -> PlotRect {
        let longest = [&self.title, &self.day_label, &self.value_text]
            .iter()
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(0);
        let width = (longest as f64 * 7.5 + 24.0).max(96.0);
        let mut left = self.anchor_x - width / 2.0;
        left = left.min(geometry.width - width).max(0.0);
        let bottom = (self.anchor_y - Self::OFFSET).max(Self::HEIGHT);
        PlotRect { left, top: bottom - Self::HEIGHT, right: left + width, bottom }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub label: String,
    pub color: skia::Color,
}

/// Dashed vertical line through the hovered day.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crosshair {
    pub x: f64,
    pub top: f64,
    pub bottom: f64,
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug)]
pub struct ChartScene {
    pub geometry: ViewportGeometry,
    pub title: String,
    pub color: skia::Color,
    pub vertical_grid: Vec<f64>,
    pub horizontal_grid: Vec<f64>,
    pub line: LinePath,
    pub markers: Vec<ScaledPoint>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: Legend,
    pub hover: Option<HoverState>,
    pub crosshair: Option<Crosshair>,
    pub tooltip: Option<Tooltip>,
}

pub struct ChartPanel<R: JitterSource = SeededRng> {
    metric: MetricKind,
    period: PeriodLength,
    geometry: ViewportGeometry,
    tolerance: f64,
    rng: R,
    series: Vec<DataPoint>,
    scale: ScaleMapper,
    scaled: Vec<ScaledPoint>,
    hover: Option<HoverState>,
}

impl ChartPanel<SeededRng> {
    /// Panel on the default viewport with a clock-seeded jitter source.
    pub fn with_defaults(metric: MetricKind, period: PeriodLength) -> Self {
        Self::new(metric, period, ViewportGeometry::default(), SeededRng::from_clock())
    }
}

impl<R: JitterSource> ChartPanel<R> {
    pub fn new(metric: MetricKind, period: PeriodLength, geometry: ViewportGeometry, rng: R) -> Self {
        let mut panel = Self {
            metric,
            period,
            geometry,
            tolerance: DEFAULT_TOLERANCE_PX,
            rng,
            series: Vec::new(),
            scale: ScaleMapper::new(geometry, &[]),
            scaled: Vec::new(),
            hover: None,
        };
        panel.regenerate();
        panel
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn metric(&self) -> MetricKind { self.metric }
    pub fn period(&self) -> PeriodLength { self.period }
    pub fn geometry(&self) -> &ViewportGeometry { &self.geometry }
    pub fn series(&self) -> &[DataPoint] { &self.series }
    pub fn scaled_points(&self) -> &[ScaledPoint] { &self.scaled }
    pub fn scale(&self) -> &ScaleMapper { &self.scale }
    pub fn hover(&self) -> Option<HoverState> { self.hover }

    /// Returns true when the metric changed and the series was regenerated.
    pub fn set_metric(&mut self, metric: MetricKind) -> bool {
        self.set_inputs(metric, self.period)
    }

    pub fn set_period(&mut self, period: PeriodLength) -> bool {
        self.set_inputs(self.metric, period)
    }

    /// Regenerates only if either input differs from the current one.
    pub fn set_inputs(&mut self, metric: MetricKind, period: PeriodLength) -> bool {
        if metric == self.metric && period == self.period {
            return false;
        }
        self.metric = metric;
        self.period = period;
        self.regenerate();
        true
    }

    /// Viewport changes rescale the current series; values are kept.
    pub fn set_geometry(&mut self, geometry: ViewportGeometry) {
        self.geometry = geometry;
        self.rescale();
        self.hover = None;
    }

    /// Draw a fresh series for the current inputs and rescale. Hover is cleared.
    pub fn regenerate(&mut self) {
        self.series = synthesize_period(self.metric, self.period, &mut self.rng);
        self.rescale();
        self.hover = None;
        tracing::debug!(metric = %self.metric, days = self.period.days(), "regenerated series");
    }

    fn rescale(&mut self) {
        self.scale = ScaleMapper::new(self.geometry, &self.series);
        self.scaled = self.scale.scale_points(&self.series);
    }

    /// Pointer moved to logical x `pointer_x`. Returns the new hover state.
    pub fn pointer_move(&mut self, pointer_x: f64) -> Option<HoverState> {
        self.hover = nearest(pointer_x, &self.scaled, self.tolerance).map(HoverState::from);
        tracing::trace!(pointer_x, day = ?self.hover.map(|h| h.day), "hover");
        self.hover
    }

    /// Pointer position on a surface displayed `displayed_width` pixels wide.
    pub fn pointer_move_client(&mut self, client_x: f64, displayed_width: f64) -> Option<HoverState> {
        let x = self.geometry.to_logical_x(client_x, displayed_width);
        self.pointer_move(x)
    }

    pub fn pointer_leave(&mut self) {
        self.hover = None;
    }

    /// `"<Label> trend - <period label>"`
    pub fn title(&self) -> String {
        format!("{} trend - {}", self.metric.label(), self.period.label())
    }

    pub fn tooltip(&self) -> Option<Tooltip> {
        self.hover.map(|h| Tooltip {
            anchor_x: h.pixel_x,
            anchor_y: h.pixel_y,
            title: self.metric.label().to_string(),
            day_label: day_label(h.day),
            value_text: self.metric.format_value(h.value),
            color: self.metric.color(),
        })
    }

    pub fn scene(&self) -> ChartScene {
        let rect = self.geometry.plot_rect();
        let days = self.period.days();
        let vertical_grid = vertical_lines(days).into_iter().map(|d| self.scale.x_of_day(d)).collect();
        ChartScene {
            geometry: self.geometry,
            title: self.title(),
            color: self.metric.color(),
            vertical_grid,
            horizontal_grid: horizontal_lines(&self.geometry),
            line: LinePath::build(&self.scaled),
            markers: self.scaled.clone(),
            x_axis: Axis::days(&self.scale),
            y_axis: Axis::values(&self.scale, self.metric),
            legend: Legend { label: self.metric.label().to_string(), color: self.metric.color() },
            hover: self.hover,
            crosshair: self.hover.map(|h| Crosshair { x: h.pixel_x, top: rect.top, bottom: rect.bottom }),
            tooltip: self.tooltip(),
        }
    }
}
