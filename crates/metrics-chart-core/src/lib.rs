// File: crates/metrics-chart-core/src/lib.rs
// Summary: Core library entry point; synthetic metric series, scaling, hit testing and chart rendering.

pub mod error;
pub mod metric;
pub mod rng;
pub mod series;
pub mod types;
pub mod scale;
pub mod path;
pub mod grid;
pub mod axis;
pub mod hit;
pub mod panel;
pub mod theme;
pub mod text;
pub mod svg;
pub mod render;

pub use error::ChartError;
pub use metric::{MetricKind, PeriodLength};
pub use rng::{ConstantJitter, JitterSource, SeededRng};
pub use series::{synthesize, synthesize_period, DataPoint};
pub use types::{Insets, ViewportGeometry};
pub use scale::{ScaleMapper, ScaledPoint, ValueDomain};
pub use path::LinePath;
pub use hit::{nearest, DEFAULT_TOLERANCE_PX};
pub use panel::{ChartPanel, ChartScene, HoverState, Tooltip};
pub use theme::Theme;
pub use svg::render_svg;
pub use render::{render_to_png, render_to_png_bytes, render_to_rgba8, RenderOptions};
