// File: crates/metrics-chart-core/src/path.rs
// Summary: Straight-segment polyline through scaled points, as SVG path data or a Skia path.

use std::fmt::Write;

use skia_safe as skia;

use crate::scale::ScaledPoint;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinePath {
    pub commands: Vec<PathCommand>,
}

impl LinePath {
    /// First point opens the path; each following point adds a segment. No smoothing.
    pub fn build(points: &[ScaledPoint]) -> Self {
        let commands = points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                if i == 0 {
                    PathCommand::MoveTo { x: p.pixel_x, y: p.pixel_y }
                } else {
                    PathCommand::LineTo { x: p.pixel_x, y: p.pixel_y }
                }
            })
            .collect();
        Self { commands }
    }

    pub fn is_empty(&self) -> bool { self.commands.is_empty() }
    pub fn len(&self) -> usize { self.commands.len() }

    /// SVG `d` attribute, fixed two decimals: `M 80.00 120.50 L 120.00 98.25`.
    pub fn to_svg_d(&self) -> String {
        let mut d = String::with_capacity(self.commands.len() * 18);
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 { d.push(' '); }
            let _ = match *cmd {
                PathCommand::MoveTo { x, y } => write!(d, "M {:.2} {:.2}", x, y),
                PathCommand::LineTo { x, y } => write!(d, "L {:.2} {:.2}", x, y),
            };
        }
        d
    }

    pub fn to_skia(&self) -> skia::Path {
        let mut path = skia::Path::new();
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo { x, y } => { path.move_to((x as f32, y as f32)); }
                PathCommand::LineTo { x, y } => { path.line_to((x as f32, y as f32)); }
            }
        }
        path
    }
}
