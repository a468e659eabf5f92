// File: crates/metrics-chart-core/src/svg.rs
// Summary: SVG export of a `ChartScene` (viewBox in logical pixels).

use std::fmt::Write;

use crate::axis::{Anchor, AxisLabel};
use crate::panel::ChartScene;
use crate::theme::{hex, opacity, Theme};

fn anchor_attr(a: Anchor) -> &'static str {
    match a {
        Anchor::Start => "start",
        Anchor::Middle => "middle",
        Anchor::End => "end",
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn label(svg: &mut String, l: &AxisLabel, fill: &str, size: u32) {
    let _ = writeln!(
        svg,
        r#"  <text x="{:.2}" y="{:.2}" text-anchor="{}" fill="{}" font-size="{}">{}</text>"#,
        l.x, l.y, anchor_attr(l.anchor), fill, size, escape(&l.text)
    );
}

pub fn render_svg(scene: &ChartScene, theme: &Theme) -> String {
    let g = &scene.geometry;
    let rect = g.plot_rect();
    let color = hex(scene.color);
    let grid = hex(theme.grid);
    let grid_opacity = theme.grid_alpha as f32 / 255.0;
    let mut svg = String::with_capacity(8 * 1024);

    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
        w = g.width,
        h = g.height
    );
    let _ = writeln!(svg, r#"  <rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#, g.width, g.height, hex(theme.background));
    let _ = writeln!(
        svg,
        r#"  <text x="{:.2}" y="24" fill="{}" font-size="16" font-weight="500">{}</text>"#,
        rect.left, hex(theme.title), escape(&scene.title)
    );

    for &x in &scene.vertical_grid {
        let _ = writeln!(
            svg,
            r#"  <line x1="{x:.2}" y1="{:.2}" x2="{x:.2}" y2="{:.2}" stroke="{grid}" stroke-width="1" opacity="{grid_opacity:.2}"/>"#,
            rect.top, rect.bottom
        );
    }
    for &y in &scene.horizontal_grid {
        let _ = writeln!(
            svg,
            r#"  <line x1="{:.2}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" stroke="{grid}" stroke-width="1" opacity="{grid_opacity:.2}"/>"#,
            rect.left, rect.right
        );
    }

    if !scene.line.is_empty() {
        let _ = writeln!(
            svg,
            r#"  <path d="{}" fill="none" stroke="{color}" stroke-width="3" stroke-linecap="round" stroke-linejoin="round"/>"#,
            scene.line.to_svg_d()
        );
    }

    let marker_stroke = hex(theme.marker_stroke);
    for p in &scene.markers {
        let _ = writeln!(
            svg,
            r#"  <circle cx="{:.2}" cy="{:.2}" r="4" fill="{color}" fill-opacity="0.7" stroke="{marker_stroke}" stroke-width="2"/>"#,
            p.pixel_x, p.pixel_y
        );
    }

    if let Some(c) = &scene.crosshair {
        let _ = writeln!(
            svg,
            r#"  <line x1="{x:.2}" y1="{:.2}" x2="{x:.2}" y2="{:.2}" stroke="{color}" stroke-width="1" stroke-dasharray="4,4" opacity="0.6"/>"#,
            c.top, c.bottom, x = c.x
        );
    }
    if let Some(h) = &scene.hover {
        let _ = writeln!(
            svg,
            r#"  <circle cx="{:.2}" cy="{:.2}" r="6" fill="{color}" stroke="{marker_stroke}" stroke-width="3"/>"#,
            h.pixel_x, h.pixel_y
        );
    }

    let axis_fill = hex(theme.axis_label);
    for l in scene.x_axis.ticks.iter().chain(scene.y_axis.ticks.iter()) {
        label(&mut svg, l, &axis_fill, 12);
    }
    let title_fill = hex(theme.axis_title);
    let _ = writeln!(
        svg,
        r#"  <text x="{:.2}" y="{:.2}" text-anchor="middle" fill="{}" font-size="14" font-weight="500">{}</text>"#,
        g.width / 2.0, g.height - 10.0, title_fill, escape(&scene.x_axis.title)
    );
    let cy = g.height / 2.0;
    let _ = writeln!(
        svg,
        r#"  <text x="20" y="{cy:.2}" text-anchor="middle" fill="{}" font-size="14" font-weight="500" transform="rotate(-90, 20, {cy:.2})">{}</text>"#,
        title_fill, escape(&scene.y_axis.title)
    );

    let legend_x = rect.right - 8.0 * scene.legend.label.chars().count() as f64 - 16.0;
    let _ = writeln!(
        svg,
        r#"  <circle cx="{:.2}" cy="20" r="6" fill="{}"/>"#,
        legend_x, hex(scene.legend.color)
    );
    let _ = writeln!(
        svg,
        r#"  <text x="{:.2}" y="24" fill="{}" font-size="13">{}</text>"#,
        legend_x + 12.0, hex(theme.legend_text), escape(&scene.legend.label)
    );

    if let Some(t) = &scene.tooltip {
        let f = t.frame(g);
        let cx = (f.left + f.right) / 2.0;
        let _ = writeln!(svg, r#"  <g class="tooltip">"#);
        let _ = writeln!(
            svg,
            r#"    <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="8" fill="{}" stroke="{}" stroke-opacity="{:.2}"/>"#,
            f.left, f.top, f.width(), f.height(),
            hex(theme.tooltip_background), hex(theme.tooltip_border), opacity(theme.tooltip_border)
        );
        let _ = writeln!(
            svg,
            r#"    <text x="{cx:.2}" y="{:.2}" text-anchor="middle" fill="{}" font-size="13" font-weight="500">{}</text>"#,
            f.top + 18.0, hex(theme.tooltip_title), escape(&t.title)
        );
        let _ = writeln!(
            svg,
            r#"    <text x="{cx:.2}" y="{:.2}" text-anchor="middle" fill="{}" font-size="11">{}</text>"#,
            f.top + 33.0, hex(theme.tooltip_text), escape(&t.day_label)
        );
        let _ = writeln!(
            svg,
            r#"    <text x="{cx:.2}" y="{:.2}" text-anchor="middle" fill="{}" font-size="13" font-weight="bold">{}</text>"#,
            f.top + 50.0, hex(t.color), escape(&t.value_text)
        );
        let _ = writeln!(svg, "  </g>");
    }

    svg.push_str("</svg>\n");
    svg
}
