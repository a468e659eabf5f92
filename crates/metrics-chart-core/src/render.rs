// File: crates/metrics-chart-core/src/render.rs
// Summary: Headless raster rendering of a `ChartScene` using Skia CPU surfaces (PNG / RGBA8).

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::axis::{Anchor, AxisLabel};
use crate::panel::ChartScene;
use crate::text::TextShaper;
use crate::theme::Theme;

pub struct RenderOptions {
    /// Device pixels per logical pixel.
    pub scale: f32,
    pub theme: Theme,
    /// Text is skipped when false (keeps snapshots font-independent).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { scale: 1.0, theme: Theme::dashboard(), draw_labels: true }
    }
}

impl RenderOptions {
    pub fn surface_size(&self, scene: &ChartScene) -> (i32, i32) {
        let s = self.scale.max(0.1);
        (
            (scene.geometry.width as f32 * s).round().max(1.0) as i32,
            (scene.geometry.height as f32 * s).round().max(1.0) as i32,
        )
    }
}

fn raster(scene: &ChartScene, opts: &RenderOptions) -> Result<skia::Image> {
    let (w, h) = opts.surface_size(scene);
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
    let canvas = surface.canvas();
    canvas.clear(opts.theme.background);
    canvas.scale((opts.scale.max(0.1), opts.scale.max(0.1)));

    draw_grid(canvas, scene, &opts.theme);
    draw_line(canvas, scene);
    draw_markers(canvas, scene, &opts.theme);
    draw_hover(canvas, scene, &opts.theme);
    if opts.draw_labels {
        let shaper = TextShaper::new();
        draw_labels(canvas, &shaper, scene, &opts.theme);
        draw_tooltip(canvas, Some(&shaper), scene, &opts.theme);
    } else {
        draw_tooltip(canvas, None, scene, &opts.theme);
    }

    tracing::debug!(width = w, height = h, markers = scene.markers.len(), "rendered chart");
    Ok(surface.image_snapshot())
}

/// Encode the scene as PNG bytes.
pub fn render_to_png_bytes(scene: &ChartScene, opts: &RenderOptions) -> Result<Vec<u8>> {
    let image = raster(scene, opts)?;
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render the scene to a PNG at `output_png_path`, creating parent directories.
pub fn render_to_png(scene: &ChartScene, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = render_to_png_bytes(scene, opts)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Unpremultiplied RGBA8 pixels: (pixels, width, height, row stride in bytes).
pub fn render_to_rgba8(scene: &ChartScene, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    let image = raster(scene, opts)?;
    let (w, h) = (image.width(), image.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !image.read_pixels(&info, &mut pixels, stride, (0, 0), skia::image::CachingHint::Allow) {
        anyhow::bail!("read_pixels failed");
    }
    Ok((pixels, w as u32, h as u32, stride))
}

// ---- helpers ----------------------------------------------------------------

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(width);
    p.set_color(color);
    p
}

fn fill(color: skia::Color) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Fill);
    p.set_color(color);
    p
}

fn draw_grid(canvas: &skia::Canvas, scene: &ChartScene, theme: &Theme) {
    let r = scene.geometry.plot_rect();
    let paint = stroke(theme.grid_color(), 1.0);
    for &x in &scene.vertical_grid {
        canvas.draw_line((x as f32, r.top as f32), (x as f32, r.bottom as f32), &paint);
    }
    for &y in &scene.horizontal_grid {
        canvas.draw_line((r.left as f32, y as f32), (r.right as f32, y as f32), &paint);
    }
}

fn draw_line(canvas: &skia::Canvas, scene: &ChartScene) {
    if scene.line.len() < 2 {
        return;
    }
    let mut paint = stroke(scene.color, 3.0);
    paint.set_stroke_cap(skia::paint::Cap::Round);
    paint.set_stroke_join(skia::paint::Join::Round);
    canvas.draw_path(&scene.line.to_skia(), &paint);
}

fn draw_markers(canvas: &skia::Canvas, scene: &ChartScene, theme: &Theme) {
    let body = fill(scene.color.with_a(178));
    let ring = stroke(theme.marker_stroke, 2.0);
    for p in &scene.markers {
        let c = (p.pixel_x as f32, p.pixel_y as f32);
        canvas.draw_circle(c, 4.0, &body);
        canvas.draw_circle(c, 4.0, &ring);
    }
}

fn draw_hover(canvas: &skia::Canvas, scene: &ChartScene, theme: &Theme) {
    if let Some(c) = &scene.crosshair {
        let mut dash = stroke(scene.color.with_a(153), 1.0);
        dash.set_path_effect(skia::PathEffect::dash(&[4.0, 4.0], 0.0));
        canvas.draw_line((c.x as f32, c.top as f32), (c.x as f32, c.bottom as f32), &dash);
    }
    if let Some(h) = &scene.hover {
        let c = (h.pixel_x as f32, h.pixel_y as f32);
        canvas.draw_circle(c, 6.0, &fill(scene.color));
        canvas.draw_circle(c, 6.0, &stroke(theme.marker_stroke, 3.0));
    }
}

fn draw_label(canvas: &skia::Canvas, shaper: &TextShaper, l: &AxisLabel, color: skia::Color) {
    shaper.draw(canvas, &l.text, l.x as f32, l.y as f32, 12.0, color, false, l.anchor);
}

fn draw_labels(canvas: &skia::Canvas, shaper: &TextShaper, scene: &ChartScene, theme: &Theme) {
    let g = &scene.geometry;
    let r = g.plot_rect();
    shaper.draw(canvas, &scene.title, r.left as f32, 24.0, 16.0, theme.title, true, Anchor::Start);

    for l in scene.x_axis.ticks.iter().chain(scene.y_axis.ticks.iter()) {
        draw_label(canvas, shaper, l, theme.axis_label);
    }
    shaper.draw(
        canvas,
        &scene.x_axis.title,
        (g.width / 2.0) as f32,
        (g.height - 10.0) as f32,
        14.0,
        theme.axis_title,
        true,
        Anchor::Middle,
    );

    // Rotated value-axis title
    let cy = (g.height / 2.0) as f32;
    canvas.save();
    canvas.rotate(-90.0, Some(skia::Point::new(20.0, cy)));
    shaper.draw(canvas, &scene.y_axis.title, 20.0, cy, 14.0, theme.axis_title, true, Anchor::Middle);
    canvas.restore();

    let label_w = shaper.measure_width(&scene.legend.label, 13.0, false);
    let lx = r.right as f32 - label_w - 16.0;
    canvas.draw_circle((lx, 20.0), 6.0, &fill(scene.legend.color));
    shaper.draw(canvas, &scene.legend.label, lx + 12.0, 24.0, 13.0, theme.legend_text, false, Anchor::Start);
}

fn draw_tooltip(canvas: &skia::Canvas, shaper: Option<&TextShaper>, scene: &ChartScene, theme: &Theme) {
    let Some(t) = &scene.tooltip else { return };
    let f = t.frame(&scene.geometry);
    let rect = skia::Rect::from_ltrb(f.left as f32, f.top as f32, f.right as f32, f.bottom as f32);
    canvas.draw_round_rect(rect, 8.0, 8.0, &fill(theme.tooltip_background));
    canvas.draw_round_rect(rect, 8.0, 8.0, &stroke(theme.tooltip_border, 1.0));

    let Some(shaper) = shaper else { return };
    let cx = rect.center_x();
    let top = f.top as f32;
    shaper.draw(canvas, &t.title, cx, top + 18.0, 13.0, theme.tooltip_title, true, Anchor::Middle);
    shaper.draw(canvas, &t.day_label, cx, top + 33.0, 11.0, theme.tooltip_text, false, Anchor::Middle);
    shaper.draw(canvas, &t.value_text, cx, top + 50.0, 13.0, t.color, true, Anchor::Middle);
}
