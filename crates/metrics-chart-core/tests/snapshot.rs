// File: crates/metrics-chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic charts (constant jitter) to PNG bytes, labels off.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.
// Golden images are opt-in: none are checked in, because Skia raster output
// differs across platforms/versions. Bless locally with
// `UPDATE_SNAPSHOTS=1 cargo test -p metrics-chart-core --test snapshot`, then
// plain runs compare against them. `deterministic_render` always checks that
// two renders of the same scene produce identical pixels.

use metrics_chart_core::{render_to_png_bytes, ChartPanel, ConstantJitter, MetricKind, PeriodLength, RenderOptions, ViewportGeometry};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render_bytes(metric: MetricKind, period: PeriodLength, hover_day: Option<u32>) -> Vec<u8> {
    let mut panel = ChartPanel::new(metric, period, ViewportGeometry::default(), ConstantJitter(0.5));
    if let Some(day) = hover_day {
        panel.pointer_move(panel.scale().x_of_day(day));
    }
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    render_to_png_bytes(&panel.scene(), &opts).expect("render bytes")
}

fn snap_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

#[test]
fn golden_impressions_week() {
    let bytes = render_bytes(MetricKind::Impressions, PeriodLength::Week, None);
    write_or_compare(&snap_path("impressions_week.png"), &bytes);
}

#[test]
fn golden_ctr_fortnight_hovered() {
    let bytes = render_bytes(MetricKind::ClickThroughRate, PeriodLength::TwoWeeks, Some(5));
    write_or_compare(&snap_path("ctr_fortnight_hover.png"), &bytes);
}

#[test]
fn deterministic_render() {
    let a = render_bytes(MetricKind::ReturnOnAdSpend, PeriodLength::Month, Some(10));
    let b = render_bytes(MetricKind::ReturnOnAdSpend, PeriodLength::Month, Some(10));
    let a = image::load_from_memory(&a).expect("decode a").to_rgba8();
    let b = image::load_from_memory(&b).expect("decode b").to_rgba8();
    assert_eq!(a.as_raw(), b.as_raw());
}
