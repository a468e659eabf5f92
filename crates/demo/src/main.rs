// File: crates/demo/src/main.rs
// Summary: Demo synthesizes a metric series, optionally simulates a hover, and writes PNG, SVG and CSV.

use anyhow::{Context, Result};
use clap::Parser;
use metrics_chart_core::series::value_extent;
use metrics_chart_core::{
    render_svg, render_to_png, theme, ChartPanel, DataPoint, MetricKind, PeriodLength, RenderOptions, SeededRng,
    ViewportGeometry,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "metrics-chart-demo", about = "Render a synthetic campaign metric chart")]
struct Args {
    /// impressions | clicks | cpa | roas | ctr | conversions
    #[arg(long, default_value = "impressions")]
    metric: MetricKind,
    /// 7, 14, 30 or last_N_days
    #[arg(long, default_value = "30")]
    period: PeriodLength,
    /// Fixed seed for a reproducible series; clock-seeded when absent.
    #[arg(long)]
    seed: Option<u64>,
    /// Simulate the pointer resting on this day.
    #[arg(long)]
    hover_day: Option<u32>,
    /// Render every metric instead of just `--metric`.
    #[arg(long)]
    all: bool,
    #[arg(long, default_value = "dashboard")]
    theme: String,
    /// Device pixels per logical pixel for the PNG.
    #[arg(long, default_value_t = 1.0)]
    scale: f32,
    #[arg(long, default_value = "target/out")]
    out: PathBuf,
    #[arg(long)]
    no_labels: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let theme = theme::find(&args.theme)
        .with_context(|| format!("unknown theme '{}' (try: dashboard, light)", args.theme))?;
    let opts = RenderOptions { scale: args.scale, theme, draw_labels: !args.no_labels };

    if let Some(day) = args.hover_day {
        if day == 0 || day > args.period.days() {
            anyhow::bail!("--hover-day {day} outside 1..={}", args.period.days());
        }
    }

    let rng = match args.seed {
        Some(seed) => SeededRng::new(seed),
        None => SeededRng::from_clock(),
    };
    let mut panel = ChartPanel::new(args.metric, args.period, ViewportGeometry::default(), rng);

    let metrics: Vec<MetricKind> = if args.all { MetricKind::ALL.to_vec() } else { vec![args.metric] };
    std::fs::create_dir_all(&args.out).with_context(|| format!("creating {}", args.out.display()))?;

    for metric in metrics {
        panel.set_metric(metric);
        if let Some(day) = args.hover_day {
            let x = panel.scale().x_of_day(day);
            panel.pointer_move(x);
        }

        let (min_v, max_v) = value_extent(panel.series()).context("empty series")?;
        tracing::info!(%metric, days = panel.period().days(), min = %metric.format_value(min_v), max = %metric.format_value(max_v), "generated series");
        if let Some(tip) = panel.tooltip() {
            tracing::info!(title = %tip.title, day = %tip.day_label, value = %tip.value_text, "tooltip");
        }

        let scene = panel.scene();
        let stem = out_stem(&args.out, metric, panel.period());

        let png = stem.with_extension("png");
        render_to_png(&scene, &opts, &png)?;
        tracing::info!("Wrote {}", png.display());

        let svg = stem.with_extension("svg");
        std::fs::write(&svg, render_svg(&scene, &opts.theme)).with_context(|| format!("writing {}", svg.display()))?;
        tracing::info!("Wrote {}", svg.display());

        let csv = stem.with_extension("csv");
        write_series_csv(&csv, metric, panel.series())
            .with_context(|| format!("failed to write CSV '{}'", csv.display()))?;
        tracing::info!("Wrote {}", csv.display());
    }

    Ok(())
}

/// Output stem like target/out/chart_<metric>_<days>d
fn out_stem(dir: &Path, metric: MetricKind, period: PeriodLength) -> PathBuf {
    dir.join(format!("chart_{}_{}d", metric.key(), period.days()))
}

/// day,value,formatted
fn write_series_csv(path: &Path, metric: MetricKind, series: &[DataPoint]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path).with_context(|| format!("opening {}", path.display()))?;
    wtr.write_record(["day", "value", "formatted"])?;
    for p in series {
        wtr.write_record([p.day.to_string(), format!("{:.2}", p.value), metric.format_value(p.value)])?;
    }
    wtr.flush()?;
    Ok(())
}
