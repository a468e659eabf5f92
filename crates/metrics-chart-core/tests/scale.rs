// File: crates/metrics-chart-core/tests/scale.rs
// Purpose: Day/value mapping: endpoints, padding, monotonicity, degenerate series, bounds.

use metrics_chart_core::scale::{DOMAIN_PADDING, FLAT_RANGE};
use metrics_chart_core::{synthesize_period, DataPoint, MetricKind, PeriodLength, ScaleMapper, SeededRng, ValueDomain, ViewportGeometry};
use proptest::prelude::*;

fn points(values: &[f64]) -> Vec<DataPoint> {
    values.iter().enumerate().map(|(i, &value)| DataPoint { day: i as u32 + 1, value }).collect()
}

#[test]
fn day_axis_spans_plot_width() {
    let g = ViewportGeometry::default();
    let s = ScaleMapper::new(g, &points(&[1.0; 14]));
    assert!((s.x_of_day(1) - 80.0).abs() < 1e-9);
    assert!((s.x_of_day(14) - 740.0).abs() < 1e-9);
    for d in 1..14 {
        assert!(s.x_of_day(d + 1) > s.x_of_day(d));
    }
}

#[test]
fn single_day_maps_to_left_edge() {
    let s = ScaleMapper::new(ViewportGeometry::default(), &points(&[3.0]));
    assert_eq!(s.x_of_day(1), 80.0);
    assert!(s.y_of_value(3.1) < s.y_of_value(3.0));
    assert!(s.y_of_value(3.0).is_finite());
}

#[test]
fn value_domain_is_padded_by_ten_percent() {
    let d = ValueDomain::padded(&points(&[10.0, 20.0, 15.0]));
    assert!((d.min - 9.0).abs() < 1e-9);
    assert!((d.max - 21.0).abs() < 1e-9);

    let s = ScaleMapper::new(ViewportGeometry::default(), &points(&[10.0, 20.0, 15.0]));
    assert!((s.y_of_value(21.0) - 40.0).abs() < 1e-9, "padded max sits on the top edge");
    assert!((s.y_of_value(9.0) - 340.0).abs() < 1e-9, "padded min sits on the bottom edge");
}

#[test]
fn flat_and_empty_series_get_a_nonzero_domain() {
    let flat = ValueDomain::padded(&points(&[4.2; 7]));
    assert!((flat.span() - FLAT_RANGE * 2.0 * DOMAIN_PADDING).abs() < 1e-9);
    assert!(flat.min < 4.2 && flat.max > 4.2);
    let s = ScaleMapper::new(ViewportGeometry::default(), &points(&[4.2; 7]));
    assert!(s.y_of_value(4.21) < s.y_of_value(4.2));
    assert!(s.y_of_value(4.2).is_finite());

    let empty = ValueDomain::padded(&[]);
    assert_eq!((empty.min, empty.max), (0.0, 1.0));
    assert!(ScaleMapper::new(ViewportGeometry::default(), &[]).scale_points(&[]).is_empty());
}

#[test]
fn fixed_domain_overrides_series_extent() {
    let g = ViewportGeometry::default();
    let s = ScaleMapper::with_domain(g, 7, ValueDomain { min: 0.0, max: 100.0 });
    assert!((s.y_of_value(0.0) - 340.0).abs() < 1e-9);
    assert!((s.y_of_value(100.0) - 40.0).abs() < 1e-9);
    assert!((s.y_of_value(50.0) - 190.0).abs() < 1e-9);
    assert!((s.x_of_day(7) - 740.0).abs() < 1e-9);
    assert!(g.contains_plot(s.x_of_day(4), s.y_of_value(50.0)));
    assert!(!g.contains_plot(s.x_of_day(1), s.y_of_value(120.0)));
    assert!(!g.contains_plot(10.0, 200.0));
}

#[test]
fn client_x_maps_to_logical_pixels() {
    let g = ViewportGeometry::default();
    assert_eq!(g.to_logical_x(100.0, 400.0), 200.0);
    assert_eq!(g.to_logical_x(100.0, 800.0), 100.0);
    assert!(g.to_logical_x(100.0, 0.0).is_nan());
    assert!(g.to_logical_x(100.0, f64::NAN).is_nan());
}

#[test]
fn inverse_mappings_round_trip() {
    let series = points(&[5.0, 9.5, 7.25, 12.0]);
    let s = ScaleMapper::new(ViewportGeometry::default(), &series);
    for p in &series {
        assert!((s.day_at_x(s.x_of_day(p.day)) - p.day as f64).abs() < 1e-9);
        assert!((s.value_at_y(s.y_of_value(p.value)) - p.value).abs() < 1e-9);
    }
}

#[test]
fn generated_points_render_inside_plot_rect() {
    let g = ViewportGeometry::default();
    let rect = g.plot_rect();
    let mut rng = SeededRng::new(5);
    for metric in MetricKind::ALL {
        for period in PeriodLength::ALL {
            let series = synthesize_period(metric, period, &mut rng);
            let scaled = ScaleMapper::new(g, &series).scale_points(&series);
            assert_eq!(scaled.len(), series.len());
            for (sp, p) in scaled.iter().zip(&series) {
                assert_eq!((sp.day, sp.value), (p.day, p.value), "1:1 and order preserving");
                assert!(rect.contains(sp.pixel_x, sp.pixel_y), "{metric}/{period}: {sp:?} outside {rect:?}");
                assert!(g.contains_plot(sp.pixel_x, sp.pixel_y));
            }
        }
    }
}

fn assert_monotonic(series: &[DataPoint], g: ViewportGeometry) -> Result<(), TestCaseError> {
    let s = ScaleMapper::new(g, series);
    let scaled = s.scale_points(series);
    for w in scaled.windows(2) {
        prop_assert!(w[1].pixel_x > w[0].pixel_x);
    }
    let mut sorted: Vec<f64> = series.iter().map(|p| p.value).collect();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    sorted.dedup();
    for w in sorted.windows(2) {
        prop_assert!(s.y_of_value(w[1]) < s.y_of_value(w[0]));
    }
    let rect = g.plot_rect();
    for p in &scaled {
        prop_assert!(rect.contains(p.pixel_x, p.pixel_y));
    }
    Ok(())
}

proptest! {
    #[test]
    fn monotonic_for_generated_series(seed in any::<u64>(), m in 0usize..6, p in 0usize..3) {
        let series = synthesize_period(MetricKind::ALL[m], PeriodLength::ALL[p], &mut SeededRng::new(seed));
        assert_monotonic(&series, ViewportGeometry::default())?;
    }

    #[test]
    fn monotonic_for_arbitrary_cent_values(cents in prop::collection::vec(0i64..10_000_000, 1..40)) {
        let values: Vec<f64> = cents.iter().map(|&c| c as f64 / 100.0).collect();
        assert_monotonic(&points(&values), ViewportGeometry::default())?;
    }

    #[test]
    fn flat_series_stays_inside(v in 0i64..10_000_000, n in 1usize..31) {
        let series = points(&vec![v as f64 / 100.0; n]);
        assert_monotonic(&series, ViewportGeometry::default())?;
    }
}
