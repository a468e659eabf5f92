// File: crates/metrics-chart-core/tests/synth.rs
// Purpose: Series synthesis shape: length, day sequence, clamps, weekend dip, uptrend, rounding.

use metrics_chart_core::series::{is_weekend, trend_factor, WEEKEND_FACTOR};
use metrics_chart_core::{synthesize, synthesize_period, ConstantJitter, MetricKind, PeriodLength, SeededRng};

#[test]
fn length_and_days_match_period_for_every_input() {
    let mut rng = SeededRng::new(7);
    for metric in MetricKind::ALL {
        for period in PeriodLength::ALL {
            let s = synthesize_period(metric, period, &mut rng);
            assert_eq!(s.len(), period.days() as usize, "{metric} / {period}");
            for (i, p) in s.iter().enumerate() {
                assert_eq!(p.day, i as u32 + 1, "days must be contiguous 1..N");
            }
        }
    }
}

#[test]
fn clamped_metrics_stay_in_range_over_1000_generations() {
    let mut rng = SeededRng::new(0xC0FFEE);
    for metric in [MetricKind::ClickThroughRate, MetricKind::ReturnOnAdSpend, MetricKind::CostPerAcquisition] {
        let (lo, hi) = metric.clamp_range().expect("clamped metric");
        for _ in 0..1000 {
            for p in synthesize_period(metric, PeriodLength::Month, &mut rng) {
                assert!(p.value >= lo && p.value <= hi, "{metric}: {} outside [{lo}, {hi}]", p.value);
            }
        }
    }
}

#[test]
fn clamp_only_applies_to_bounded_kinds() {
    assert_eq!(MetricKind::ClickThroughRate.clamp(9.0), 5.0);
    assert_eq!(MetricKind::ClickThroughRate.clamp(0.1), 0.5);
    assert_eq!(MetricKind::ReturnOnAdSpend.clamp(0.2), 1.0);
    assert_eq!(MetricKind::CostPerAcquisition.clamp(40.0), 25.0);
    assert_eq!(MetricKind::Impressions.clamp(1e9), 1e9);
    assert!(MetricKind::Conversions.clamp_range().is_none());
}

#[test]
fn weekend_days_average_below_weekdays() {
    let mut rng = SeededRng::new(42);
    for period in [PeriodLength::TwoWeeks, PeriodLength::Month] {
        let (mut we_sum, mut we_n, mut wd_sum, mut wd_n) = (0.0, 0usize, 0.0, 0usize);
        for _ in 0..200 {
            for p in synthesize_period(MetricKind::Impressions, period, &mut rng) {
                if is_weekend(p.day) {
                    we_sum += p.value;
                    we_n += 1;
                } else {
                    wd_sum += p.value;
                    wd_n += 1;
                }
            }
        }
        let we = we_sum / we_n as f64;
        let wd = wd_sum / wd_n as f64;
        assert!(we < wd * 0.85, "weekend mean {we} should sit well below weekday mean {wd}");
    }
}

#[test]
fn weekend_pattern_starts_on_day_one() {
    let weekend: Vec<u32> = (1..=15).filter(|&d| is_weekend(d)).collect();
    assert_eq!(weekend, vec![1, 7, 8, 14, 15]);
}

#[test]
fn neutral_jitter_gives_exact_shape() {
    // 0.8 + 0.5 * 0.4 == 1.0
    let s = synthesize(MetricKind::Impressions, 7, &mut ConstantJitter(0.5));
    for p in &s {
        let weekend = if is_weekend(p.day) { WEEKEND_FACTOR } else { 1.0 };
        let expected = (80_000.0 * weekend * trend_factor(p.day, 7) * 100.0).round() / 100.0;
        assert!((p.value - expected).abs() < 1e-9, "day {}: {} vs {}", p.day, p.value, expected);
    }
    // uptrend across consecutive weekdays
    let weekdays: Vec<f64> = s.iter().filter(|p| !is_weekend(p.day)).map(|p| p.value).collect();
    assert!(weekdays.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn values_are_rounded_to_cents() {
    let mut rng = SeededRng::new(3);
    for metric in MetricKind::ALL {
        for p in synthesize(metric, 30, &mut rng) {
            let cents = p.value * 100.0;
            assert!((cents - cents.round()).abs() < 1e-6, "{metric}: {} not rounded", p.value);
        }
    }
}

#[test]
fn degenerate_lengths() {
    let mut rng = SeededRng::new(1);
    assert!(synthesize(MetricKind::Clicks, 0, &mut rng).is_empty());
    let one = synthesize(MetricKind::Clicks, 1, &mut rng);
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].day, 1);
    assert!(one[0].value.is_finite());
}

#[test]
fn same_seed_same_series() {
    let a = synthesize(MetricKind::Conversions, 30, &mut SeededRng::new(99));
    let b = synthesize(MetricKind::Conversions, 30, &mut SeededRng::new(99));
    let c = synthesize(MetricKind::Conversions, 30, &mut SeededRng::new(100));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn jitter_stays_within_twenty_percent() {
    let mut rng = SeededRng::new(11);
    for _ in 0..500 {
        for p in synthesize(MetricKind::Impressions, 30, &mut rng) {
            let weekend = if is_weekend(p.day) { WEEKEND_FACTOR } else { 1.0 };
            let center = 80_000.0 * weekend * trend_factor(p.day, 30);
            assert!(p.value >= center * 0.8 - 0.01 && p.value <= center * 1.2 + 0.01);
        }
    }
}
