//! Integration tests for epi-estimators.
//!
//! These tests run the estimators end to end on small synthetic outbreaks.

use epi_core::prelude::*;
use epi_estimators::prelude::*;

// ============================================================================
// Test Utilities
// ============================================================================

// 2020-03-01 UTC
const MARCH_1: i64 = 1_583_020_800_000;

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual}"
    );
}

/// Cumulative fatalities with a single jump of `deaths` on day `day`.
fn cumulative_spike(len: usize, day: usize, deaths: f64) -> TimeSeries {
    let range = (0..len).map(|i| if i >= day { deaths } else { 0.0 }).collect();
    TimeSeries::daily(MARCH_1, range)
}

// ============================================================================
// Active Case Plateau
// ============================================================================

#[test]
fn test_window_sum_spike_plateau() {
    let mut range = vec![0.0; 30];
    range[10] = 250.0;
    let daily = TimeSeries::daily(MARCH_1, range);
    let active = daily.cross_correlate(&Kernel::window_sum(14).unwrap());

    let plateau: Vec<i64> = active
        .iter()
        .filter(|(_, v)| *v != 0.0)
        .map(|(t, _)| t)
        .collect();
    assert_eq!(plateau.len(), 14);
    assert_eq!(plateau[0], MARCH_1 + 3 * DAY_MS);
    assert_eq!(plateau[13], MARCH_1 + 16 * DAY_MS);
    assert!(active.iter().all(|(_, v)| v == 0.0 || v == 250.0));
}

#[test]
fn test_fatality_spike_plateau_without_spread() {
    // A sigma this small yields a single-tap kernel, so only the delay applies
    let config = EstimatorConfig::default().with_sigma(0.1);
    let daily = differentiate(&cumulative_spike(40, 25, 5.0));
    let estimate = fatality_count_to_case_estimate(&daily, &config).unwrap();

    assert_eq!(estimate.smoothing_half_width, 0);
    assert_eq!(estimate.daily.len(), 40);

    let infection_day = MARCH_1 + (25 - 19) * DAY_MS;
    assert_close(estimate.daily.value_at(infection_day).unwrap(), 500.0, 1e-9);

    let plateau: Vec<(i64, f64)> = estimate
        .active
        .iter()
        .filter(|(_, v)| v.abs() > 1e-9)
        .collect();
    assert_eq!(plateau.len(), 14);
    for (_, value) in &plateau {
        assert_close(*value, 500.0, 1e-9);
    }
    assert_eq!(plateau[0].0, infection_day - 7 * DAY_MS);
}

#[test]
fn test_fatality_spike_is_spread_by_gaussian() {
    let daily = differentiate(&cumulative_spike(60, 40, 2.0));
    let estimate = fatality_count_to_case_estimate(&daily, &EstimatorConfig::default()).unwrap();

    // Peak stays on the infection date, mass is spread over 27 days
    let infection_day = MARCH_1 + (40 - 19) * DAY_MS;
    let (peak_day, peak) = estimate
        .daily
        .iter()
        .fold((0, f64::MIN), |best, (t, v)| if v > best.1 { (t, v) } else { best });
    assert_eq!(peak_day, infection_day);
    assert!(peak < 200.0);
    assert_close(estimate.daily.sum(), 200.0, 1e-6);

    // The active plateau is bounded by the total infections
    let max_active = estimate.active.range().iter().copied().fold(f64::MIN, f64::max);
    assert!(max_active <= 200.0 + 1e-6);
    assert!(max_active > 150.0);
}

// ============================================================================
// Configuration Effects
// ============================================================================

#[test]
fn test_fatality_rate_scales_linearly() {
    let daily = differentiate(&cumulative_spike(30, 20, 3.0));
    let base = fatality_count_to_case_estimate(&daily, &EstimatorConfig::default()).unwrap();
    let halved = fatality_count_to_case_estimate(
        &daily,
        &EstimatorConfig::default().with_fatality_rate(0.02),
    )
    .unwrap();

    assert_eq!(base.daily.domain(), halved.daily.domain());
    for (a, b) in base.daily.range().iter().zip(halved.daily.range()) {
        assert_close(*a, 2.0 * b, 1e-9);
    }
}

#[test]
fn test_delay_days_moves_domain() {
    let daily = differentiate(&cumulative_spike(30, 20, 3.0));
    let near_config = EstimatorConfig::default().with_delay_days(5);
    let far_config = EstimatorConfig::default().with_delay_days(25);
    let near = fatality_count_to_case_estimate(&daily, &near_config).unwrap();
    let far = fatality_count_to_case_estimate(&daily, &far_config).unwrap();

    assert_eq!(near.daily.range(), far.daily.range());
    assert_eq!(
        near.daily.first_timestamp().unwrap() - far.daily.first_timestamp().unwrap(),
        20 * DAY_MS
    );
}

#[test]
fn test_edge_crop_days() {
    let daily = differentiate(&cumulative_spike(30, 20, 3.0));
    let config = EstimatorConfig::default().with_edge_crop(EdgeCrop::Days(5));
    let estimate = fatality_count_to_case_estimate(&daily, &config).unwrap();
    assert_eq!(estimate.daily.len(), 30 + 26 - 10);
    assert_eq!(estimate.active.len(), 30 + 26 + 13 - 10);
}

// ============================================================================
// Estimator Trait
// ============================================================================

#[test]
fn test_estimators_behind_trait() {
    fn run<E: IncidenceEstimator<f64>>(estimator: &E, daily: &TimeSeries) -> E::Output {
        estimator.estimate(daily).unwrap()
    }

    let daily = differentiate(&cumulative_spike(10, 4, 1.0));
    let fatality = FatalityEstimator::new(EstimatorConfig::default()).unwrap();
    let testing = TestingEstimator::new(EstimatorConfig::default()).unwrap();

    assert_eq!(run(&fatality, &daily).daily.len(), 36);
    assert_eq!(run(&testing, &daily), daily);
    assert_eq!(IncidenceEstimator::<f64>::config(&fatality).delay_days, 19);
}

// ============================================================================
// Chart Report
// ============================================================================

#[test]
fn test_report_labels_and_datasets() {
    let cases = TimeSeries::daily(MARCH_1, (0..20).map(|i| f64::from(i * i)).collect());
    let fatalities = cumulative_spike(20, 15, 4.0);
    let report = ChartReport::build(&cases, &fatalities, &EstimatorConfig::default()).unwrap();

    let names: Vec<&str> = report
        .active_cases
        .datasets
        .iter()
        .map(|d| d.label.as_str())
        .collect();
    assert_eq!(names, ["Estimated From Fatalities", "Estimated From Testing"]);
    assert_eq!(report.daily_fatalities.datasets[0].label, "Confirmed Fatalities");

    // Fatality panel holds the daily deltas
    let spike = &report.daily_fatalities.datasets[0].data[15];
    assert_eq!(spike.x, "2020-3-16");
    assert_eq!(spike.y, 4.0);

    // Every point sits on its panel's label axis
    for panel in [&report.active_cases, &report.daily_fatalities, &report.daily_cases] {
        for dataset in &panel.datasets {
            for point in &dataset.data {
                assert!(panel.labels.contains(&point.x), "{} missing", point.x);
            }
        }
    }
}

#[test]
fn test_report_serializes_points() {
    let cases = TimeSeries::daily(MARCH_1, vec![1.0, 3.0]);
    let fatalities = TimeSeries::daily(MARCH_1, vec![0.0, 1.0]);
    let report = ChartReport::build(&cases, &fatalities, &EstimatorConfig::default()).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    let first = &json["daily_fatalities"]["datasets"][0]["data"][1];
    assert_eq!(first["x"], "2020-3-2");
    assert_eq!(first["y"], 1.0);
    assert_eq!(json["daily_cases"]["datasets"][1]["data"][1]["y"], 2.0);
}
