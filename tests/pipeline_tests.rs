//! End-to-end tests: CSV export to JSON tree to chart report.

mod common;

use common::*;
use epi_core::prelude::*;
use epi_data::{county_path, parse_counties, write_json_tree, CountyRecord};
use epi_estimators::prelude::*;

// ============================================================================
// Ingestion to Report
// ============================================================================

#[test]
fn test_csv_to_report() {
    let mut csv = String::from("date,county,state,fips,cases,deaths\n");
    for day in 1..=30u64 {
        csv.push_str(&format!(
            "2020-04-{day:02},King,Washington,53033,{},{}\n",
            day * 10,
            day / 3
        ));
    }

    let dir = tempfile::tempdir().unwrap();
    write_json_tree(&parse_counties(csv.as_bytes()).unwrap(), dir.path()).unwrap();

    let record = CountyRecord::from_path(&county_path(dir.path(), "Washington", "King")).unwrap();
    let (cases, fatalities) = record.into_series::<f64>().unwrap();
    assert_eq!(cases.len(), 30);
    assert_eq!(timestamp_to_label(cases.first_timestamp().unwrap()), "2020-4-1");

    let report = ChartReport::build(&cases, &fatalities, &EstimatorConfig::default()).unwrap();
    assert_eq!(report.daily_fatalities.labels.first().unwrap(), "2020-4-1");
    assert_eq!(report.daily_fatalities.labels.last().unwrap(), "2020-4-30");

    // Confirmed new cases are the daily deltas
    let confirmed = &report.daily_cases.datasets[1].data;
    assert!(confirmed.iter().all(|p| p.y == 10.0));

    // Estimate total equals daily fatalities over the rate
    let estimated: f64 = report.daily_cases.datasets[0].data.iter().map(|p| p.y).sum();
    assert_float_eq(estimated, 10.0 * 100.0, 1e-9, "estimated infections");
}

#[test]
fn test_county_json_to_report() {
    let cases = generate_exponential_cumulative(2.0, 1.1, 45);
    let deaths = generate_step_cumulative(3.0, 30, 45);
    let record = CountyRecord::from_reader(county_json(&cases, &deaths).as_bytes()).unwrap();

    let (read_cases, read_deaths) = record.into_series::<f64>().unwrap();
    assert_series_eq(&read_cases, &cases, 1e-12, "cases");
    assert_series_eq(&read_deaths, &deaths, 1e-12, "deaths");

    let config = EstimatorConfig::default();
    let report = ChartReport::build(&read_cases, &read_deaths, &config).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(
        json["active_cases"]["datasets"][0]["label"],
        "Estimated From Fatalities"
    );
    assert_eq!(json["daily_fatalities"]["datasets"][0]["data"][30]["y"], 3.0);
}

// ============================================================================
// Estimator Pipeline
// ============================================================================

#[test]
fn test_constant_death_rate_reaches_steady_state() {
    // One death per day for 90 days: away from the edges the estimate settles
    // at 100 infections per day and 1400 active cases.
    let deaths = generate_linear_cumulative(1.0, 91);
    let config = EstimatorConfig::default().with_edge_crop(EdgeCrop::SmoothingRamp);
    let estimate = fatality_count_to_case_estimate(&differentiate(&deaths), &config).unwrap();

    let middle = estimate.daily.len() / 2;
    assert_float_eq(estimate.daily.range()[middle], 100.0, 1e-9, "daily");

    let active_middle = estimate.active.len() / 2;
    assert_float_eq(estimate.active.range()[active_middle], 1400.0, 1e-9, "active");

    let projected = estimate.project_active_tail(4).unwrap();
    assert_eq!(projected.len(), 9);
}

#[test]
fn test_config_file_overrides() {
    let config: EstimatorConfig =
        serde_json::from_str(r#"{"fatality_rate": 0.005, "delay_days": 21}"#).unwrap();
    assert!(config.validate().is_ok());

    let deaths = generate_step_cumulative(1.0, 25, 40);
    let daily = differentiate(&deaths);
    let default_estimate =
        fatality_count_to_case_estimate(&daily, &EstimatorConfig::default()).unwrap();
    let estimate = fatality_count_to_case_estimate(&daily, &config).unwrap();

    assert_float_eq(estimate.daily.sum(), 2.0 * default_estimate.daily.sum(), 1e-9, "sum");
    let default_start = default_estimate.daily.first_timestamp().unwrap();
    let start = estimate.daily.first_timestamp().unwrap();
    assert_eq!(default_start - start, 2 * DAY_MS);
}
