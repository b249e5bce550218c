//! Common test utilities for epi-signal.
//!
//! This module provides float and series comparison plus synthetic outbreak
//! generators for the pipeline tests.

#![allow(dead_code)]

use epi_core::TimeSeries;

/// 2020-03-01 UTC, the first day of every generated series.
pub const MARCH_1: i64 = 1_583_020_800_000;

/// Tiered float comparison with tolerance levels.
///
/// - For values near zero (|expected| < 1e-10): use absolute tolerance
/// - For other values: use relative tolerance
pub fn assert_float_eq(actual: f64, expected: f64, epsilon: f64, context: &str) {
    if expected.is_nan() {
        assert!(
            actual.is_nan(),
            "{}: Expected NaN but got {}",
            context,
            actual
        );
        return;
    }

    if actual.is_nan() {
        panic!("{}: Got NaN but expected {}", context, expected);
    }

    // For values very close to zero, use absolute comparison
    if expected.abs() < 1e-10 {
        let diff = (actual - expected).abs();
        assert!(
            diff < epsilon,
            "{}: Expected {} but got {} (diff: {})",
            context,
            expected,
            actual,
            diff
        );
        return;
    }

    let rel_diff = ((actual - expected) / expected).abs();
    assert!(
        rel_diff < epsilon,
        "{}: Expected {} but got {} (rel diff: {:.2e})",
        context,
        expected,
        actual,
        rel_diff
    );
}

/// Assert two series share a domain and agree on every value within tolerance.
pub fn assert_series_eq(actual: &TimeSeries, expected: &TimeSeries, epsilon: f64, name: &str) {
    assert_eq!(
        actual.domain(),
        expected.domain(),
        "{}: Domain mismatch",
        name
    );

    for (i, (&a, &e)) in actual.range().iter().zip(expected.range()).enumerate() {
        let context = format!("{}[{}]", name, i);
        assert_float_eq(a, e, epsilon, &context);
    }
}

// ============================================================================
// Synthetic Outbreak Generators
// ============================================================================

/// Cumulative counts growing by `daily` every day.
pub fn generate_linear_cumulative(daily: f64, len: usize) -> TimeSeries {
    TimeSeries::daily(MARCH_1, (0..len).map(|i| daily * i as f64).collect())
}

/// Cumulative counts of an outbreak growing by `growth` per day, rounded.
pub fn generate_exponential_cumulative(initial: f64, growth: f64, len: usize) -> TimeSeries {
    let mut total = 0.0;
    let range = (0..len)
        .map(|i| {
            total += (initial * growth.powi(i as i32)).round();
            total
        })
        .collect();
    TimeSeries::daily(MARCH_1, range)
}

/// Cumulative counts with a single jump of `value` on day `day`.
pub fn generate_step_cumulative(value: f64, day: usize, len: usize) -> TimeSeries {
    TimeSeries::daily(
        MARCH_1,
        (0..len).map(|i| if i >= day { value } else { 0.0 }).collect(),
    )
}

/// Render a cumulative `(cases, deaths)` pair as a county JSON object.
pub fn county_json(cases: &TimeSeries, deaths: &TimeSeries) -> String {
    let entries: serde_json::Map<String, serde_json::Value> = cases
        .iter()
        .zip(deaths.range())
        .map(|((timestamp, c), &d)| {
            let date = chrono::DateTime::from_timestamp_millis(timestamp)
                .map(|dt| dt.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            (date, serde_json::json!([c as u64, d as u64]))
        })
        .collect();
    serde_json::Value::Object(entries).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_float_eq_normal() {
        assert_float_eq(1.0, 1.0, 1e-10, "test");
        assert_float_eq(100.0, 100.0000001, 1e-6, "test");
    }

    #[test]
    #[should_panic]
    fn test_assert_float_eq_nan_mismatch() {
        assert_float_eq(1.0, f64::NAN, 1e-10, "test");
    }

    #[test]
    fn test_generate_linear_cumulative() {
        let series = generate_linear_cumulative(2.0, 4);
        assert_eq!(series.range(), &[0.0, 2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_county_json() {
        let cases = TimeSeries::daily(MARCH_1, vec![3.0]);
        let deaths = TimeSeries::daily(MARCH_1, vec![1.0]);
        assert_eq!(county_json(&cases, &deaths), r#"{"2020-03-01":[3,1]}"#);
    }
}
