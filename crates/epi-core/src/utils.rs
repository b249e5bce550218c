//! Differencing, accumulation and domain alignment.

use std::collections::BTreeSet;

use crate::dates::timestamp_to_label;
use crate::num::SignalFloat;
use crate::series::TimeSeries;

/// Convert a cumulative series into daily increments.
///
/// `y[0] = x[0]` (an implicit zero precedes the series) and
/// `y[i] = x[i] - x[i-1]`, rounded to the nearest integer. The domain is kept
/// as is: differencing does not shift dates.
///
/// # Example
///
/// ```rust
/// use epi_core::{differentiate, TimeSeries};
///
/// let cumulative = TimeSeries::daily(0, vec![0.0, 0.0, 10.0, 12.0]);
/// let daily = differentiate(&cumulative);
/// assert_eq!(daily.range(), &[0.0, 0.0, 10.0, 2.0]);
/// assert_eq!(daily.domain(), cumulative.domain());
/// ```
#[must_use]
pub fn differentiate<T: SignalFloat>(series: &TimeSeries<T>) -> TimeSeries<T> {
    let mut prev = T::ZERO;
    series.map(|x| {
        let delta = (x - prev).round();
        prev = x;
        delta
    })
}

/// Running total of a series; the inverse of [`differentiate`] for integral data.
#[must_use]
pub fn accumulate<T: SignalFloat>(series: &TimeSeries<T>) -> TimeSeries<T> {
    let mut total = T::ZERO;
    series.map(|x| {
        total = total + x;
        total
    })
}

/// Sorted, de-duplicated union of the domains of every series.
///
/// No resampling happens; the result is only an axis of timestamps.
///
/// # Example
///
/// ```rust
/// use epi_core::{merge_domains, TimeSeries};
///
/// let a = TimeSeries::new(vec![3, 1], vec![0.0, 0.0]).unwrap();
/// let b = TimeSeries::new(vec![2, 3], vec![0.0, 0.0]).unwrap();
/// assert_eq!(merge_domains([&a, &b]), vec![1, 2, 3]);
/// ```
#[must_use]
pub fn merge_domains<'a, T, I>(series: I) -> Vec<i64>
where
    T: SignalFloat,
    I: IntoIterator<Item = &'a TimeSeries<T>>,
{
    let merged: BTreeSet<i64> = series
        .into_iter()
        .flat_map(|s| s.domain().iter().copied())
        .collect();
    merged.into_iter().collect()
}

/// [`merge_domains`] rendered as `"YYYY-M-D"` labels.
#[must_use]
pub fn merge_domain_labels<'a, T, I>(series: I) -> Vec<String>
where
    T: SignalFloat,
    I: IntoIterator<Item = &'a TimeSeries<T>>,
{
    merge_domains(series)
        .into_iter()
        .map(timestamp_to_label)
        .collect()
}
