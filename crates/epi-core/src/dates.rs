//! Day-aligned timestamp helpers.
//!
//! Domains are integer milliseconds since the Unix epoch. Labels use UTC
//! calendar fields without zero padding (`"2020-3-7"`), which is the form used
//! as categorical chart labels.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime};

/// Milliseconds in one day.
pub const DAY_MS: i64 = 86_400_000;

/// Format a timestamp as a `"YYYY-M-D"` UTC label.
///
/// Timestamps outside chrono's representable range fall back to their raw
/// millisecond value.
///
/// # Example
///
/// ```rust
/// use epi_core::dates::timestamp_to_label;
///
/// assert_eq!(timestamp_to_label(1_583_020_800_000), "2020-3-1");
/// ```
#[must_use]
pub fn timestamp_to_label(timestamp: i64) -> String {
    match DateTime::from_timestamp_millis(timestamp) {
        Some(dt) => format!("{}-{}-{}", dt.year(), dt.month(), dt.day()),
        None => timestamp.to_string(),
    }
}

/// Timestamp of UTC midnight on the given calendar date.
#[must_use]
pub fn date_to_timestamp(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

/// Shift a timestamp by a whole number of days.
///
/// Saturates at the `i64` bounds instead of overflowing.
#[inline]
#[must_use]
pub fn shift_days(timestamp: i64, days: i64) -> i64 {
    timestamp.saturating_add(days.saturating_mul(DAY_MS))
}

/// Lazy iterator of `"YYYY-M-D"` labels over a borrowed domain.
///
/// The iterator is `Clone`, so a consumer can restart it from the beginning
/// without recomputing the domain.
#[derive(Debug, Clone)]
pub struct DomainLabels<'a> {
    inner: core::slice::Iter<'a, i64>,
}

impl<'a> DomainLabels<'a> {
    /// Create a label iterator over a domain slice.
    #[must_use]
    pub fn new(domain: &'a [i64]) -> Self {
        Self {
            inner: domain.iter(),
        }
    }
}

impl Iterator for DomainLabels<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|&ts| timestamp_to_label(ts))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for DomainLabels<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|&ts| timestamp_to_label(ts))
    }
}

impl ExactSizeIterator for DomainLabels<'_> {}

impl core::iter::FusedIterator for DomainLabels<'_> {}
