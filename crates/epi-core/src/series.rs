//! Time series container.
//!
//! A [`TimeSeries`] pairs an ordered domain of day-aligned timestamps with a
//! parallel range of values. Transforms never mutate an existing series; they
//! return a new one.

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dates::{self, DomainLabels};
use crate::error::{Result, SignalError};
use crate::num::SignalFloat;
use crate::slice::SliceSpec;

/// A domain of timestamps (milliseconds since the Unix epoch) and a parallel
/// range of values.
///
/// The domain is assumed non-decreasing. Operations that reason about calendar
/// days (cross-correlation, date shifting) further assume one-day spacing and do
/// not check it.
///
/// The range is reference counted, so [`TimeSeries::date_shift`] and `clone`
/// share values instead of copying them.
///
/// # Example
///
/// ```rust
/// use epi_core::{TimeSeries, dates::DAY_MS};
///
/// let series = TimeSeries::new(vec![0, DAY_MS, 2 * DAY_MS], vec![1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(series.len(), 3);
///
/// let earlier = series.date_shift(-19);
/// assert_eq!(earlier.domain()[0], -19 * DAY_MS);
/// assert_eq!(earlier.range(), series.range());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound = "T: SignalFloat", try_from = "RawTimeSeries<T>")
)]
pub struct TimeSeries<T: SignalFloat = f64> {
    domain: Vec<i64>,
    range: Arc<[T]>,
}

/// Unvalidated wire form, checked on deserialization.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(bound = "T: SignalFloat")]
struct RawTimeSeries<T: SignalFloat> {
    domain: Vec<i64>,
    range: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T: SignalFloat> TryFrom<RawTimeSeries<T>> for TimeSeries<T> {
    type Error = SignalError;

    fn try_from(raw: RawTimeSeries<T>) -> Result<Self> {
        Self::new(raw.domain, raw.range)
    }
}

impl<T: SignalFloat> Default for TimeSeries<T> {
    fn default() -> Self {
        Self {
            domain: Vec::new(),
            range: Arc::from(Vec::new()),
        }
    }
}

impl<T: SignalFloat> TimeSeries<T> {
    /// Create a series from parallel domain and range vectors.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::LengthMismatch`] if the lengths differ.
    pub fn new(domain: Vec<i64>, range: Vec<T>) -> Result<Self> {
        SignalError::check_length(domain.len(), range.len())?;
        Ok(Self {
            domain,
            range: Arc::from(range),
        })
    }

    /// Create a series of consecutive days starting at `start`.
    #[must_use]
    pub fn daily(start: i64, range: Vec<T>) -> Self {
        let domain = (0..range.len() as i64)
            .map(|i| dates::shift_days(start, i))
            .collect();
        Self {
            domain,
            range: Arc::from(range),
        }
    }

    /// Create an empty series.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    /// Returns `true` if the series has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    /// The timestamps.
    #[must_use]
    pub fn domain(&self) -> &[i64] {
        &self.domain
    }

    /// The values.
    #[must_use]
    pub fn range(&self) -> &[T] {
        &self.range
    }

    /// First timestamp, if any.
    #[must_use]
    pub fn first_timestamp(&self) -> Option<i64> {
        self.domain.first().copied()
    }

    /// Last timestamp, if any.
    #[must_use]
    pub fn last_timestamp(&self) -> Option<i64> {
        self.domain.last().copied()
    }

    /// Value recorded at `timestamp`, if present.
    #[must_use]
    pub fn value_at(&self, timestamp: i64) -> Option<T> {
        self.domain
            .iter()
            .position(|&ts| ts == timestamp)
            .map(|i| self.range[i])
    }

    /// Iterate over `(timestamp, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (i64, T)> + '_ {
        self.domain.iter().copied().zip(self.range.iter().copied())
    }

    /// Return a series with domain and range sliced identically.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::InvalidArgument`] if the slice step is zero.
    pub fn slice(&self, spec: impl Into<SliceSpec>) -> Result<Self> {
        let indices = spec.into().indices(self.len())?;
        let domain = indices.iter().map(|&i| self.domain[i]).collect();
        let range: Vec<T> = indices.iter().map(|&i| self.range[i]).collect();
        Ok(Self {
            domain,
            range: Arc::from(range),
        })
    }

    /// Drop `days` samples from each end.
    ///
    /// Series shorter than `2 * days` become empty.
    #[must_use]
    pub fn trim_edges(&self, days: usize) -> Self {
        self.trim(days, days)
    }

    /// Drop `front` samples from the start and `back` samples from the end.
    #[must_use]
    pub fn trim(&self, front: usize, back: usize) -> Self {
        let end = self.len().saturating_sub(back);
        if front >= end {
            return Self::empty();
        }
        if front == 0 && end == self.len() {
            return self.clone();
        }
        Self {
            domain: self.domain[front..end].to_vec(),
            range: Arc::from(&self.range[front..end]),
        }
    }

    /// Replace the range, keeping the domain.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::LengthMismatch`] if `values` does not match the
    /// domain length.
    pub fn set_range(&mut self, values: Vec<T>) -> Result<()> {
        SignalError::check_length(self.domain.len(), values.len())?;
        self.range = Arc::from(values);
        Ok(())
    }

    /// Return a copy with a different range.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::LengthMismatch`] if `values` does not match the
    /// domain length.
    pub fn with_range(&self, values: Vec<T>) -> Result<Self> {
        let mut out = Self {
            domain: self.domain.clone(),
            range: Arc::clone(&self.range),
        };
        out.set_range(values)?;
        Ok(out)
    }

    /// Shift every timestamp by `days` (positive is later). The range is shared.
    #[must_use]
    pub fn date_shift(&self, days: i64) -> Self {
        Self {
            domain: self
                .domain
                .iter()
                .map(|&ts| dates::shift_days(ts, days))
                .collect(),
            range: Arc::clone(&self.range),
        }
    }

    /// Apply a function to each value, in domain order.
    #[must_use]
    pub fn map<F>(&self, mut f: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        let range: Vec<T> = self.range.iter().map(|&x| f(x)).collect();
        Self {
            domain: self.domain.clone(),
            range: Arc::from(range),
        }
    }

    /// Multiply every value by `factor`.
    #[must_use]
    pub fn scale(&self, factor: T) -> Self {
        self.map(|x| x * factor)
    }

    /// Sum of all values.
    #[must_use]
    pub fn sum(&self) -> T {
        self.range.iter().fold(T::ZERO, |acc, &x| acc + x)
    }

    /// Lazy `"YYYY-M-D"` labels for the domain.
    #[must_use]
    pub fn domain_as_strings(&self) -> DomainLabels<'_> {
        DomainLabels::new(&self.domain)
    }

    /// `(label, value)` pairs for external plotting.
    pub fn as_points(&self) -> impl Iterator<Item = (String, T)> + Clone + '_ {
        self.domain_as_strings().zip(self.range.iter().copied())
    }
}
