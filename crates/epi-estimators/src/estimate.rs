//! Output of the fatality-based estimator.

use epi_core::{Result, SignalError, SignalFloat, TimeSeries};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::EdgeCrop;

/// Daily infection and active-case estimates.
///
/// Both series start `smoothing_half_width` days before the shifted fatality
/// data and end as many days after it (the active series carries an extra half
/// window on each side). Those edge samples are ramp artifacts of the
/// correlation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: SignalFloat"))]
pub struct CaseEstimate<T: SignalFloat = f64> {
    /// Estimated new infections per day, indexed by infection date.
    pub daily: TimeSeries<T>,
    /// Estimated people still contagious on each day.
    pub active: TimeSeries<T>,
    /// `floor(K / 2)` for the Gaussian kernel that produced `daily`.
    pub smoothing_half_width: usize,
    /// Length of the contagious window used for `active`.
    pub window_len: usize,
}

impl<T: SignalFloat> CaseEstimate<T> {
    /// Number of ramp samples at each end of the daily estimate.
    #[must_use]
    pub fn edge_ramp_days(&self) -> usize {
        self.smoothing_half_width
    }

    /// Daily estimate without the smoothing ramps.
    #[must_use]
    pub fn trusted_daily(&self) -> TimeSeries<T> {
        self.daily.trim_edges(self.edge_ramp_days())
    }

    /// Active estimate without the smoothing ramps.
    #[must_use]
    pub fn trusted_active(&self) -> TimeSeries<T> {
        self.active.trim_edges(self.edge_ramp_days())
    }

    /// Crop both series according to `crop`.
    #[must_use]
    pub fn crop(&self, crop: EdgeCrop) -> Self {
        let days = match crop {
            EdgeCrop::None => return self.clone(),
            EdgeCrop::SmoothingRamp => self.edge_ramp_days(),
            EdgeCrop::Days(days) => days,
        };
        Self {
            daily: self.daily.trim_edges(days),
            active: self.active.trim_edges(days),
            smoothing_half_width: self.smoothing_half_width,
            window_len: self.window_len,
        }
    }

    /// Re-scale the tail of the active estimate whose window reaches past the
    /// end of the data.
    ///
    /// The sample `k` days from the end has only seen `k` of its
    /// `window_len` days, so it is divided by `k / window_len`. Samples with
    /// `margin < k < window_len` are returned; the last `margin` days are
    /// dropped as too uncertain to extrapolate.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::InvalidArgument`] if `margin + 1 >= window_len`,
    /// which would leave nothing to project.
    pub fn project_active_tail(&self, margin: usize) -> Result<TimeSeries<T>> {
        if margin >= self.window_len.saturating_sub(1) {
            return Err(SignalError::invalid_argument(
                "margin",
                margin,
                "margin smaller than the contagious window minus one",
            ));
        }

        let len = self.active.len();
        let start = len.saturating_sub(self.window_len - 1);
        let tail = self.active.trim(start, margin.min(len - start));
        let window = <T as SignalFloat>::from_usize(self.window_len);

        let projected = tail
            .range()
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let seen = <T as SignalFloat>::from_usize(len - (start + i));
                value / (seen / window)
            })
            .collect();
        tail.with_range(projected)
    }
}
