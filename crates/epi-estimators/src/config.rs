//! Estimator configuration.

use epi_core::{Result, SignalError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default fraction of infections that end in a fatality.
pub const DEFAULT_FATALITY_RATE: f64 = 0.01;
/// Default spread of the infection-to-death delay, in days.
pub const DEFAULT_SIGMA: f64 = 5.25;
/// Default mean infection-to-death delay, in days.
pub const DEFAULT_DELAY_DAYS: i64 = 19;
/// Default length of the contagious window, in days.
pub const DEFAULT_CONTAGIOUS_DURATION_DAYS: usize = 14;

/// Largest accepted `|delay_days|`.
pub const MAX_DELAY_DAYS: i64 = 3650;
/// Largest accepted delay spread, in days.
pub const MAX_SIGMA: f64 = 365.0;
/// Largest accepted contagious window, in days.
pub const MAX_CONTAGIOUS_DURATION_DAYS: usize = 365;

/// Which edge samples to drop from estimator output.
///
/// Full cross-correlation leaves ramps where the kernel only partly overlaps
/// the data. Keeping them is the default; cropping is opt-in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EdgeCrop {
    /// Keep every sample, ramps included.
    #[default]
    None,
    /// Drop `floor(K / 2)` samples from each end, `K` being the Gaussian kernel length.
    SmoothingRamp,
    /// Drop a fixed number of samples from each end.
    Days(usize),
}

/// Parameters for the case estimators.
///
/// Every field can be overridden independently; missing fields fall back to
/// their defaults when deserializing.
///
/// # Example
///
/// ```rust
/// use epi_estimators::EstimatorConfig;
///
/// let config = EstimatorConfig::default().with_fatality_rate(0.005);
/// assert_eq!(config.delay_days, 19);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EstimatorConfig {
    /// Fraction of infections that become fatal, in `(0, 1]`.
    pub fatality_rate: f64,
    /// Standard deviation of the delay distribution, in days.
    pub sigma: f64,
    /// Mean delay between infection and death, in days.
    pub delay_days: i64,
    /// Mean length of the contagious period, in days.
    pub contagious_duration_days: usize,
    /// Edge cropping applied to the estimates.
    pub edge_crop: EdgeCrop,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            fatality_rate: DEFAULT_FATALITY_RATE,
            sigma: DEFAULT_SIGMA,
            delay_days: DEFAULT_DELAY_DAYS,
            contagious_duration_days: DEFAULT_CONTAGIOUS_DURATION_DAYS,
            edge_crop: EdgeCrop::None,
        }
    }
}

impl EstimatorConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fatality rate.
    #[must_use]
    pub fn with_fatality_rate(mut self, fatality_rate: f64) -> Self {
        self.fatality_rate = fatality_rate;
        self
    }

    /// Set the delay spread.
    #[must_use]
    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    /// Set the mean infection-to-death delay.
    #[must_use]
    pub fn with_delay_days(mut self, delay_days: i64) -> Self {
        self.delay_days = delay_days;
        self
    }

    /// Set the contagious window length.
    #[must_use]
    pub fn with_contagious_duration_days(mut self, days: usize) -> Self {
        self.contagious_duration_days = days;
        self
    }

    /// Set edge cropping.
    #[must_use]
    pub fn with_edge_crop(mut self, edge_crop: EdgeCrop) -> Self {
        self.edge_crop = edge_crop;
        self
    }

    /// Check every parameter.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::InvalidArgument`] for a fatality rate outside
    /// `(0, 1]`, a sigma outside `(0, MAX_SIGMA]`, a delay longer than
    /// [`MAX_DELAY_DAYS`] in either direction, or a contagious window outside
    /// `1..=MAX_CONTAGIOUS_DURATION_DAYS`.
    pub fn validate(&self) -> Result<()> {
        let rate = self.fatality_rate;
        if !(rate.is_finite() && rate > 0.0 && rate <= 1.0) {
            return Err(SignalError::invalid_argument(
                "fatality_rate",
                rate,
                "fraction in (0, 1]",
            ));
        }
        if !(self.sigma.is_finite() && self.sigma > 0.0 && self.sigma <= MAX_SIGMA) {
            return Err(SignalError::invalid_argument(
                "sigma",
                self.sigma,
                "standard deviation in (0, 365] days",
            ));
        }
        if self.delay_days.unsigned_abs() > MAX_DELAY_DAYS.unsigned_abs() {
            return Err(SignalError::invalid_argument(
                "delay_days",
                self.delay_days,
                "delay of at most 3650 days either way",
            ));
        }
        if self.contagious_duration_days == 0
            || self.contagious_duration_days > MAX_CONTAGIOUS_DURATION_DAYS
        {
            return Err(SignalError::invalid_argument(
                "contagious_duration_days",
                self.contagious_duration_days,
                "window of 1 to 365 days",
            ));
        }
        Ok(())
    }
}
