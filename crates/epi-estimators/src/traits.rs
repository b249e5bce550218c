//! Estimator trait.

use epi_core::{Result, SignalFloat, TimeSeries};

use crate::config::EstimatorConfig;

/// Something that turns a daily count series into an incidence estimate.
///
/// Implementations hold their configuration; nothing is shared between calls.
///
/// # Example
///
/// ```rust
/// use epi_core::TimeSeries;
/// use epi_estimators::{EstimatorConfig, FatalityEstimator, IncidenceEstimator};
///
/// let estimator = FatalityEstimator::new(EstimatorConfig::default()).unwrap();
/// let daily_fatalities = TimeSeries::daily(0, vec![0.0, 0.0, 10.0]);
/// let estimate = estimator.estimate(&daily_fatalities).unwrap();
/// assert_eq!(IncidenceEstimator::<f64>::name(&estimator), "fatalities");
/// assert!(!estimate.active.is_empty());
/// ```
pub trait IncidenceEstimator<T: SignalFloat>: Send + Sync {
    /// What a call to [`IncidenceEstimator::estimate`] produces.
    type Output;

    /// Short identifier of the data source.
    fn name(&self) -> &'static str;

    /// The configuration in use.
    fn config(&self) -> &EstimatorConfig;

    /// Estimate incidence from a daily (already differentiated) series.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or input is invalid.
    fn estimate(&self, daily: &TimeSeries<T>) -> Result<Self::Output>;
}
