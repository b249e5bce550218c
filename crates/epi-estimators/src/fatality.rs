//! Infection estimates derived from fatalities.
//!
//! Deaths are the most reliable count available, but they lag infections. The
//! estimator scales daily deaths by the fatality rate, moves them back to the
//! likely infection date, spreads them with a Gaussian delay kernel and then
//! sums a contagious window to get active cases.

use epi_core::{Kernel, Result, SignalFloat, TimeSeries};

use crate::config::EstimatorConfig;
use crate::estimate::CaseEstimate;
use crate::traits::IncidenceEstimator;

/// Estimator that works backwards from daily fatalities.
///
/// # Algorithm
///
/// 1. Divide each daily fatality count by `fatality_rate`.
/// 2. Shift the series `delay_days` earlier.
/// 3. Cross-correlate with a Gaussian of `sigma`, sized by
///    [`epi_core::gaussian_sample_count`].
/// 4. Cross-correlate that with a window of `contagious_duration_days` ones.
///
/// The Gaussian is a forward smoothing of the delay distribution rather than a
/// true deconvolution.
#[derive(Debug, Clone)]
pub struct FatalityEstimator {
    config: EstimatorConfig,
}

impl FatalityEstimator {
    /// Create an estimator, validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`epi_core::SignalError::InvalidArgument`] if the configuration
    /// is invalid.
    pub fn new(config: EstimatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Scale daily fatalities to infections and move them to infection dates.
    ///
    /// This is the series before any kernel is applied.
    #[must_use]
    pub fn shifted_infections<T: SignalFloat>(
        &self,
        daily_fatalities: &TimeSeries<T>,
    ) -> TimeSeries<T> {
        let rate = <T as SignalFloat>::from_f64_lossy(self.config.fatality_rate);
        daily_fatalities
            .map(|count| count / rate)
            .date_shift(-self.config.delay_days)
    }
}

impl<T: SignalFloat> IncidenceEstimator<T> for FatalityEstimator {
    type Output = CaseEstimate<T>;

    fn name(&self) -> &'static str {
        "fatalities"
    }

    fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "epi_estimators::fatality::estimate",
            skip(self, daily),
            fields(samples = daily.len(), delay_days = self.config.delay_days),
        )
    )]
    fn estimate(&self, daily: &TimeSeries<T>) -> Result<CaseEstimate<T>> {
        let sigma = <T as SignalFloat>::from_f64_lossy(self.config.sigma);
        let smoothing = Kernel::gaussian_for_sigma(sigma)?;
        let window = Kernel::window_sum(self.config.contagious_duration_days)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            smoothing_taps = smoothing.len(),
            window_taps = window.len(),
            "built estimator kernels"
        );

        let infections = self.shifted_infections(daily);
        let daily_estimate = infections.cross_correlate(&smoothing);
        let active_estimate = daily_estimate.cross_correlate(&window);

        let estimate = CaseEstimate {
            daily: daily_estimate,
            active: active_estimate,
            smoothing_half_width: smoothing.half_width(),
            window_len: window.len(),
        };
        Ok(estimate.crop(self.config.edge_crop))
    }
}

/// Estimate daily infections and active cases from daily fatalities.
///
/// Convenience wrapper around [`FatalityEstimator`].
///
/// # Errors
///
/// Returns [`epi_core::SignalError::InvalidArgument`] if the configuration is
/// invalid.
pub fn fatality_count_to_case_estimate<T: SignalFloat>(
    daily_fatalities: &TimeSeries<T>,
    config: &EstimatorConfig,
) -> Result<CaseEstimate<T>> {
    FatalityEstimator::new(config.clone())?.estimate(daily_fatalities)
}
