//! Incidence as reported by testing.

use epi_core::{Result, SignalFloat, TimeSeries};

use crate::config::EstimatorConfig;
use crate::traits::IncidenceEstimator;

/// Takes confirmed daily cases at face value.
///
/// No delay or kernel is applied; the output is the daily case series itself,
/// used as a comparison line next to [`crate::FatalityEstimator`].
#[derive(Debug, Clone, Default)]
pub struct TestingEstimator {
    config: EstimatorConfig,
}

impl TestingEstimator {
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
}

impl<T: SignalFloat> IncidenceEstimator<T> for TestingEstimator {
    type Output = TimeSeries<T>;

    fn name(&self) -> &'static str {
        "testing"
    }

    fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    fn estimate(&self, daily: &TimeSeries<T>) -> Result<TimeSeries<T>> {
        Ok(daily.clone())
    }
}

/// Daily confirmed cases as an incidence estimate.
///
/// # Errors
///
/// Returns [`epi_core::SignalError::InvalidArgument`] if the configuration is
/// invalid.
pub fn case_count_to_case_estimate<T: SignalFloat>(
    daily_cases: &TimeSeries<T>,
    config: &EstimatorConfig,
) -> Result<TimeSeries<T>> {
    TestingEstimator::new(config.clone())?.estimate(daily_cases)
}
