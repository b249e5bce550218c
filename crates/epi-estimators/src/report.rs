//! Chart-ready report assembled from cumulative case and fatality counts.
//!
//! The report holds only labels and numbers. Rendering belongs to whoever
//! consumes it.

use epi_core::{differentiate, merge_domain_labels, Result, SignalFloat, TimeSeries};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::EstimatorConfig;
use crate::estimate::CaseEstimate;
use crate::fatality::FatalityEstimator;
use crate::testing::TestingEstimator;
use crate::traits::IncidenceEstimator;

/// One `(label, value)` sample.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChartPoint {
    /// `"YYYY-M-D"` date label.
    pub x: String,
    /// Value on that date.
    pub y: f64,
}

/// A named line of points.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dataset {
    /// Legend label.
    pub label: String,
    /// Points in domain order.
    pub data: Vec<ChartPoint>,
}

impl Dataset {
    /// Build a dataset from a series.
    #[must_use]
    pub fn from_series<T: SignalFloat>(label: impl Into<String>, series: &TimeSeries<T>) -> Self {
        Self {
            label: label.into(),
            data: series
                .as_points()
                .map(|(x, y)| ChartPoint {
                    x,
                    y: y.to_f64_lossy(),
                })
                .collect(),
        }
    }
}

/// A titled chart: a shared label axis and the datasets drawn on it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChartPanel {
    /// Chart title.
    pub title: String,
    /// Sorted, de-duplicated x-axis labels covering every dataset.
    pub labels: Vec<String>,
    /// Lines on this chart.
    pub datasets: Vec<Dataset>,
}

/// The three panels derived from one region's counts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChartReport {
    /// Active contagious cases, estimated from fatalities and from testing.
    pub active_cases: ChartPanel,
    /// Daily confirmed fatalities.
    pub daily_fatalities: ChartPanel,
    /// Daily new infections, estimated from fatalities and confirmed by testing.
    pub daily_cases: ChartPanel,
}

impl ChartReport {
    /// Differentiate both cumulative inputs, run both estimators and lay the
    /// results out as panels.
    ///
    /// # Errors
    ///
    /// Returns [`epi_core::SignalError::InvalidArgument`] if the configuration
    /// is invalid.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "epi_estimators::report::build",
            skip_all,
            fields(cases = cases.len(), fatalities = fatalities.len()),
        )
    )]
    pub fn build<T: SignalFloat>(
        cases: &TimeSeries<T>,
        fatalities: &TimeSeries<T>,
        config: &EstimatorConfig,
    ) -> Result<Self> {
        let daily_fatalities = differentiate(fatalities);
        let daily_cases = differentiate(cases);

        let estimate: CaseEstimate<T> =
            FatalityEstimator::new(config.clone())?.estimate(&daily_fatalities)?;
        let measured = TestingEstimator::new(config.clone())?.estimate(&daily_cases)?;

        let active_cases = ChartPanel {
            title: "Active Contagious Cases Estimate".to_string(),
            labels: merge_domain_labels([&estimate.active, &measured]),
            datasets: vec![
                Dataset::from_series("Estimated From Fatalities", &estimate.active),
                Dataset::from_series("Estimated From Testing", &measured),
            ],
        };

        let daily_fatalities_panel = ChartPanel {
            title: "Daily Fatalities".to_string(),
            labels: daily_fatalities.domain_as_strings().collect(),
            datasets: vec![Dataset::from_series("Confirmed Fatalities", &daily_fatalities)],
        };

        let daily_cases_panel = ChartPanel {
            title: "Daily New Infections".to_string(),
            labels: merge_domain_labels([&daily_cases, &estimate.daily]),
            datasets: vec![
                Dataset::from_series("Estimated From Fatality Rate", &estimate.daily),
                Dataset::from_series("Confirmed New Cases (By Testing)", &daily_cases),
            ],
        };

        Ok(Self {
            active_cases,
            daily_fatalities: daily_fatalities_panel,
            daily_cases: daily_cases_panel,
        })
    }
}
