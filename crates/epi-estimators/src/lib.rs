//! # epi-estimators
//!
//! Case estimators built on [`epi_core`] signals.
//!
//! - [`FatalityEstimator`]: daily fatalities to estimated daily infections and
//!   active contagious cases
//! - [`TestingEstimator`]: confirmed daily cases taken at face value
//! - [`ChartReport`]: both estimates laid out as chart panels
//!
//! # Example
//!
//! ```rust
//! use epi_core::prelude::*;
//! use epi_estimators::prelude::*;
//!
//! let cumulative_fatalities: TimeSeries<f64> = TimeSeries::daily(0, vec![0.0, 0.0, 10.0]);
//! let daily = differentiate(&cumulative_fatalities);
//!
//! let estimate = fatality_count_to_case_estimate(&daily, &EstimatorConfig::default()).unwrap();
//! assert_eq!(estimate.daily.len(), 3 + 27 - 1);
//! assert!((estimate.daily.sum() - 1000.0).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod config;
mod estimate;
mod fatality;
mod report;
mod testing;
mod traits;

pub mod prelude;

pub use config::{
    EdgeCrop, EstimatorConfig, DEFAULT_CONTAGIOUS_DURATION_DAYS, DEFAULT_DELAY_DAYS,
    DEFAULT_FATALITY_RATE, DEFAULT_SIGMA, MAX_CONTAGIOUS_DURATION_DAYS, MAX_DELAY_DAYS, MAX_SIGMA,
};
pub use estimate::CaseEstimate;
pub use fatality::{fatality_count_to_case_estimate, FatalityEstimator};
pub use report::{ChartPanel, ChartPoint, ChartReport, Dataset};
pub use testing::{case_count_to_case_estimate, TestingEstimator};
pub use traits::IncidenceEstimator;
