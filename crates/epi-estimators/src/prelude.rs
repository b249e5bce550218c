//! Prelude for epi-estimators.
//!
//! This module re-exports all commonly used types and traits.

pub use crate::config::{EdgeCrop, EstimatorConfig};
pub use crate::estimate::CaseEstimate;
pub use crate::fatality::{fatality_count_to_case_estimate, FatalityEstimator};
pub use crate::report::{ChartPanel, ChartPoint, ChartReport, Dataset};
pub use crate::testing::{case_count_to_case_estimate, TestingEstimator};

// Re-export the estimator trait
pub use crate::traits::IncidenceEstimator;
