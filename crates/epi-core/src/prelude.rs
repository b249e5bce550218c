//! Prelude module for convenient imports.
//!
//! ```rust
//! use epi_core::prelude::*;
//!
//! let series: TimeSeries = TimeSeries::daily(0, vec![1.0, 2.0]);
//! let window = Kernel::window_sum(14).unwrap();
//! assert_eq!(series.cross_correlate(&window).len(), 15);
//! ```

// Core types
pub use crate::dates::{timestamp_to_label, DomainLabels, DAY_MS};
pub use crate::kernel::{gaussian_sample_count, Kernel, KernelKind};
pub use crate::num::SignalFloat;
pub use crate::series::TimeSeries;
pub use crate::slice::SliceSpec;

// Error types
pub use crate::error::{Result, SignalError};

// Transforms
pub use crate::utils::{accumulate, differentiate, merge_domain_labels, merge_domains};
