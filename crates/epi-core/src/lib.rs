//! # epi-core
//!
//! Core types for turning cumulative epidemiological counts into daily and
//! windowed signals.
//!
//! - [`TimeSeries`] - Day-aligned timestamps paired with values
//! - [`SliceSpec`] - `start:stop:step` slicing with negative indices
//! - [`Kernel`] and [`KernelKind`] - Gaussian smoothing and window-sum kernels
//! - [`differentiate`] / [`accumulate`] - Cumulative to daily and back
//! - [`merge_domains`] - Common label axis for series with different extents
//! - [`SignalError`] - Length and argument validation errors
//!
//! ## Feature Flags
//!
//! - `serde` (default) - Enable serialization/deserialization support
//! - `tracing` - Emit `tracing` events from transforms
//!
//! ## Example
//!
//! ```rust
//! use epi_core::prelude::*;
//!
//! let cumulative = TimeSeries::daily(0, vec![0.0, 0.0, 10.0]);
//! let daily = differentiate(&cumulative);
//!
//! let kernel = Kernel::gaussian(1.0, 5).unwrap();
//! let smoothed = daily.cross_correlate(&kernel);
//! assert_eq!(smoothed.len(), daily.len() + kernel.len() - 1);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod correlate;
pub mod dates;
pub mod error;
pub mod kernel;
pub mod num;
pub mod prelude;
pub mod series;
pub mod slice;
pub mod utils;

// Re-export core types at crate root
pub use dates::{DomainLabels, DAY_MS};
pub use error::{Result, SignalError};
pub use kernel::{gaussian_sample_count, Kernel, KernelKind, MAX_KERNEL_TAPS};
pub use num::SignalFloat;
pub use series::TimeSeries;
pub use slice::SliceSpec;
pub use utils::{accumulate, differentiate, merge_domain_labels, merge_domains};
