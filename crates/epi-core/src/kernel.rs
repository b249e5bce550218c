//! Correlation kernels.
//!
//! A [`Kernel`] carries its taps together with a [`KernelKind`] tag, so the
//! normalization convention travels with the kernel instead of living at each
//! call site.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SignalError};
use crate::num::SignalFloat;

/// Multiplier applied to sigma when sizing a Gaussian kernel.
pub const GAUSSIAN_WIDTH_FACTOR: f64 = 5.25;

/// Largest number of taps any kernel may have.
pub const MAX_KERNEL_TAPS: usize = 1 << 16;

/// What a kernel does to the signal it is correlated with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KernelKind {
    /// Weighted average; taps sum to 1.
    Smoothing,
    /// Rolling sum over a window; every tap is 1, so taps sum to the length.
    WindowSum,
}

/// A finite sequence of correlation weights.
///
/// # Example
///
/// ```rust
/// use epi_core::{Kernel, KernelKind};
///
/// let gaussian = Kernel::<f64>::gaussian(5.25, 27).unwrap();
/// assert_eq!(gaussian.kind(), KernelKind::Smoothing);
/// assert!((gaussian.sum() - 1.0).abs() < 1e-12);
///
/// let window = Kernel::<f64>::window_sum(14).unwrap();
/// assert_eq!(window.sum(), 14.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound = "T: SignalFloat", try_from = "RawKernel<T>")
)]
pub struct Kernel<T: SignalFloat = f64> {
    kind: KernelKind,
    taps: Vec<T>,
}

/// Unvalidated wire form, checked on deserialization.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(bound = "T: SignalFloat")]
struct RawKernel<T: SignalFloat> {
    kind: KernelKind,
    taps: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T: SignalFloat> TryFrom<RawKernel<T>> for Kernel<T> {
    type Error = SignalError;

    fn try_from(raw: RawKernel<T>) -> Result<Self> {
        Self::from_taps(raw.kind, raw.taps)
    }
}

impl<T: SignalFloat> Kernel<T> {
    /// Normalized Gaussian of odd length `size`.
    ///
    /// With `h = size / 2`, tap `k` is `exp(-(k - h)^2 / (2 sigma^2))` divided
    /// by the sum of all taps.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::InvalidArgument`] if `size` is even or above
    /// [`MAX_KERNEL_TAPS`], or if `sigma` is not a finite positive number.
    pub fn gaussian(sigma: T, size: usize) -> Result<Self> {
        validate_sigma(sigma)?;
        validate_size(KernelKind::Smoothing, size)?;

        let half = (size / 2) as isize;
        let denom = T::TWO * sigma * sigma;
        let mut taps: Vec<T> = (0..size as isize)
            .map(|k| {
                let offset = <T as SignalFloat>::from_f64_lossy((k - half) as f64);
                (-(offset * offset) / denom).exp()
            })
            .collect();

        let total = taps.iter().fold(T::ZERO, |acc, &x| acc + x);
        for tap in &mut taps {
            *tap = *tap / total;
        }

        Ok(Self {
            kind: KernelKind::Smoothing,
            taps,
        })
    }

    /// Normalized Gaussian sized from sigma alone.
    ///
    /// See [`gaussian_sample_count`] for the size rule.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::InvalidArgument`] if `sigma` is not a finite
    /// positive number or needs more than [`MAX_KERNEL_TAPS`] taps.
    pub fn gaussian_for_sigma(sigma: T) -> Result<Self> {
        let size = gaussian_sample_count(sigma)?;
        Self::gaussian(sigma, size)
    }

    /// Unnormalized window of `len` ones.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::InvalidArgument`] if `len` is zero or above
    /// [`MAX_KERNEL_TAPS`].
    pub fn window_sum(len: usize) -> Result<Self> {
        if len == 0 || len > MAX_KERNEL_TAPS {
            return Err(SignalError::invalid_argument(
                "len",
                len,
                "window length in 1..=65536",
            ));
        }
        Ok(Self {
            kind: KernelKind::WindowSum,
            taps: vec![T::ONE; len],
        })
    }

    /// The unit impulse `[1]`.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            kind: KernelKind::Smoothing,
            taps: vec![T::ONE],
        }
    }

    /// Build a kernel from explicit taps.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::InvalidArgument`] if `taps` is empty, longer
    /// than [`MAX_KERNEL_TAPS`], or of even length for a smoothing kernel.
    pub fn from_taps(kind: KernelKind, taps: Vec<T>) -> Result<Self> {
        if taps.is_empty() {
            return Err(SignalError::invalid_argument(
                "taps",
                0,
                "at least one tap",
            ));
        }
        validate_size(kind, taps.len())?;
        Ok(Self { kind, taps })
    }

    /// The kernel's tag.
    #[must_use]
    pub fn kind(&self) -> KernelKind {
        self.kind
    }

    /// The weights.
    #[must_use]
    pub fn taps(&self) -> &[T] {
        &self.taps
    }

    /// Number of taps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.taps.len()
    }

    /// Always `false`; constructors reject empty kernels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }

    /// `floor(len / 2)`, the length of the ramp on each side of a full correlation.
    #[must_use]
    pub fn half_width(&self) -> usize {
        self.taps.len() / 2
    }

    /// Sum of the taps.
    #[must_use]
    pub fn sum(&self) -> T {
        self.taps.iter().fold(T::ZERO, |acc, &x| acc + x)
    }
}

/// Gaussian kernel length for `sigma`: `floor(5.25 * sigma)`, bumped to the
/// next odd integer when even.
///
/// # Errors
///
/// Returns [`SignalError::InvalidArgument`] if `sigma` is not a finite positive
/// number, or if the length would exceed [`MAX_KERNEL_TAPS`].
pub fn gaussian_sample_count<T: SignalFloat>(sigma: T) -> Result<usize> {
    validate_sigma(sigma)?;
    let width = (GAUSSIAN_WIDTH_FACTOR * sigma.to_f64_lossy()).floor();
    if width >= MAX_KERNEL_TAPS as f64 {
        return Err(SignalError::invalid_argument(
            "sigma",
            sigma.to_f64_lossy(),
            "sigma small enough for a kernel of at most 65536 taps",
        ));
    }
    let base = width as usize;
    Ok(if base % 2 == 0 { base + 1 } else { base })
}

fn validate_size(kind: KernelKind, size: usize) -> Result<()> {
    if size > MAX_KERNEL_TAPS {
        return Err(SignalError::invalid_argument(
            "size",
            size,
            "kernel size of at most 65536 taps",
        ));
    }
    if kind == KernelKind::Smoothing && size % 2 == 0 {
        return Err(SignalError::invalid_argument(
            "size",
            size,
            "odd kernel size",
        ));
    }
    Ok(())
}

fn validate_sigma<T: SignalFloat>(sigma: T) -> Result<()> {
    if sigma.is_valid() && sigma > T::ZERO {
        Ok(())
    } else {
        Err(SignalError::invalid_argument(
            "sigma",
            sigma.to_f64_lossy(),
            "finite positive standard deviation",
        ))
    }
}
