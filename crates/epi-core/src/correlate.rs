//! Full cross-correlation of a series with a kernel.

use crate::dates;
use crate::kernel::Kernel;
use crate::num::SignalFloat;
use crate::series::TimeSeries;

/// Zero-padded full cross-correlation of `values` with `taps`.
///
/// Output length is `taps.len() + values.len() - 1`, with
/// `out[i + j] += taps[K - 1 - i] * values[j]`. Either input being empty gives
/// an empty output.
///
/// # Example
///
/// ```rust
/// use epi_core::correlate::correlate_full;
///
/// let out = correlate_full(&[1.0, 1.0], &[1.0, 2.0, 3.0]);
/// assert_eq!(out, vec![1.0, 3.0, 5.0, 3.0]);
/// ```
#[must_use]
pub fn correlate_full<T: SignalFloat>(taps: &[T], values: &[T]) -> Vec<T> {
    if taps.is_empty() || values.is_empty() {
        return Vec::new();
    }

    let k = taps.len();
    let mut out = vec![T::ZERO; k + values.len() - 1];
    for i in 0..k {
        let weight = taps[k - 1 - i];
        for (j, &x) in values.iter().enumerate() {
            out[i + j] = out[i + j] + weight * x;
        }
    }
    out
}

impl<T: SignalFloat> TimeSeries<T> {
    /// Cross-correlate the range with `kernel`.
    ///
    /// The output covers `len + K - 1` consecutive days starting
    /// `floor(K / 2)` days before the first input timestamp, so the centre of
    /// the kernel lines up with each input day. The first and last
    /// `floor(K / 2)` samples are ramps where the kernel only partly overlaps
    /// the input; they are not cropped here.
    #[must_use]
    pub fn cross_correlate(&self, kernel: &Kernel<T>) -> Self {
        let Some(first) = self.first_timestamp() else {
            return Self::empty();
        };

        let range = correlate_full(kernel.taps(), self.range());
        let start = dates::shift_days(first, -(kernel.half_width() as i64));

        #[cfg(feature = "tracing")]
        tracing::trace!(
            kind = ?kernel.kind(),
            taps = kernel.len(),
            input = self.len(),
            output = range.len(),
            "cross-correlated series"
        );

        Self::daily(start, range)
    }
}
