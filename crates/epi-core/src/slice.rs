//! Sequence slicing with negative indices and steps.

use crate::error::{Result, SignalError};

/// A `start:stop:step` slice description.
///
/// Semantics match ordinary sequence slicing: negative indices count from the
/// end, out-of-range bounds are clamped, omitted bounds default to the whole
/// sequence in the direction of `step`, and a negative `step` walks backwards.
///
/// # Example
///
/// ```rust
/// use epi_core::SliceSpec;
///
/// let spec = SliceSpec::new(Some(1), Some(-1));
/// assert_eq!(spec.indices(5).unwrap(), vec![1, 2, 3]);
///
/// let reversed = SliceSpec::full().with_step(-1);
/// assert_eq!(reversed.indices(3).unwrap(), vec![2, 1, 0]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliceSpec {
    /// First index (inclusive).
    pub start: Option<isize>,
    /// Last index (exclusive).
    pub stop: Option<isize>,
    /// Stride; `None` means 1.
    pub step: Option<isize>,
}

impl SliceSpec {
    /// Slice from `start` to `stop` with unit step.
    #[must_use]
    pub fn new(start: Option<isize>, stop: Option<isize>) -> Self {
        Self {
            start,
            stop,
            step: None,
        }
    }

    /// The whole sequence.
    #[must_use]
    pub fn full() -> Self {
        Self::default()
    }

    /// Everything from `start` onwards.
    #[must_use]
    pub fn from_start(start: isize) -> Self {
        Self::new(Some(start), None)
    }

    /// Everything before `stop`.
    #[must_use]
    pub fn until(stop: isize) -> Self {
        Self::new(None, Some(stop))
    }

    /// Set the stride.
    #[must_use]
    pub fn with_step(mut self, step: isize) -> Self {
        self.step = Some(step);
        self
    }

    /// Resolve the slice against a sequence of length `len`.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::InvalidArgument`] if the step is zero.
    pub fn indices(&self, len: usize) -> Result<Vec<usize>> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(SignalError::invalid_argument(
                "step",
                step,
                "non-zero slice step",
            ));
        }

        let len = len as isize;
        let (lower, upper) = if step > 0 { (0, len) } else { (-1, len - 1) };

        let clamp = |bound: isize| -> isize {
            if bound < 0 {
                (bound + len).max(lower)
            } else {
                bound.min(upper)
            }
        };

        let start = self
            .start
            .map_or(if step > 0 { lower } else { upper }, clamp);
        let stop = self
            .stop
            .map_or(if step > 0 { upper } else { lower }, clamp);

        let mut out = Vec::new();
        let mut i = start;
        if step > 0 {
            while i < stop {
                out.push(i as usize);
                i += step;
            }
        } else {
            while i > stop {
                out.push(i as usize);
                i += step;
            }
        }
        Ok(out)
    }

    /// Apply the slice to a slice of values.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::InvalidArgument`] if the step is zero.
    pub fn apply<V: Clone>(&self, values: &[V]) -> Result<Vec<V>> {
        Ok(self
            .indices(values.len())?
            .into_iter()
            .map(|i| values[i].clone())
            .collect())
    }
}

impl From<core::ops::Range<isize>> for SliceSpec {
    fn from(range: core::ops::Range<isize>) -> Self {
        Self::new(Some(range.start), Some(range.end))
    }
}

impl From<core::ops::RangeFrom<isize>> for SliceSpec {
    fn from(range: core::ops::RangeFrom<isize>) -> Self {
        Self::from_start(range.start)
    }
}

impl From<core::ops::RangeTo<isize>> for SliceSpec {
    fn from(range: core::ops::RangeTo<isize>) -> Self {
        Self::until(range.end)
    }
}

impl From<core::ops::RangeFull> for SliceSpec {
    fn from(_: core::ops::RangeFull) -> Self {
        Self::full()
    }
}
