use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use tracing::{debug, trace};

use crate::slice::errors::SliceError;
use crate::slice::iter::SliceIndices;

/// A logical slice over a sequence of known length.
///
/// Bounds may be omitted or negative; omitted bounds take the
/// direction-dependent default and negative bounds count from the end of
/// the sequence, so the same `Slice` can be resolved against sequences
/// of different lengths.
#[derive(Clone, Copy, Debug, Default)]
pub struct Slice {
    start: Option<i64>,
    stop: Option<i64>,
    step: Option<i64>,
}

impl From<RangeFull> for Slice {
    #[inline]
    fn from(_: RangeFull) -> Self {
        Self {
            start: None,
            stop: None,
            step: None,
        }
    }
}

impl From<RangeFrom<i64>> for Slice {
    #[inline]
    fn from(value: RangeFrom<i64>) -> Self {
        Self {
            start: Some(value.start),
            stop: None,
            step: None,
        }
    }
}

impl From<RangeTo<i64>> for Slice {
    #[inline]
    fn from(value: RangeTo<i64>) -> Self {
        Self {
            start: None,
            stop: Some(value.end),
            step: None,
        }
    }
}

impl From<Range<i64>> for Slice {
    #[inline]
    fn from(value: Range<i64>) -> Self {
        Self {
            start: Some(value.start),
            stop: Some(value.end),
            step: None,
        }
    }
}

impl Slice {
    #[inline]
    pub fn new(start: Option<i64>, stop: Option<i64>, step: Option<i64>) -> Self {
        Self { start, stop, step }
    }

    #[inline]
    pub fn full() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_step(mut self, step: i64) -> Self {
        self.step = Some(step);
        self
    }

    /// Resolve this slice against a sequence of `length` elements.
    ///
    /// Negative bounds are normalized by adding `length` and everything
    /// out of range is clamped to the nearest boundary. For a negative
    /// step the lower boundary is the sentinel -1, one before index 0.
    /// The only rejected input is a step of 0.
    pub fn resolve(&self, length: usize) -> Result<SliceIndices, SliceError> {
        let len = length as i64;

        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(SliceError::InvalidArgument("step cannot be 0"));
        }

        let wrap = |bound: i64| if bound < 0 { bound + len } else { bound };

        let (start, stop) = if step > 0 {
            (
                self.start.map_or(0, wrap).clamp(0, len),
                self.stop.map_or(len, wrap).clamp(0, len),
            )
        } else {
            (
                self.start.map_or(len - 1, wrap).clamp(-1, len - 1),
                self.stop.map_or(-1, wrap).clamp(-1, len - 1),
            )
        };

        trace!(length, start, stop, step, "resolved slice bounds");

        Ok(SliceIndices::new(start, stop, step))
    }

    /// Copy the selected elements out of `data`, in slice order.
    pub fn gather<T: Copy>(&self, data: &[T]) -> Result<Vec<T>, SliceError> {
        let indices = self.resolve(data.len())?;

        debug!(total = indices.len(), "gathering through slice");

        Ok(indices.map(|i| data[i]).collect())
    }

    /// Write `value` at every index the slice selects in `data`.
    pub fn assign_scalar<T: Copy>(&self, data: &mut [T], value: T) -> Result<(), SliceError> {
        for i in self.resolve(data.len())? {
            data[i] = value;
        }

        Ok(())
    }
}
