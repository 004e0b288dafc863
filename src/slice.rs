//! Python-style slice requests and their resolution against an axis length.
//!
//! A [`SliceSpec`] mirrors the `start:stop:step` form: any field may be
//! omitted, indices may be negative (counted from the end), and the step may
//! be negative (reversed traversal). [`SliceSpec::resolve`] turns a request
//! into a concrete forward-oriented `(start, stop, step)` triple so that the
//! slicing machinery downstream never needs a reverse-iteration code path;
//! a negative step survives only as a sign to flip the stride with.

use crate::{Result, ViewError};
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

/// A per-axis slice request with optional bounds and step.
///
/// Unspecified bounds take the natural default for the step's sign: the
/// whole axis forward for a positive step, the whole axis backward for a
/// negative one. Negative indices count from the end of the axis,
/// out-of-range indices clamp to the valid range, exactly as in Python.
///
/// ```rust
/// use strided_bytes::SliceSpec;
///
/// // `2..7`, `..`, and `[::-1]` respectively:
/// let _ = SliceSpec::from(2..7);
/// let _ = SliceSpec::FULL;
/// let _ = SliceSpec::FULL.step_by(-1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SliceSpec {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

impl SliceSpec {
    /// The full-axis slice, equivalent to `..`.
    pub const FULL: Self = Self {
        start: None,
        stop: None,
        step: None,
    };

    pub const fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    /// Replace the step, keeping the bounds.
    pub const fn step_by(self, step: isize) -> Self {
        Self {
            step: Some(step),
            ..self
        }
    }
}

impl From<RangeFull> for SliceSpec {
    fn from(_: RangeFull) -> Self {
        Self::FULL
    }
}

impl From<Range<isize>> for SliceSpec {
    fn from(r: Range<isize>) -> Self {
        Self::new(Some(r.start), Some(r.end), None)
    }
}

impl From<RangeFrom<isize>> for SliceSpec {
    fn from(r: RangeFrom<isize>) -> Self {
        Self::new(Some(r.start), None, None)
    }
}

impl From<RangeTo<isize>> for SliceSpec {
    fn from(r: RangeTo<isize>) -> Self {
        Self::new(None, Some(r.end), None)
    }
}

/// A slice request resolved against a concrete axis length.
///
/// Invariants: `step != 0` and `start <= stop <= len`. For a negative step
/// the bounds have already been swapped and shifted by one, so that walking
/// `[start, stop)` with `|step|` visits exactly the elements the request
/// selects, in forward memory order; the direction reversal is carried by
/// the step's sign alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ResolvedSlice {
    pub start: usize,
    pub stop: usize,
    pub step: isize,
}

impl ResolvedSlice {
    /// Number of elements the slice selects.
    pub fn len(&self) -> usize {
        (self.stop - self.start).div_ceil(self.step.unsigned_abs())
    }
}

impl SliceSpec {
    /// Resolve the request against an axis of length `n`.
    ///
    /// Fails with [`ViewError::InvalidSlice`] on a zero step, regardless of
    /// the bounds.
    pub(crate) fn resolve(self, n: usize) -> Result<ResolvedSlice> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(ViewError::InvalidSlice);
        }
        let n = n as isize;

        // Wrap a negative index once, then clamp to the range an index may
        // legally take for this step direction: [0, n] forward, [-1, n-1]
        // backward (-1 being "before the first element").
        let adjust = |index: Option<isize>, default: isize| -> isize {
            let Some(mut i) = index else {
                return default;
            };
            if i < 0 {
                i += n;
                if i < 0 {
                    return if step < 0 { -1 } else { 0 };
                }
            } else if i >= n {
                return if step < 0 { n - 1 } else { n };
            }
            i
        };

        if step > 0 {
            let start = adjust(self.start, 0);
            let stop = adjust(self.stop, n).max(start);
            Ok(ResolvedSlice {
                start: start as usize,
                stop: stop as usize,
                step,
            })
        } else {
            let start = adjust(self.start, n - 1);
            let stop = adjust(self.stop, -1);
            // Swap and shift by one so the selected elements become the
            // forward-oriented half-open range [lo, hi). An empty selection
            // (start already at or before stop) collapses to lo == hi.
            let hi = start + 1;
            let lo = (stop + 1).min(hi);
            Ok(ResolvedSlice {
                start: lo as usize,
                stop: hi as usize,
                step,
            })
        }
    }
}
