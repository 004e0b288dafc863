//! Plain contiguous byte views and their slice-time promotion to strided
//! views.
//!
//! A plain view is the degenerate one-dimensional case where the stride is
//! implicitly one byte. Slicing it with a unit step keeps the plain
//! representation; any other step needs an explicit stride, so the result
//! changes type; see [`Sliced`].

use crate::buffer::{BufferInfo, BufferInfoMut, OwnerHandle};
use crate::slice::SliceSpec;
use crate::strided::{StridedArrayView, StridedArrayViewMut};
use crate::{Result, ViewError};

/// A contiguous read-only view of bytes with an owner back-reference.
#[derive(Debug, Clone, Copy)]
pub struct ArrayView<'a> {
    data: &'a [u8],
    owner: OwnerHandle,
}

/// Result of slicing a plain view.
///
/// The representation depends on the resolved step: a unit step preserves
/// contiguity, anything else forces the strided type. Callers resolve the
/// promotion by pattern matching; it is part of the slicing contract, not
/// an error.
#[derive(Debug, Clone, Copy)]
pub enum Sliced<'a> {
    /// Unit step; contiguity preserved.
    Plain(ArrayView<'a>),
    /// Non-unit step; the element spacing needs an explicit stride.
    Strided(StridedArrayView<'a, 1>),
}

impl<'a> ArrayView<'a> {
    /// An empty view bound to no buffer.
    pub fn empty() -> Self {
        Self {
            data: &[],
            owner: OwnerHandle::DETACHED,
        }
    }

    /// View the whole of `data`.
    pub fn new(data: &'a [u8], owner: OwnerHandle) -> Self {
        Self { data, owner }
    }

    /// Bind to a described buffer.
    ///
    /// The description must be one-dimensional with the stride equal to the
    /// element size; the view then spans `shape[0] * item_size` bytes.
    pub fn from_buffer(info: &BufferInfo<'a>) -> Result<Self> {
        check_plain_layout(info.shape.len(), info.strides.first().copied(), info.item_size)?;
        let len = info.shape[0] * info.item_size;
        if len > info.data.len() {
            return Err(ViewError::OutOfBounds {
                len: info.data.len(),
            });
        }
        Ok(Self {
            data: &info.data[..len],
            owner: info.owner,
        })
    }

    /// View length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn owner(&self) -> OwnerHandle {
        self.owner
    }

    pub fn as_ptr(&self) -> *const u8 {
        self.data.as_ptr()
    }

    /// The viewed bytes, borrowed.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Value at `i`; [`ViewError::OutOfRange`] at or past the end, so an
    /// iteration protocol can stop on it.
    pub fn at(&self, i: usize) -> Result<u8> {
        match self.data.get(i) {
            Some(&value) => Ok(value),
            None => Err(ViewError::OutOfRange {
                index: i,
                size: self.data.len(),
            }),
        }
    }

    /// Copy the contents out.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.data.to_vec()
    }

    /// Slice the view.
    ///
    /// A resolved step of 1 keeps the plain representation; any other step
    /// promotes the result to a strided view.
    pub fn slice(&self, spec: impl Into<SliceSpec>) -> Result<Sliced<'a>> {
        let resolved = spec.into().resolve(self.data.len())?;
        if resolved.step == 1 {
            return Ok(Sliced::Plain(Self {
                data: &self.data[resolved.start..resolved.stop],
                owner: self.owner,
            }));
        }
        Ok(Sliced::Strided(StridedArrayView::promoted(
            self.data, resolved, self.owner,
        )))
    }
}

/// A contiguous mutable view of bytes with an owner back-reference.
///
/// Write access only exists on this type; [`ArrayView`] has none.
#[derive(Debug)]
pub struct ArrayViewMut<'a> {
    data: &'a mut [u8],
    owner: OwnerHandle,
}

/// Result of slicing a plain mutable view; see [`Sliced`].
#[derive(Debug)]
pub enum SlicedMut<'a> {
    Plain(ArrayViewMut<'a>),
    Strided(StridedArrayViewMut<'a, 1>),
}

impl<'a> ArrayViewMut<'a> {
    /// An empty view bound to no buffer.
    pub fn empty() -> Self {
        Self {
            data: &mut [],
            owner: OwnerHandle::DETACHED,
        }
    }

    /// View the whole of `data`.
    pub fn new(data: &'a mut [u8], owner: OwnerHandle) -> Self {
        Self { data, owner }
    }

    /// Bind to a described buffer; same layout requirements as
    /// [`ArrayView::from_buffer`].
    pub fn from_buffer(info: BufferInfoMut<'a>) -> Result<Self> {
        check_plain_layout(info.shape.len(), info.strides.first().copied(), info.item_size)?;
        let len = info.shape[0] * info.item_size;
        let data: &'a mut [u8] = info.data;
        if len > data.len() {
            return Err(ViewError::OutOfBounds { len: data.len() });
        }
        Ok(Self {
            data: &mut data[..len],
            owner: info.owner,
        })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn owner(&self) -> OwnerHandle {
        self.owner
    }

    pub fn as_ptr(&self) -> *const u8 {
        self.data.as_ptr()
    }

    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.data.as_mut_ptr()
    }

    /// Value at `i`; [`ViewError::OutOfRange`] at or past the end.
    pub fn at(&self, i: usize) -> Result<u8> {
        match self.data.get(i) {
            Some(&value) => Ok(value),
            None => Err(ViewError::OutOfRange {
                index: i,
                size: self.data.len(),
            }),
        }
    }

    /// Store `value` at `i`.
    pub fn set(&mut self, i: usize, value: u8) -> Result<()> {
        let size = self.data.len();
        match self.data.get_mut(i) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(ViewError::OutOfRange { index: i, size }),
        }
    }

    /// Copy the contents out.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.data.to_vec()
    }

    /// Reborrow as a read-only view.
    pub fn as_view(&self) -> ArrayView<'_> {
        ArrayView {
            data: self.data,
            owner: self.owner,
        }
    }

    /// Slice the view, consuming it to hand the exclusive borrow to the
    /// result. Promotion rules match [`ArrayView::slice`].
    pub fn slice(self, spec: impl Into<SliceSpec>) -> Result<SlicedMut<'a>> {
        let resolved = spec.into().resolve(self.data.len())?;
        let Self { data, owner } = self;
        if resolved.step == 1 {
            return Ok(SlicedMut::Plain(ArrayViewMut {
                data: &mut data[resolved.start..resolved.stop],
                owner,
            }));
        }
        Ok(SlicedMut::Strided(StridedArrayViewMut::promoted(
            data, resolved, owner,
        )))
    }
}

fn check_plain_layout(ndim: usize, stride: Option<isize>, item_size: usize) -> Result<()> {
    if ndim != 1 {
        return Err(ViewError::DimensionMismatch {
            expected: 1,
            actual: ndim,
        });
    }
    let stride = stride.unwrap_or(0);
    if stride != item_size as isize {
        return Err(ViewError::StrideMismatch {
            expected: item_size as isize,
            actual: stride,
        });
    }
    Ok(())
}
