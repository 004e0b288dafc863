//! Zero-copy strided views over byte buffers.
//!
//! This crate provides non-owning views into externally owned memory,
//! described by a per-axis size and a signed per-axis byte stride. Views
//! never copy or manage the underlying allocation; every operation derives
//! a new view by recomputing the `(size, stride, offset)` triple.
//!
//! # Core Types
//!
//! - [`ArrayView`] / [`ArrayViewMut`]: plain contiguous one-dimensional byte
//!   views
//! - [`StridedArrayView`] / [`StridedArrayViewMut`]: one- to
//!   three-dimensional views with explicit byte strides (const-generic
//!   dimension count)
//! - [`SliceSpec`]: a Python-style per-axis slice request with optional
//!   bounds and step
//! - [`BufferInfo`] / [`BufferInfoMut`]: description of an externally owned
//!   buffer, carrying an [`OwnerHandle`] back-reference
//!
//! # Operations
//!
//! - Slicing, with negative indices, negative steps and clamping resolved
//!   the way Python resolves them; slicing a plain view with a non-unit
//!   step promotes it to a strided view (see [`Sliced`])
//! - Leading-axis indexing that peels one dimension off a view, and
//!   whole-tuple element access with all axes checked up front
//! - Zero-copy shape transforms: [`StridedArrayView::transposed`],
//!   [`StridedArrayView::flipped`], [`StridedArrayView::broadcasted`]
//! - Flattening any view into a freshly allocated contiguous byte vector
//!
//! # Example
//!
//! ```rust
//! use strided_bytes::{OwnerHandle, StridedArrayView};
//!
//! // A 2x3 row-major matrix of bytes.
//! let data = [1u8, 2, 3, 4, 5, 6];
//! let view: StridedArrayView<'_, 2> =
//!     StridedArrayView::new(&data, [2, 3], [3, 1], OwnerHandle::DETACHED).unwrap();
//!
//! assert_eq!(view.get([1, 2]).unwrap(), 6);
//!
//! // Transposing swaps sizes and strides; no bytes move.
//! let t = view.transposed(0, 1).unwrap();
//! assert_eq!(t.size(), &[3, 2]);
//! assert_eq!(t.get([2, 1]).unwrap(), 6);
//!
//! // Flattening walks axes outermost to innermost.
//! assert_eq!(t.to_bytes(), vec![1, 4, 2, 5, 3, 6]);
//! ```
//!
//! # Ownership
//!
//! A view holds a borrowed byte slice plus an [`OwnerHandle`], an opaque
//! back-reference to whatever object actually owns the allocation. The
//! handle is carried through every derived view unchanged and never
//! consulted by the engine itself; keeping the owner alive for as long as
//! its views are used is the caller's contract, with the borrow checker
//! enforcing it for the slice part.

mod buffer;
mod layout;
mod slice;
mod strided;
mod view;

pub use buffer::{BufferInfo, BufferInfoMut, OwnerHandle};
pub use slice::SliceSpec;
pub use strided::{Elements, StridedArrayView, StridedArrayViewMut, Subviews};
pub use view::{ArrayView, ArrayViewMut, Sliced, SlicedMut};

/// Errors produced by view construction and derivation.
///
/// Every error is detected synchronously at the offending call and returned
/// immediately; a failed operation never mutates an existing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    /// Slice request with a zero step.
    #[error("slice step cannot be zero")]
    InvalidSlice,

    /// Index at or beyond the axis size.
    ///
    /// Kept distinguishable from the other variants so that an enclosing
    /// iteration protocol can treat it as "no more elements".
    #[error("index {index} out of range for size {size}")]
    OutOfRange { index: usize, size: usize },

    /// Axis argument outside the view's dimensions, or not distinct where
    /// two distinct axes are required.
    #[error("invalid axis {axis} for a {dimensions}-dimensional view")]
    InvalidAxis { axis: usize, dimensions: usize },

    /// Broadcasting an axis whose size is not 1.
    #[error("cannot broadcast axis {axis} of size {size}")]
    InvalidBroadcast { axis: usize, size: usize },

    /// Buffer description dimensionality differs from the view type's.
    #[error("expected {expected} dimensions but got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Plain views require the stride to equal the element size.
    #[error("expected stride of {expected} but got {actual}")]
    StrideMismatch { expected: isize, actual: isize },

    /// View would reach outside the described buffer.
    #[error("view exceeds the {len}-byte buffer bounds")]
    OutOfBounds { len: usize },
}

/// Result type for view operations.
pub type Result<T> = std::result::Result<T, ViewError>;
