//! Buffer descriptions and the owner back-reference carried by views.

use bytemuck::Pod;

/// Non-owning handle to the object that owns a buffer's memory.
///
/// The engine never manages the referenced allocation. The handle is copied
/// into every derived view unchanged, so a caller can map any view back to
/// the owner it was created from, typically an index into an external
/// registry of live objects. A view must not be used past the owner's
/// validity window; that contract stays with the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnerHandle(u64);

impl OwnerHandle {
    /// Handle carried by empty views that were never bound to a buffer.
    pub const DETACHED: Self = Self(0);

    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn id(self) -> u64 {
        self.0
    }
}

impl Default for OwnerHandle {
    fn default() -> Self {
        Self::DETACHED
    }
}

/// Description of an externally owned read-only buffer.
///
/// `shape` counts elements per axis and `strides` gives the byte offset
/// between consecutive elements along each axis; `item_size` is the byte
/// width of one element as the owner declares it. The description is only
/// consulted at view construction, where its consistency with the
/// requested view type is checked once.
#[derive(Debug, Clone)]
pub struct BufferInfo<'a> {
    pub data: &'a [u8],
    pub item_size: usize,
    pub shape: Vec<usize>,
    pub strides: Vec<isize>,
    pub owner: OwnerHandle,
}

impl<'a> BufferInfo<'a> {
    /// Describe a slice of plain-old-data elements as a one-dimensional,
    /// tightly packed buffer.
    pub fn from_pod_slice<T: Pod>(slice: &'a [T], owner: OwnerHandle) -> Self {
        let item_size = std::mem::size_of::<T>();
        Self {
            data: bytemuck::cast_slice(slice),
            item_size,
            shape: vec![slice.len()],
            strides: vec![item_size as isize],
            owner,
        }
    }
}

/// Description of an externally owned mutable buffer.
///
/// Same layout fields as [`BufferInfo`]; consumed by mutable view
/// construction since the data borrow is exclusive.
#[derive(Debug)]
pub struct BufferInfoMut<'a> {
    pub data: &'a mut [u8],
    pub item_size: usize,
    pub shape: Vec<usize>,
    pub strides: Vec<isize>,
    pub owner: OwnerHandle,
}

impl<'a> BufferInfoMut<'a> {
    /// Describe a mutable slice of plain-old-data elements as a
    /// one-dimensional, tightly packed buffer.
    pub fn from_pod_slice<T: Pod>(slice: &'a mut [T], owner: OwnerHandle) -> Self {
        let item_size = std::mem::size_of::<T>();
        let len = slice.len();
        Self {
            data: bytemuck::cast_slice_mut(slice),
            item_size,
            shape: vec![len],
            strides: vec![item_size as isize],
            owner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pod_slice_description() {
        let values = [1.0f32, 2.0, 3.0];
        let info = BufferInfo::from_pod_slice(&values, OwnerHandle::new(3));
        assert_eq!(info.data.len(), 12);
        assert_eq!(info.item_size, 4);
        assert_eq!(info.shape, vec![3]);
        assert_eq!(info.strides, vec![4]);
        assert_eq!(info.owner, OwnerHandle::new(3));
    }

    #[test]
    fn test_pod_slice_mut_description() {
        let mut values = [0u16; 5];
        let info = BufferInfoMut::from_pod_slice(&mut values, OwnerHandle::new(9));
        assert_eq!(info.data.len(), 10);
        assert_eq!(info.shape, vec![5]);
        assert_eq!(info.strides, vec![2]);
    }

    #[test]
    fn test_detached_handle_is_default() {
        assert_eq!(OwnerHandle::default(), OwnerHandle::DETACHED);
        assert_eq!(OwnerHandle::new(7).id(), 7);
    }
}
