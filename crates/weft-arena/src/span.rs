//! Typed descriptors for arena allocations.

use std::marker::PhantomData;

use weft_core::CodeUnit;

/// A typed descriptor for one arena allocation.
///
/// A span records where an allocation starts within its arena and how many
/// units of `T` it covers. It does not borrow the arena — resolve it to a
/// slice with [`Arena::slice`](crate::Arena::slice) or
/// [`Arena::slice_mut`](crate::Arena::slice_mut). A span is only
/// meaningful against the arena that issued it, and only until that arena
/// is rolled back past the span's position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span<T: CodeUnit> {
    pub(crate) offset: usize,
    pub(crate) len: usize,
    pub(crate) _unit: PhantomData<T>,
}

impl<T: CodeUnit> Span<T> {
    pub(crate) fn new(offset: usize, len: usize) -> Self {
        Self {
            offset,
            len,
            _unit: PhantomData,
        }
    }

    /// Number of units this span covers.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True iff the span covers no units.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// A span over the first `len` units of this one.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds the span's length.
    pub fn prefix(self, len: usize) -> Self {
        assert!(len <= self.len, "prefix of {len} units from a span of {}", self.len);
        Self::new(self.offset, len)
    }

    /// Byte offset of the first unit within the arena region.
    pub(crate) fn byte_start(&self) -> usize {
        self.offset
    }

    /// Byte offset just past the last unit.
    pub(crate) fn byte_end(&self) -> usize {
        self.offset + self.len * std::mem::size_of::<T>()
    }
}
