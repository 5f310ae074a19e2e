//! The linear arena and its rollback marker.

use std::mem;

use weft_core::CodeUnit;

use crate::error::ArenaError;
use crate::raw;
use crate::span::Span;

/// A saved arena offset that [`Arena::rollback`] can restore to.
///
/// Obtained from [`Arena::mark`]. Rolling back discards every allocation
/// made after the marker was taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Marker(usize);

/// A linear bump allocator over a caller-provided memory region.
///
/// The arena owns no memory: it borrows a pre-reserved byte region for its
/// lifetime and advances a single offset through it. Allocations are
/// zero-filled when granted, so no stale data is ever observable through a
/// fresh allocation. The only way to reclaim memory is [`Arena::rollback`]
/// (to a [`Marker`]) or [`Arena::clear`] — there is no per-allocation free.
///
/// Exactly one logical owner at a time: all mutation goes through
/// `&mut self`, and spans resolved through [`Arena::slice`] keep the arena
/// borrowed while they are in use, so a live view cannot be rolled out
/// from under a caller.
///
/// # Examples
///
/// ```
/// use weft_arena::Arena;
///
/// let mut backing = [0xFFu8; 16];
/// let mut arena = Arena::new(&mut backing);
///
/// let marker = arena.mark();
/// let span = arena.allocate(10, 1).unwrap();
/// assert!(arena.slice(span).iter().all(|&b| b == 0));
///
/// arena.rollback(marker).unwrap();
/// assert_eq!(arena.used(), 0);
/// ```
pub struct Arena<'m> {
    memory: &'m mut [u8],
    offset: usize,
}

/// Largest unit alignment the arena serves: 32-bit units.
const UNIT_ALIGN: usize = 4;

impl<'m> Arena<'m> {
    /// Create an arena over `memory` with the offset at zero.
    ///
    /// The region is advanced to a 4-byte boundary first, so
    /// offset-aligned allocations are also address-aligned for every unit
    /// width. An empty region yields an arena with zero capacity; every
    /// allocation against it fails.
    pub fn new(memory: &'m mut [u8]) -> Self {
        let shift = memory.as_ptr().align_offset(UNIT_ALIGN).min(memory.len());
        Self {
            memory: &mut memory[shift..],
            offset: 0,
        }
    }

    /// Allocate `bytes` bytes aligned to `align`, zero-filled.
    ///
    /// The next offset is the current one rounded up to a multiple of
    /// `align`. Fails with [`ArenaError::InvalidRequest`] if `bytes` or
    /// `align` is zero, and with [`ArenaError::CapacityExceeded`] if the
    /// rounded-up end would pass the region's capacity. A failed
    /// allocation leaves the offset untouched.
    pub fn allocate(&mut self, bytes: usize, align: usize) -> Result<Span<u8>, ArenaError> {
        if bytes == 0 || align == 0 {
            return Err(ArenaError::InvalidRequest { bytes, align });
        }

        let start = self.aligned_offset(align);
        let end = start.checked_add(bytes).ok_or(ArenaError::CapacityExceeded {
            requested: bytes,
            capacity: self.memory.len(),
        })?;
        if end > self.memory.len() {
            return Err(ArenaError::CapacityExceeded {
                requested: bytes,
                capacity: self.memory.len(),
            });
        }

        self.memory[start..end].fill(0);
        self.offset = end;
        Ok(Span::new(start, bytes))
    }

    /// Allocate an array of `count` units of `T`, zero-filled.
    ///
    /// Equivalent to `allocate(count * size_of::<T>(), align_of::<T>())`
    /// with a typed span result; the stride and alignment come from the
    /// unit type.
    pub fn allocate_array<T: CodeUnit>(&mut self, count: usize) -> Result<Span<T>, ArenaError> {
        // A saturated size can never fit, so it falls out as CapacityExceeded.
        let bytes = count.saturating_mul(mem::size_of::<T>());
        let raw = self.allocate(bytes, mem::align_of::<T>())?;
        Ok(Span::new(raw.byte_start(), count))
    }

    /// Capture the current offset for a later [`Arena::rollback`].
    pub fn mark(&self) -> Marker {
        Marker(self.offset)
    }

    /// Restore the offset to `marker`, discarding everything after it.
    ///
    /// Fails with [`ArenaError::InvalidMarker`] if the marker is ahead of
    /// the current offset (that would move the offset forward); the offset
    /// is left unchanged. The reclaimed bytes are zero-filled again by the
    /// next allocation that reuses them.
    pub fn rollback(&mut self, marker: Marker) -> Result<(), ArenaError> {
        if marker.0 > self.offset {
            return Err(ArenaError::InvalidMarker {
                marker: marker.0,
                offset: self.offset,
            });
        }
        self.offset = marker.0;
        Ok(())
    }

    /// Reset the offset to zero, discarding every allocation.
    pub fn clear(&mut self) {
        self.offset = 0;
    }

    /// Resolve a span to a shared slice.
    ///
    /// # Panics
    ///
    /// Panics if the span ends past the current offset — a span issued
    /// before a rollback that reclaimed it, or one from another arena.
    pub fn slice<T: CodeUnit>(&self, span: Span<T>) -> &[T] {
        assert!(
            span.byte_end() <= self.offset,
            "span ends past the arena offset (rolled back?)"
        );
        raw::cast_units(&self.memory[span.byte_start()..span.byte_end()])
    }

    /// Resolve a span to a mutable slice.
    ///
    /// # Panics
    ///
    /// Same conditions as [`Arena::slice`].
    pub fn slice_mut<T: CodeUnit>(&mut self, span: Span<T>) -> &mut [T] {
        assert!(
            span.byte_end() <= self.offset,
            "span ends past the arena offset (rolled back?)"
        );
        raw::cast_units_mut(&mut self.memory[span.byte_start()..span.byte_end()])
    }

    /// Number of bytes currently allocated (the high-water offset).
    pub fn used(&self) -> usize {
        self.offset
    }

    /// Total capacity of the backing region in bytes.
    pub fn capacity(&self) -> usize {
        self.memory.len()
    }

    /// Bytes remaining before the region is exhausted (ignoring alignment).
    pub fn remaining(&self) -> usize {
        self.memory.len() - self.offset
    }

    /// The current offset rounded up to a multiple of `align`.
    ///
    /// The base sits on a `UNIT_ALIGN` boundary, so for any unit
    /// alignment the rounded offset is also address-aligned.
    fn aligned_offset(&self, align: usize) -> usize {
        let over = self.offset % align;
        if over == 0 {
            self.offset
        } else {
            self.offset + (align - over)
        }
    }
}
