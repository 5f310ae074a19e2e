//! Bounded `unsafe` for typed views over arena bytes.
//!
//! The two functions here reinterpret a byte slice as a code-unit slice.
//! `Arena::allocate_array` guarantees the preconditions (alignment against
//! the absolute base address, byte length a multiple of the unit stride);
//! both are re-checked here so a defect upstream panics instead of
//! producing a misaligned view.

#![allow(unsafe_code)]

use weft_core::CodeUnit;

/// Reinterpret `bytes` as a slice of `T`.
///
/// # Panics
///
/// Panics if `bytes` is misaligned for `T` or its length is not a
/// multiple of `size_of::<T>()`.
pub(crate) fn cast_units<T: CodeUnit>(bytes: &[u8]) -> &[T] {
    let stride = std::mem::size_of::<T>();
    assert_eq!(bytes.len() % stride, 0, "byte length not a unit multiple");
    assert_eq!(
        bytes.as_ptr() as usize % std::mem::align_of::<T>(),
        0,
        "byte view misaligned for the unit width"
    );
    // SAFETY: alignment and length are checked above; u8/u16/u32 have no
    // invalid bit patterns; the returned lifetime is inherited from `bytes`.
    unsafe { std::slice::from_raw_parts(bytes.as_ptr().cast::<T>(), bytes.len() / stride) }
}

/// Reinterpret `bytes` as a mutable slice of `T`.
///
/// # Panics
///
/// Same conditions as [`cast_units`].
pub(crate) fn cast_units_mut<T: CodeUnit>(bytes: &mut [u8]) -> &mut [T] {
    let stride = std::mem::size_of::<T>();
    assert_eq!(bytes.len() % stride, 0, "byte length not a unit multiple");
    assert_eq!(
        bytes.as_ptr() as usize % std::mem::align_of::<T>(),
        0,
        "byte view misaligned for the unit width"
    );
    // SAFETY: alignment and length are checked above; u8/u16/u32 have no
    // invalid bit patterns; `bytes` is exclusively borrowed for the
    // returned lifetime.
    unsafe { std::slice::from_raw_parts_mut(bytes.as_mut_ptr().cast::<T>(), bytes.len() / stride) }
}
