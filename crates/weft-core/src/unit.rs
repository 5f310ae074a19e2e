//! The fixed-width storage element of each encoding.

use std::fmt;

mod private {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// A fixed-width code unit: `u8`, `u16`, or `u32`.
///
/// Sealed — the three unit widths are the complete set. The trait bounds
/// what an [`Encoding`](crate::traits::Encoding) may use as its storage
/// element and what a typed arena span may describe; sequence structure
/// (lead tagging, surrogate pairing) belongs to the owning encoding.
pub trait CodeUnit: Copy + Eq + fmt::Debug + private::Sealed + 'static {}

impl CodeUnit for u8 {}
impl CodeUnit for u16 {}
impl CodeUnit for u32 {}
