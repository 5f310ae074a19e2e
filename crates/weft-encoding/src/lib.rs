//! Codec backends for the three Unicode encodings.
//!
//! This crate provides the concrete implementations of the
//! [`Encoding`](weft_core::Encoding) trait — [`Utf8`], [`Utf16`], and
//! [`Utf32`] — through which all transcoding flows. Each backend decodes
//! and encodes one scalar at a time, validating it against the Unicode
//! scalar space on every call.
//!
//! # Backends
//!
//! - [`Utf8`]: one to four tagged bytes per scalar, canonical overlong
//!   rejection
//! - [`Utf16`]: one unit per BMP scalar, surrogate pairs above `0xFFFF`
//! - [`Utf32`]: one unit per scalar, still validated

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod utf16;
pub mod utf32;
pub mod utf8;

pub use utf16::Utf16;
pub use utf32::Utf32;
pub use utf8::Utf8;
