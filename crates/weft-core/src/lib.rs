//! Core types and traits for the weft transcoding workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the weft workspace:
//! the scalar-value validator, the [`CodeUnit`] and [`Encoding`] traits
//! every codec backend implements, the [`Decoded`] outcome type, and
//! the shared [`CodecError`] taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod outcome;
pub mod scalar;
pub mod traits;
pub mod unit;

pub use error::CodecError;
pub use outcome::Decoded;
pub use scalar::{is_high_surrogate, is_low_surrogate, is_surrogate, is_valid_scalar, MAX_SCALAR};
pub use traits::Encoding;
pub use unit::CodeUnit;
