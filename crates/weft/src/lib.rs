//! Weft: Unicode transcoding between 8, 16, and 32-bit code units over a
//! linear bump arena.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all weft sub-crates. For most users, adding `weft` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use weft::prelude::*;
//!
//! let mut backing = [0u8; 64];
//! let mut arena = Arena::new(&mut backing);
//!
//! // "café" — the last scalar needs two bytes in UTF-8, one unit in UTF-16.
//! let wide = utf8_to_utf16("café".as_bytes(), &mut arena).unwrap();
//! assert_eq!(arena.slice(wide), &[0x63, 0x61, 0x66, 0xE9]);
//!
//! // A failed conversion leaves the arena exactly as it was.
//! let marker = arena.mark();
//! assert!(utf8_to_utf16(&[0xFF], &mut arena).is_err());
//! assert_eq!(arena.mark(), marker);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `weft-core` | scalar validator, `Encoding`/`CodeUnit` traits, `CodecError` |
//! | [`encoding`] | `weft-encoding` | the `Utf8`, `Utf16`, `Utf32` backends |
//! | [`arena`] | `weft-arena` | `Arena`, `Marker`, `Span`, `ArenaError` |
//! | [`transcode`] | `weft-transcode` | the two-pass driver and directional entry points |
//! | [`system`] | `weft-system` | `Platform` capability trait, `Region`, the file layer |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Arena allocation: `Arena`, `Marker`, `Span` (`weft-arena`).
pub use weft_arena as arena;

/// Core types and traits (`weft-core`).
///
/// Contains the scalar validator, the [`types::Encoding`] and
/// [`types::CodeUnit`] traits, and [`types::CodecError`].
pub use weft_core as types;

/// Codec backends for the three encodings (`weft-encoding`).
pub use weft_encoding as encoding;

/// OS capability layer and the file-path collaborator (`weft-system`).
///
/// The [`system::Platform`] trait, the build-time [`system::host`]
/// selection, RAII [`system::Region`] reservations, and the
/// [`system::file`] module.
pub use weft_system as system;

/// The two-pass transcoding driver (`weft-transcode`).
///
/// [`transcode::transcode`] is the generic driver; the six directional
/// entry points are also available in the [`prelude`].
pub use weft_transcode as transcode;

/// Common imports for typical weft usage.
///
/// ```rust
/// use weft::prelude::*;
/// ```
pub mod prelude {
    // Arena
    pub use weft_arena::{Arena, ArenaError, Marker, Span};

    // Core traits and the validator
    pub use weft_core::{
        is_surrogate, is_valid_scalar, CodecError, CodeUnit, Decoded, Encoding, MAX_SCALAR,
    };

    // Encodings
    pub use weft_encoding::{Utf16, Utf32, Utf8};

    // Transcoding
    pub use weft_transcode::{
        transcode, utf16_to_utf32, utf16_to_utf8, utf32_to_utf16, utf32_to_utf8, utf8_to_utf16,
        utf8_to_utf32, TranscodeError,
    };

    // Platform
    pub use weft_system::{host, Access, Disposition, FileError, Platform, Region, SeekOrigin};
}
