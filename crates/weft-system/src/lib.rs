//! OS capability layer for weft: page reservations and file access.
//!
//! The [`Platform`] trait is the single seam between the transcoding core
//! and the operating system: page-size query, page-granular memory
//! reservation, and file create/open/read/seek/close through a
//! wide-character path. One concrete backend exists per target —
//! [`mmap::Mmap`] on Unix, [`hosted::Hosted`] elsewhere — and [`host`]
//! returns the one compiled in, so backend selection happens at build
//! time, never by switching code paths at runtime.
//!
//! Reservations are owned [`Region`] values released on drop. The
//! [`file`] module is the one consumer of the transcoder: it converts an
//! 8-bit path to the wide form inside a caller's arena, holds the view for
//! exactly one platform call, and rolls the arena back before returning.
//!
//! This crate is one of two that may contain `unsafe` code (along with
//! `weft-arena`). All of it sits at the FFI boundary, each site with a
//! `// SAFETY:` comment.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod error;
pub mod file;
pub mod hosted;
#[cfg(unix)]
pub mod mmap;
pub mod platform;
pub mod region;

pub use error::{FileError, SystemError};
pub use platform::{host, Access, Disposition, Host, Platform, SeekOrigin};
pub use region::Region;
