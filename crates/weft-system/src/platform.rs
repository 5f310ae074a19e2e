//! The OS capability seam.

use bitflags::bitflags;

use crate::error::{FileError, SystemError};
use crate::region::Region;

bitflags! {
    /// Access rights requested when opening a file.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Access: u8 {
        /// Read access.
        const READ = 1 << 0;
        /// Write access.
        const WRITE = 1 << 1;
    }
}

/// What to do about existing and missing files when opening.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    /// Create the file; fail with
    /// [`FileError::AlreadyExists`](crate::FileError::AlreadyExists) if it
    /// is present.
    CreateNew,
    /// Create the file, truncating any existing content.
    CreateAlways,
    /// Open an existing file; fail with
    /// [`FileError::NotFound`](crate::FileError::NotFound) if it is absent.
    OpenExisting,
}

/// Reference point for a cursor move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeekOrigin {
    /// From the start of the file.
    Begin,
    /// From the current cursor position.
    Cursor,
    /// From the end of the file.
    End,
}

/// Capabilities the transcoding core consumes from the operating system.
///
/// One concrete implementation exists per target platform, selected at
/// build time through [`host`]. Paths cross this seam in their wide
/// (16-bit) form — the product of one transcode — and each backend maps
/// its native failures into the closed [`FileError`] set.
pub trait Platform {
    /// Handle to an open file.
    type File;

    /// Size of one reservation page in bytes.
    fn page_size(&self) -> usize;

    /// Reserve `pages` pages of zeroed memory.
    ///
    /// The reservation is returned as an owned [`Region`] and released
    /// when the region drops.
    fn reserve(&self, pages: usize) -> Result<Region, SystemError>;

    /// Open the file named by the wide `path` with the given disposition
    /// and access rights.
    fn create(
        &self,
        path: &[u16],
        disposition: Disposition,
        access: Access,
    ) -> Result<Self::File, FileError>;

    /// Read up to `buffer.len()` bytes at the file cursor, returning the
    /// number of bytes read (zero at end of file).
    fn read(&self, file: &mut Self::File, buffer: &mut [u8]) -> Result<usize, FileError>;

    /// Move the file cursor, returning the new absolute position.
    fn seek(&self, file: &mut Self::File, offset: i64, origin: SeekOrigin)
        -> Result<u64, FileError>;

    /// Close `file`. Dropping the handle also closes it; this is the
    /// explicit form.
    fn close(&self, file: Self::File);
}

/// The backend compiled for this target.
#[cfg(unix)]
pub type Host = crate::mmap::Mmap;

/// The backend compiled for this target.
#[cfg(not(unix))]
pub type Host = crate::hosted::Hosted;

/// The platform backend selected at build time.
pub fn host() -> Host {
    Host::default()
}
