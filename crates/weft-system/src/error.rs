//! Platform and file error types.

use std::error::Error;
use std::fmt;

use weft_transcode::TranscodeError;

/// Errors from memory reservation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SystemError {
    /// A reservation of zero pages was requested.
    InvalidPageCount {
        /// Number of pages requested.
        pages: usize,
    },
    /// The OS or allocator refused the reservation.
    OutOfMemory {
        /// Size of the failed reservation in bytes.
        bytes: usize,
    },
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPageCount { pages } => {
                write!(f, "invalid reservation of {pages} pages")
            }
            Self::OutOfMemory { bytes } => {
                write!(f, "reservation of {bytes} bytes failed")
            }
        }
    }
}

impl Error for SystemError {}

/// Errors from the file layer.
///
/// OS failures are mapped into this closed set; nothing is retried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileError {
    /// The file does not exist.
    NotFound,
    /// Permission was refused.
    AccessDenied,
    /// The file already exists and the disposition forbids that.
    AlreadyExists,
    /// The path names no representable file.
    InvalidPath,
    /// The path could not be converted to the platform's wide form.
    PathEncoding {
        /// The underlying transcode failure.
        reason: TranscodeError,
    },
    /// The arena could not hold the converted path.
    OutOfMemory,
    /// An OS failure outside the closed set.
    Unknown,
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "file not found"),
            Self::AccessDenied => write!(f, "access denied"),
            Self::AlreadyExists => write!(f, "file already exists"),
            Self::InvalidPath => write!(f, "invalid path"),
            Self::PathEncoding { reason } => write!(f, "path encoding failed: {reason}"),
            Self::OutOfMemory => write!(f, "arena exhausted while converting the path"),
            Self::Unknown => write!(f, "unknown file error"),
        }
    }
}

impl Error for FileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PathEncoding { reason } => Some(reason),
            _ => None,
        }
    }
}
