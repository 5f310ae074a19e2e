//! Transcode-specific error types.

use std::error::Error;
use std::fmt;

use weft_arena::ArenaError;
use weft_core::CodecError;

/// Errors from a whole-string transcode.
///
/// A failed transcode never produces partial output, and the arena's
/// observable state is exactly what it was before the call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TranscodeError {
    /// Decoding the source failed at a unit index.
    Decode {
        /// Source unit index where the malformed sequence starts.
        index: usize,
        /// The underlying codec failure.
        reason: CodecError,
    },
    /// Encoding into the destination failed for the scalar decoded at a
    /// source unit index.
    ///
    /// Structurally impossible once the counting pass has succeeded, but
    /// guarded: the allocation is rolled back before this is returned.
    Encode {
        /// Source unit index of the scalar that failed to encode.
        index: usize,
        /// The underlying codec failure.
        reason: CodecError,
    },
    /// The arena could not supply the destination buffer.
    Allocation {
        /// The underlying arena failure.
        reason: ArenaError,
    },
}

impl fmt::Display for TranscodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode { index, reason } => {
                write!(f, "decode failed at source unit {index}: {reason}")
            }
            Self::Encode { index, reason } => {
                write!(f, "encode failed for the scalar at source unit {index}: {reason}")
            }
            Self::Allocation { reason } => {
                write!(f, "destination allocation failed: {reason}")
            }
        }
    }
}

impl Error for TranscodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Decode { reason, .. } | Self::Encode { reason, .. } => Some(reason),
            Self::Allocation { reason } => Some(reason),
        }
    }
}
