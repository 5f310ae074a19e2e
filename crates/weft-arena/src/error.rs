//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors from arena operations.
///
/// A failed operation never mutates the arena: the offset is exactly what
/// it was before the call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// Zero bytes or zero alignment were requested.
    InvalidRequest {
        /// Number of bytes requested.
        bytes: usize,
        /// Requested alignment.
        align: usize,
    },
    /// The request does not fit in the remaining region.
    CapacityExceeded {
        /// Number of bytes requested.
        requested: usize,
        /// Total capacity of the backing region.
        capacity: usize,
    },
    /// A rollback marker ahead of the current offset.
    InvalidMarker {
        /// Offset recorded in the marker.
        marker: usize,
        /// Current arena offset.
        offset: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRequest { bytes, align } => {
                write!(f, "invalid request: {bytes} bytes, alignment {align}")
            }
            Self::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} bytes, capacity {capacity} bytes"
                )
            }
            Self::InvalidMarker { marker, offset } => {
                write!(f, "marker {marker} is ahead of the current offset {offset}")
            }
        }
    }
}

impl Error for ArenaError {}
