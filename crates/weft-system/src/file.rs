//! File access through arena-scratch wide paths.
//!
//! This module is the one consumer of the transcoder. Each open-style
//! operation converts the caller's 8-bit path to the wide form inside the
//! caller's arena, holds the view for exactly one platform call, and rolls
//! the arena back to the pre-conversion marker before returning — the
//! scratch never outlives the call that needed it, and a caller can
//! observe no arena growth from any file operation.

use log::debug;

use weft_arena::Arena;
use weft_transcode::{utf8_to_utf16, TranscodeError};

use crate::error::FileError;
use crate::platform::{Access, Disposition, Platform, SeekOrigin};

/// Create a file, failing if it already exists.
pub fn create_if_new<P: Platform>(
    platform: &P,
    path: &[u8],
    arena: &mut Arena<'_>,
) -> Result<P::File, FileError> {
    open_with(
        platform,
        path,
        arena,
        Disposition::CreateNew,
        Access::READ | Access::WRITE,
    )
}

/// Create a file, truncating any existing content.
pub fn create_always<P: Platform>(
    platform: &P,
    path: &[u8],
    arena: &mut Arena<'_>,
) -> Result<P::File, FileError> {
    open_with(
        platform,
        path,
        arena,
        Disposition::CreateAlways,
        Access::READ | Access::WRITE,
    )
}

/// Open an existing file for reading.
pub fn open_to_read<P: Platform>(
    platform: &P,
    path: &[u8],
    arena: &mut Arena<'_>,
) -> Result<P::File, FileError> {
    open_with(platform, path, arena, Disposition::OpenExisting, Access::READ)
}

/// Open an existing file for writing.
pub fn open_to_write<P: Platform>(
    platform: &P,
    path: &[u8],
    arena: &mut Arena<'_>,
) -> Result<P::File, FileError> {
    open_with(platform, path, arena, Disposition::OpenExisting, Access::WRITE)
}

/// Read up to `buffer.len()` bytes at the file cursor.
pub fn read<P: Platform>(
    platform: &P,
    file: &mut P::File,
    buffer: &mut [u8],
) -> Result<usize, FileError> {
    platform.read(file, buffer)
}

/// Move the file cursor, returning the new absolute position.
pub fn seek<P: Platform>(
    platform: &P,
    file: &mut P::File,
    offset: i64,
    origin: SeekOrigin,
) -> Result<u64, FileError> {
    platform.seek(file, offset, origin)
}

/// Close a file explicitly.
pub fn close<P: Platform>(platform: &P, file: P::File) {
    platform.close(file);
}

/// Shared open flow: convert, call once, roll back.
fn open_with<P: Platform>(
    platform: &P,
    path: &[u8],
    arena: &mut Arena<'_>,
    disposition: Disposition,
    access: Access,
) -> Result<P::File, FileError> {
    let marker = arena.mark();
    let wide = utf8_to_utf16(path, arena).map_err(|error| match error {
        TranscodeError::Allocation { .. } => FileError::OutOfMemory,
        reason => FileError::PathEncoding { reason },
    })?;
    debug!("opening a file through a {}-unit wide path", wide.len());

    let opened = platform.create(arena.slice(wide), disposition, access);
    arena
        .rollback(marker)
        .expect("marker taken before the path conversion is never ahead of the offset");
    opened
}
