//! Portable backend over the Rust standard library.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom};
use std::path::PathBuf;

use log::debug;

use crate::error::{FileError, SystemError};
use crate::platform::{Access, Disposition, Platform, SeekOrigin};
use crate::region::Region;

/// Fixed page granularity for heap-backed reservations.
const PAGE_SIZE: usize = 4096;

/// The portable platform backend.
///
/// Reservations come from the global allocator in a fixed 4096-byte page
/// granularity; files go through `std::fs`. Used on targets without a
/// dedicated backend, and available everywhere for tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct Hosted;

/// Decode a wide path for the `std::fs` API.
fn narrow_path(path: &[u16]) -> Result<PathBuf, FileError> {
    let narrow: String = char::decode_utf16(path.iter().copied())
        .collect::<Result<_, _>>()
        .map_err(|_| FileError::InvalidPath)?;
    Ok(PathBuf::from(narrow))
}

/// Map an I/O failure into the closed error set.
fn map_io_error(error: io::Error) -> FileError {
    match error.kind() {
        io::ErrorKind::NotFound => FileError::NotFound,
        io::ErrorKind::PermissionDenied => FileError::AccessDenied,
        io::ErrorKind::AlreadyExists => FileError::AlreadyExists,
        io::ErrorKind::InvalidInput => FileError::InvalidPath,
        io::ErrorKind::OutOfMemory => FileError::OutOfMemory,
        _ => FileError::Unknown,
    }
}

impl Platform for Hosted {
    type File = File;

    fn page_size(&self) -> usize {
        PAGE_SIZE
    }

    fn reserve(&self, pages: usize) -> Result<Region, SystemError> {
        if pages == 0 {
            return Err(SystemError::InvalidPageCount { pages });
        }
        let bytes = pages
            .checked_mul(PAGE_SIZE)
            .ok_or(SystemError::OutOfMemory { bytes: usize::MAX })?;

        let lanes = bytes.div_ceil(8);
        let mut storage: Vec<u64> = Vec::new();
        storage
            .try_reserve_exact(lanes)
            .map_err(|_| SystemError::OutOfMemory { bytes })?;
        storage.resize(lanes, 0);

        debug!("reserved {bytes} bytes ({pages} pages) from the heap");
        Ok(Region::from_heap(storage, bytes))
    }

    fn create(
        &self,
        path: &[u16],
        disposition: Disposition,
        access: Access,
    ) -> Result<File, FileError> {
        let path = narrow_path(path)?;

        let mut options = OpenOptions::new();
        options.read(access.contains(Access::READ));
        options.write(access.contains(Access::WRITE));
        match disposition {
            Disposition::CreateNew => {
                options.create_new(true);
            }
            Disposition::CreateAlways => {
                options.create(true).truncate(true);
            }
            Disposition::OpenExisting => {}
        }

        options.open(&path).map_err(map_io_error)
    }

    fn read(&self, file: &mut File, buffer: &mut [u8]) -> Result<usize, FileError> {
        file.read(buffer).map_err(map_io_error)
    }

    fn seek(
        &self,
        file: &mut File,
        offset: i64,
        origin: SeekOrigin,
    ) -> Result<u64, FileError> {
        let from = match origin {
            SeekOrigin::Begin => {
                let start = u64::try_from(offset).map_err(|_| FileError::Unknown)?;
                SeekFrom::Start(start)
            }
            SeekOrigin::Cursor => SeekFrom::Current(offset),
            SeekOrigin::End => SeekFrom::End(offset),
        };
        file.seek(from).map_err(map_io_error)
    }

    fn close(&self, file: File) {
        drop(file);
    }
}
