//! Unix backend: anonymous mappings and file descriptors through `libc`.

#![allow(unsafe_code)]

use std::ffi::CString;
use std::io;
use std::ptr;

use log::{debug, warn};

use crate::error::{FileError, SystemError};
use crate::platform::{Access, Disposition, Platform, SeekOrigin};
use crate::region::Region;

/// The Unix platform backend.
///
/// Reservations are anonymous private mappings; files are raw
/// descriptors. The kernel zeroes fresh anonymous pages, so a new
/// reservation needs no explicit fill.
#[derive(Clone, Copy, Debug, Default)]
pub struct Mmap;

/// An open file descriptor.
#[derive(Debug)]
pub struct Fd {
    raw: libc::c_int,
}

impl Drop for Fd {
    fn drop(&mut self) {
        // SAFETY: `raw` is an open descriptor exclusively owned by this
        // handle; it is closed exactly once, here.
        unsafe {
            libc::close(self.raw);
        }
    }
}

/// Narrow a wide path back to bytes for the byte-oriented Unix API.
///
/// The units come from a validated transcode, so lone surrogates cannot
/// appear; an embedded NUL is still rejected.
fn narrow_path(path: &[u16]) -> Result<CString, FileError> {
    let narrow: String = char::decode_utf16(path.iter().copied())
        .collect::<Result<_, _>>()
        .map_err(|_| FileError::InvalidPath)?;
    CString::new(narrow).map_err(|_| FileError::InvalidPath)
}

/// Map `errno` from a failed call into the closed error set.
fn map_errno(error: io::Error) -> FileError {
    match error.raw_os_error() {
        Some(libc::ENOENT) => FileError::NotFound,
        Some(libc::EACCES) | Some(libc::EPERM) => FileError::AccessDenied,
        Some(libc::EEXIST) => FileError::AlreadyExists,
        Some(libc::ENOTDIR) | Some(libc::EISDIR) | Some(libc::ENAMETOOLONG) => {
            FileError::InvalidPath
        }
        Some(libc::ENOMEM) => FileError::OutOfMemory,
        _ => FileError::Unknown,
    }
}

impl Platform for Mmap {
    type File = Fd;

    fn page_size(&self) -> usize {
        // SAFETY: sysconf reads a configuration value and touches no
        // caller memory.
        let size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
        if size > 0 {
            size as usize
        } else {
            4096
        }
    }

    fn reserve(&self, pages: usize) -> Result<Region, SystemError> {
        if pages == 0 {
            return Err(SystemError::InvalidPageCount { pages });
        }
        let bytes = pages
            .checked_mul(self.page_size())
            .ok_or(SystemError::OutOfMemory { bytes: usize::MAX })?;

        // SAFETY: an anonymous private mapping with no fixed address
        // aliases nothing; the result is checked against MAP_FAILED.
        let base = unsafe {
            libc::mmap(
                ptr::null_mut(),
                bytes,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
                -1,
                0,
            )
        };
        if base == libc::MAP_FAILED {
            warn!("mmap of {bytes} bytes failed: {}", io::Error::last_os_error());
            return Err(SystemError::OutOfMemory { bytes });
        }

        debug!("reserved {bytes} bytes ({pages} pages)");
        // SAFETY: mmap granted exactly `bytes` readable, writable bytes at
        // `base`, owned by nobody else.
        Ok(unsafe { Region::from_mapped(base.cast::<u8>(), bytes) })
    }

    fn create(
        &self,
        path: &[u16],
        disposition: Disposition,
        access: Access,
    ) -> Result<Fd, FileError> {
        let narrow = narrow_path(path)?;

        let mut flags = if access.contains(Access::READ | Access::WRITE) {
            libc::O_RDWR
        } else if access.contains(Access::WRITE) {
            libc::O_WRONLY
        } else {
            libc::O_RDONLY
        };
        flags |= match disposition {
            Disposition::CreateNew => libc::O_CREAT | libc::O_EXCL,
            Disposition::CreateAlways => libc::O_CREAT | libc::O_TRUNC,
            Disposition::OpenExisting => 0,
        };

        // SAFETY: `narrow` is a valid NUL-terminated string for the
        // duration of the call.
        let raw = unsafe { libc::open(narrow.as_ptr(), flags, 0o644 as libc::c_uint) };
        if raw < 0 {
            return Err(map_errno(io::Error::last_os_error()));
        }
        Ok(Fd { raw })
    }

    fn read(&self, file: &mut Fd, buffer: &mut [u8]) -> Result<usize, FileError> {
        if buffer.is_empty() {
            return Ok(0);
        }
        // SAFETY: `buffer` is valid for writes of `buffer.len()` bytes.
        let count = unsafe {
            libc::read(
                file.raw,
                buffer.as_mut_ptr().cast::<libc::c_void>(),
                buffer.len(),
            )
        };
        if count < 0 {
            return Err(map_errno(io::Error::last_os_error()));
        }
        Ok(count as usize)
    }

    fn seek(
        &self,
        file: &mut Fd,
        offset: i64,
        origin: SeekOrigin,
    ) -> Result<u64, FileError> {
        let whence = match origin {
            SeekOrigin::Begin => libc::SEEK_SET,
            SeekOrigin::Cursor => libc::SEEK_CUR,
            SeekOrigin::End => libc::SEEK_END,
        };
        // SAFETY: lseek moves a kernel-side cursor and touches no caller
        // memory.
        let position = unsafe { libc::lseek(file.raw, offset as libc::off_t, whence) };
        if position < 0 {
            return Err(map_errno(io::Error::last_os_error()));
        }
        Ok(position as u64)
    }

    fn close(&self, file: Fd) {
        drop(file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_is_a_sane_power_of_two() {
        let size = Mmap.page_size();
        assert!(size >= 1024);
        assert!(size.is_power_of_two());
    }

    #[test]
    fn reserve_zero_pages_fails() {
        assert_eq!(
            Mmap.reserve(0).err(),
            Some(SystemError::InvalidPageCount { pages: 0 })
        );
    }

    #[test]
    fn reserved_pages_are_zeroed_and_writable() {
        let mut region = Mmap.reserve(2).unwrap();
        assert_eq!(region.len(), 2 * Mmap.page_size());

        let bytes = region.as_mut_slice();
        assert!(bytes.iter().all(|&b| b == 0));
        bytes[0] = 0x5A;
        bytes[bytes.len() - 1] = 0xA5;
        assert_eq!(bytes[0], 0x5A);
    }

    #[test]
    fn narrow_path_round_trips_ascii() {
        let wide: Vec<u16> = "tmp/x.txt".encode_utf16().collect();
        let narrow = narrow_path(&wide).unwrap();
        assert_eq!(narrow.as_bytes(), b"tmp/x.txt");
    }

    #[test]
    fn narrow_path_rejects_embedded_nul() {
        assert_eq!(narrow_path(&[0x61, 0x0000, 0x62]), Err(FileError::InvalidPath));
    }
}
