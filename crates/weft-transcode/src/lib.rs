//! Two-pass, all-or-nothing transcoding between the three encodings.
//!
//! One generic driver, [`transcode`], serves all six directional
//! conversions: a counting pass decodes the whole source and sums the
//! destination units each scalar needs, the exact-size destination buffer
//! is taken from the arena, and an encoding pass replays the same decode
//! sequence to fill it. Decoding is a pure function of the source and
//! index, so the replay yields identical scalars.
//!
//! There is never a partially converted output: any failure aborts the
//! whole transcode, and the arena is left exactly as it was before the
//! call — either because nothing was allocated yet, or by rolling back to
//! the marker captured just before the allocation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;

pub use error::TranscodeError;

use weft_arena::{Arena, Span};
use weft_core::Encoding;
use weft_encoding::{Utf16, Utf32, Utf8};

/// Convert `source` from encoding `S` to encoding `D`, allocating the
/// result from `arena`.
///
/// The returned span covers exactly the converted units. One extra unit is
/// allocated past the end as a terminator slot for interoperability with
/// null-terminated consumers; it is left zero-filled and excluded from the
/// span.
///
/// # Errors
///
/// [`TranscodeError::Decode`] on the first malformed source sequence,
/// [`TranscodeError::Allocation`] if the arena cannot hold the output, and
/// [`TranscodeError::Encode`] for the guarded (structurally impossible)
/// case of a scalar that counted but failed to encode. On every error path
/// the arena's offset is what it was before the call.
pub fn transcode<S, D>(
    source: &[S::Unit],
    arena: &mut Arena<'_>,
) -> Result<Span<D::Unit>, TranscodeError>
where
    S: Encoding,
    D: Encoding,
{
    let total = count_units::<S, D>(source)?;

    let marker = arena.mark();
    let span = arena
        .allocate_array::<D::Unit>(total + 1)
        .map_err(|reason| TranscodeError::Allocation { reason })?;

    let filled = fill::<S, D>(source, arena.slice_mut(span));
    match filled {
        Ok(()) => Ok(span.prefix(total)),
        Err(error) => {
            arena
                .rollback(marker)
                .expect("marker taken before the allocation is never ahead of the offset");
            Err(error)
        }
    }
}

/// Pass 1: decode every source sequence and sum the destination units.
fn count_units<S, D>(source: &[S::Unit]) -> Result<usize, TranscodeError>
where
    S: Encoding,
    D: Encoding,
{
    let mut total = 0usize;
    let mut index = 0usize;
    while index < source.len() {
        let decoded =
            S::decode(source, index).map_err(|reason| TranscodeError::Decode { index, reason })?;
        let units = D::scalar_units(decoded.scalar)
            .map_err(|reason| TranscodeError::Encode { index, reason })?;
        total += units;
        index += decoded.units;
    }
    Ok(total)
}

/// Pass 2: replay the decode sequence, encoding each scalar at the running
/// destination cursor.
fn fill<S, D>(source: &[S::Unit], destination: &mut [D::Unit]) -> Result<(), TranscodeError>
where
    S: Encoding,
    D: Encoding,
{
    let mut index = 0usize;
    let mut cursor = 0usize;
    while index < source.len() {
        let decoded =
            S::decode(source, index).map_err(|reason| TranscodeError::Decode { index, reason })?;
        let written = D::encode(destination, cursor, decoded.scalar)
            .map_err(|reason| TranscodeError::Encode { index, reason })?;
        index += decoded.units;
        cursor += written;
    }
    Ok(())
}

/// Convert an 8-bit string to 16-bit.
pub fn utf8_to_utf16(
    source: &[u8],
    arena: &mut Arena<'_>,
) -> Result<Span<u16>, TranscodeError> {
    transcode::<Utf8, Utf16>(source, arena)
}

/// Convert an 8-bit string to 32-bit.
pub fn utf8_to_utf32(
    source: &[u8],
    arena: &mut Arena<'_>,
) -> Result<Span<u32>, TranscodeError> {
    transcode::<Utf8, Utf32>(source, arena)
}

/// Convert a 16-bit string to 8-bit.
pub fn utf16_to_utf8(
    source: &[u16],
    arena: &mut Arena<'_>,
) -> Result<Span<u8>, TranscodeError> {
    transcode::<Utf16, Utf8>(source, arena)
}

/// Convert a 16-bit string to 32-bit.
pub fn utf16_to_utf32(
    source: &[u16],
    arena: &mut Arena<'_>,
) -> Result<Span<u32>, TranscodeError> {
    transcode::<Utf16, Utf32>(source, arena)
}

/// Convert a 32-bit string to 8-bit.
pub fn utf32_to_utf8(
    source: &[u32],
    arena: &mut Arena<'_>,
) -> Result<Span<u8>, TranscodeError> {
    transcode::<Utf32, Utf8>(source, arena)
}

/// Convert a 32-bit string to 16-bit.
pub fn utf32_to_utf16(
    source: &[u32],
    arena: &mut Arena<'_>,
) -> Result<Span<u16>, TranscodeError> {
    transcode::<Utf32, Utf16>(source, arena)
}
