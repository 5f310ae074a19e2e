//! The 16-bit encoding backend.

use weft_core::{
    is_high_surrogate, is_low_surrogate, is_surrogate, CodecError, Decoded, Encoding, MAX_SCALAR,
};

/// First scalar that requires a surrogate pair.
const PAIR_FIRST: u32 = 0x10000;

/// The 16-bit encoding: one unit per BMP scalar, a surrogate pair above.
///
/// A high surrogate (`0xD800..0xDC00`) leads a two-unit sequence and must
/// be followed by a low surrogate (`0xDC00..0xE000`); a low surrogate can
/// never lead.
#[derive(Clone, Copy, Debug, Default)]
pub struct Utf16;

impl Encoding for Utf16 {
    type Unit = u16;

    fn scalar_units(scalar: u32) -> Result<usize, CodecError> {
        if is_surrogate(scalar) {
            return Err(CodecError::Surrogate);
        }
        if scalar > MAX_SCALAR {
            return Err(CodecError::Invalid);
        }
        Ok(if scalar < PAIR_FIRST { 1 } else { 2 })
    }

    fn lead_units(unit: u16) -> Option<usize> {
        let value = u32::from(unit);
        if !is_surrogate(value) {
            Some(1)
        } else if is_high_surrogate(value) {
            Some(2)
        } else {
            // A low surrogate cannot begin a sequence.
            None
        }
    }

    fn decode(units: &[u16], index: usize) -> Result<Decoded, CodecError> {
        let lead = *units.get(index).ok_or(CodecError::OutOfBounds)?;
        let count = Self::lead_units(lead).ok_or(CodecError::Invalid)?;
        if index + count > units.len() {
            return Err(CodecError::OutOfBounds);
        }

        let scalar = match count {
            1 => u32::from(lead),
            2 => {
                let low = units[index + 1];
                if !is_low_surrogate(u32::from(low)) {
                    return Err(CodecError::Invalid);
                }
                PAIR_FIRST + ((u32::from(lead) - 0xD800) << 10) + (u32::from(low) - 0xDC00)
            }
            _ => return Err(CodecError::Unreachable),
        };

        Ok(Decoded {
            scalar,
            units: count,
        })
    }

    fn encode(units: &mut [u16], index: usize, scalar: u32) -> Result<usize, CodecError> {
        let count = Self::scalar_units(scalar)?;
        if index + count > units.len() {
            return Err(CodecError::OutOfBounds);
        }

        match count {
            1 => units[index] = scalar as u16,
            2 => {
                let offset = scalar - PAIR_FIRST;
                units[index] = (offset >> 10) as u16 + 0xD800;
                units[index + 1] = (offset & 0x3FF) as u16 + 0xDC00;
            }
            _ => return Err(CodecError::Unreachable),
        }

        Ok(count)
    }
}
