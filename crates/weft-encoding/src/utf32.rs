//! The 32-bit encoding backend.

use weft_core::{is_surrogate, CodecError, Decoded, Encoding, MAX_SCALAR};

/// The 32-bit encoding: exactly one unit per scalar.
///
/// No bit packing is involved, but every unit is still validated against
/// the scalar space on decode and encode — a stored surrogate or a value
/// past the codespace is as malformed here as in the narrower widths.
#[derive(Clone, Copy, Debug, Default)]
pub struct Utf32;

impl Encoding for Utf32 {
    type Unit = u32;

    fn scalar_units(scalar: u32) -> Result<usize, CodecError> {
        if is_surrogate(scalar) {
            return Err(CodecError::Surrogate);
        }
        if scalar > MAX_SCALAR {
            return Err(CodecError::Invalid);
        }
        Ok(1)
    }

    fn lead_units(_unit: u32) -> Option<usize> {
        // Any unit starts (and ends) a sequence; decode validates the value.
        Some(1)
    }

    fn decode(units: &[u32], index: usize) -> Result<Decoded, CodecError> {
        let scalar = *units.get(index).ok_or(CodecError::OutOfBounds)?;
        if is_surrogate(scalar) {
            return Err(CodecError::Surrogate);
        }
        if scalar > MAX_SCALAR {
            return Err(CodecError::Invalid);
        }
        Ok(Decoded { scalar, units: 1 })
    }

    fn encode(units: &mut [u32], index: usize, scalar: u32) -> Result<usize, CodecError> {
        Self::scalar_units(scalar)?;
        if index >= units.len() {
            return Err(CodecError::OutOfBounds);
        }
        units[index] = scalar;
        Ok(1)
    }
}
