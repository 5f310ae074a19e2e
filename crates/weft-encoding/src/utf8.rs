//! The 8-bit encoding backend.

use weft_core::{is_surrogate, CodecError, Decoded, Encoding, MAX_SCALAR};

/// The 8-bit encoding: one to four bytes per scalar.
///
/// Multi-byte sequences carry a tagged lead byte (`110xxxxx`, `1110xxxx`,
/// or `11110xxx`) followed by `10xxxxxx` continuation bytes, six payload
/// bits each. Decoding rejects overlong forms with the canonical rule: a
/// sequence is overlong when it uses more bytes than the minimum its
/// decoded scalar requires.
#[derive(Clone, Copy, Debug, Default)]
pub struct Utf8;

impl Utf8 {
    /// True iff `unit` matches the `10xxxxxx` continuation pattern.
    pub fn is_continuation(unit: u8) -> bool {
        unit & 0xC0 == 0x80
    }

    /// Minimum bytes required for a scalar of this magnitude.
    fn min_units(scalar: u32) -> usize {
        if scalar < 0x80 {
            1
        } else if scalar < 0x800 {
            2
        } else if scalar < 0x10000 {
            3
        } else {
            4
        }
    }
}

impl Encoding for Utf8 {
    type Unit = u8;

    fn scalar_units(scalar: u32) -> Result<usize, CodecError> {
        if is_surrogate(scalar) {
            return Err(CodecError::Surrogate);
        }
        if scalar > MAX_SCALAR {
            return Err(CodecError::Invalid);
        }
        Ok(Self::min_units(scalar))
    }

    fn lead_units(unit: u8) -> Option<usize> {
        if unit & 0x80 == 0x00 {
            Some(1)
        } else if unit & 0xE0 == 0xC0 {
            Some(2)
        } else if unit & 0xF0 == 0xE0 {
            Some(3)
        } else if unit & 0xF8 == 0xF0 {
            Some(4)
        } else {
            None
        }
    }

    fn decode(units: &[u8], index: usize) -> Result<Decoded, CodecError> {
        let lead = *units.get(index).ok_or(CodecError::OutOfBounds)?;
        let count = Self::lead_units(lead).ok_or(CodecError::Invalid)?;
        if index + count > units.len() {
            return Err(CodecError::OutOfBounds);
        }

        let tail = &units[index + 1..index + count];
        if !tail.iter().all(|&unit| Self::is_continuation(unit)) {
            return Err(CodecError::Invalid);
        }

        let scalar = match count {
            1 => u32::from(lead),
            2 => (u32::from(lead & 0x1F) << 6) | u32::from(tail[0] & 0x3F),
            3 => {
                (u32::from(lead & 0x0F) << 12)
                    | (u32::from(tail[0] & 0x3F) << 6)
                    | u32::from(tail[1] & 0x3F)
            }
            4 => {
                (u32::from(lead & 0x07) << 18)
                    | (u32::from(tail[0] & 0x3F) << 12)
                    | (u32::from(tail[1] & 0x3F) << 6)
                    | u32::from(tail[2] & 0x3F)
            }
            _ => return Err(CodecError::Unreachable),
        };

        if count > Self::min_units(scalar) {
            return Err(CodecError::Overlong);
        }
        if is_surrogate(scalar) {
            return Err(CodecError::Surrogate);
        }
        if scalar > MAX_SCALAR {
            return Err(CodecError::Invalid);
        }

        Ok(Decoded {
            scalar,
            units: count,
        })
    }

    fn encode(units: &mut [u8], index: usize, scalar: u32) -> Result<usize, CodecError> {
        let count = Self::scalar_units(scalar)?;
        if index + count > units.len() {
            return Err(CodecError::OutOfBounds);
        }

        match count {
            1 => units[index] = scalar as u8,
            2 => {
                units[index] = (scalar >> 6) as u8 | 0xC0;
                units[index + 1] = (scalar & 0x3F) as u8 | 0x80;
            }
            3 => {
                units[index] = (scalar >> 12) as u8 | 0xE0;
                units[index + 1] = ((scalar >> 6) & 0x3F) as u8 | 0x80;
                units[index + 2] = (scalar & 0x3F) as u8 | 0x80;
            }
            4 => {
                units[index] = (scalar >> 18) as u8 | 0xF0;
                units[index + 1] = ((scalar >> 12) & 0x3F) as u8 | 0x80;
                units[index + 2] = ((scalar >> 6) & 0x3F) as u8 | 0x80;
                units[index + 3] = (scalar & 0x3F) as u8 | 0x80;
            }
            _ => return Err(CodecError::Unreachable),
        }

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_units_recognizes_the_four_forms() {
        assert_eq!(Utf8::lead_units(0x00), Some(1));
        assert_eq!(Utf8::lead_units(0x7F), Some(1));
        assert_eq!(Utf8::lead_units(0xC2), Some(2));
        assert_eq!(Utf8::lead_units(0xE0), Some(3));
        assert_eq!(Utf8::lead_units(0xF0), Some(4));
    }

    #[test]
    fn lead_units_rejects_continuations_and_invalid_leads() {
        assert_eq!(Utf8::lead_units(0x80), None);
        assert_eq!(Utf8::lead_units(0xBF), None);
        assert_eq!(Utf8::lead_units(0xF8), None);
        assert_eq!(Utf8::lead_units(0xFF), None);
    }

    #[test]
    fn scalar_units_follows_magnitude() {
        assert_eq!(Utf8::scalar_units(0x41), Ok(1));
        assert_eq!(Utf8::scalar_units(0x7F), Ok(1));
        assert_eq!(Utf8::scalar_units(0x80), Ok(2));
        assert_eq!(Utf8::scalar_units(0x7FF), Ok(2));
        assert_eq!(Utf8::scalar_units(0x800), Ok(3));
        assert_eq!(Utf8::scalar_units(0xFFFF), Ok(3));
        assert_eq!(Utf8::scalar_units(0x10000), Ok(4));
        assert_eq!(Utf8::scalar_units(0x10FFFF), Ok(4));
    }

    #[test]
    fn scalar_units_rejects_invalid_scalars() {
        assert_eq!(Utf8::scalar_units(0xD800), Err(CodecError::Surrogate));
        assert_eq!(Utf8::scalar_units(0xDFFF), Err(CodecError::Surrogate));
        assert_eq!(Utf8::scalar_units(0x110000), Err(CodecError::Invalid));
    }

    #[test]
    fn decodes_each_sequence_length() {
        assert_eq!(
            Utf8::decode(b"A", 0),
            Ok(Decoded {
                scalar: 0x41,
                units: 1
            })
        );
        assert_eq!(
            Utf8::decode(&[0xC3, 0x89], 0),
            Ok(Decoded {
                scalar: 0xC9,
                units: 2
            })
        );
        assert_eq!(
            Utf8::decode(&[0xE2, 0x82, 0xAC], 0),
            Ok(Decoded {
                scalar: 0x20AC,
                units: 3
            })
        );
        assert_eq!(
            Utf8::decode(&[0xF0, 0x9F, 0x98, 0x80], 0),
            Ok(Decoded {
                scalar: 0x1F600,
                units: 4
            })
        );
    }

    #[test]
    fn decode_respects_the_index() {
        let buffer = [0x41, 0xC3, 0x89, 0x42];
        assert_eq!(Utf8::decode(&buffer, 1).unwrap().scalar, 0xC9);
        assert_eq!(Utf8::decode(&buffer, 3).unwrap().scalar, 0x42);
    }

    #[test]
    fn decode_out_of_bounds_index_fails() {
        assert_eq!(Utf8::decode(b"", 0), Err(CodecError::OutOfBounds));
        assert_eq!(Utf8::decode(b"A", 1), Err(CodecError::OutOfBounds));
        assert_eq!(Utf8::decode(b"A", 9), Err(CodecError::OutOfBounds));
    }

    #[test]
    fn truncated_sequences_fail_out_of_bounds() {
        // Lead 0xF0 demands three continuations.
        assert_eq!(Utf8::decode(&[0xF0], 0), Err(CodecError::OutOfBounds));
        assert_eq!(Utf8::decode(&[0xF0, 0x9F], 0), Err(CodecError::OutOfBounds));
        assert_eq!(
            Utf8::decode(&[0xF0, 0x9F, 0x98], 0),
            Err(CodecError::OutOfBounds)
        );
        assert_eq!(Utf8::decode(&[0xC3], 0), Err(CodecError::OutOfBounds));
    }

    #[test]
    fn invalid_lead_byte_fails() {
        assert_eq!(Utf8::decode(&[0xFF], 0), Err(CodecError::Invalid));
        assert_eq!(Utf8::decode(&[0x80], 0), Err(CodecError::Invalid));
    }

    #[test]
    fn bad_continuation_fails() {
        assert_eq!(Utf8::decode(&[0xC3, 0x41], 0), Err(CodecError::Invalid));
        assert_eq!(
            Utf8::decode(&[0xE2, 0x82, 0xC0], 0),
            Err(CodecError::Invalid)
        );
    }

    #[test]
    fn overlong_forms_fail() {
        // NUL in two bytes, and '/' in two and three bytes.
        assert_eq!(Utf8::decode(&[0xC0, 0x80], 0), Err(CodecError::Overlong));
        assert_eq!(Utf8::decode(&[0xC0, 0xAF], 0), Err(CodecError::Overlong));
        assert_eq!(
            Utf8::decode(&[0xE0, 0x80, 0xAF], 0),
            Err(CodecError::Overlong)
        );
        assert_eq!(
            Utf8::decode(&[0xF0, 0x80, 0x80, 0xAF], 0),
            Err(CodecError::Overlong)
        );
        // Largest overlong forms: the scalar just below each boundary.
        assert_eq!(Utf8::decode(&[0xC1, 0xBF], 0), Err(CodecError::Overlong));
        assert_eq!(
            Utf8::decode(&[0xE0, 0x9F, 0xBF], 0),
            Err(CodecError::Overlong)
        );
        assert_eq!(
            Utf8::decode(&[0xF0, 0x8F, 0xBF, 0xBF], 0),
            Err(CodecError::Overlong)
        );
    }

    #[test]
    fn encoded_surrogate_fails_decode() {
        // 0xD800 as three bytes.
        assert_eq!(
            Utf8::decode(&[0xED, 0xA0, 0x80], 0),
            Err(CodecError::Surrogate)
        );
        // 0xDFFF as three bytes.
        assert_eq!(
            Utf8::decode(&[0xED, 0xBF, 0xBF], 0),
            Err(CodecError::Surrogate)
        );
    }

    #[test]
    fn beyond_codespace_fails_decode() {
        // 0x110000 as four bytes.
        assert_eq!(
            Utf8::decode(&[0xF4, 0x90, 0x80, 0x80], 0),
            Err(CodecError::Invalid)
        );
        // 0x1FFFFF, the largest four-byte payload.
        assert_eq!(
            Utf8::decode(&[0xF7, 0xBF, 0xBF, 0xBF], 0),
            Err(CodecError::Invalid)
        );
    }

    #[test]
    fn encodes_each_sequence_length() {
        let mut buffer = [0u8; 4];
        assert_eq!(Utf8::encode(&mut buffer, 0, 0x41), Ok(1));
        assert_eq!(buffer[0], 0x41);

        assert_eq!(Utf8::encode(&mut buffer, 0, 0xC9), Ok(2));
        assert_eq!(&buffer[..2], &[0xC3, 0x89]);

        assert_eq!(Utf8::encode(&mut buffer, 0, 0x20AC), Ok(3));
        assert_eq!(&buffer[..3], &[0xE2, 0x82, 0xAC]);

        assert_eq!(Utf8::encode(&mut buffer, 0, 0x1F600), Ok(4));
        assert_eq!(&buffer, &[0xF0, 0x9F, 0x98, 0x80]);
    }

    #[test]
    fn encode_rejects_invalid_scalars_before_writing() {
        let mut buffer = [0xAAu8; 4];
        assert_eq!(
            Utf8::encode(&mut buffer, 0, 0xD800),
            Err(CodecError::Surrogate)
        );
        assert_eq!(
            Utf8::encode(&mut buffer, 0, 0x110000),
            Err(CodecError::Invalid)
        );
        assert_eq!(buffer, [0xAA; 4]);
    }

    #[test]
    fn encode_without_room_fails_without_writing() {
        let mut buffer = [0xAAu8; 2];
        assert_eq!(
            Utf8::encode(&mut buffer, 0, 0x1F600),
            Err(CodecError::OutOfBounds)
        );
        assert_eq!(
            Utf8::encode(&mut buffer, 2, 0x41),
            Err(CodecError::OutOfBounds)
        );
        assert_eq!(buffer, [0xAA; 2]);
    }

    #[test]
    fn max_scalar_round_trips() {
        let mut buffer = [0u8; 4];
        let written = Utf8::encode(&mut buffer, 0, 0x10FFFF).unwrap();
        assert_eq!(written, 4);
        assert_eq!(
            Utf8::decode(&buffer, 0),
            Ok(Decoded {
                scalar: 0x10FFFF,
                units: 4
            })
        );
    }

    use proptest::prelude::*;

    fn arb_scalar() -> impl Strategy<Value = u32> {
        prop_oneof![0u32..0xD800, 0xE000u32..=0x10FFFF]
    }

    proptest! {
        #[test]
        fn decode_inverts_encode(scalar in arb_scalar()) {
            let mut buffer = [0u8; 4];
            let written = Utf8::encode(&mut buffer, 0, scalar).unwrap();
            let decoded = Utf8::decode(&buffer, 0).unwrap();
            prop_assert_eq!(decoded.scalar, scalar);
            prop_assert_eq!(decoded.units, written);
            prop_assert_eq!(written, Utf8::scalar_units(scalar).unwrap());
        }

        #[test]
        fn surrogates_never_encode(scalar in 0xD800u32..0xE000) {
            let mut buffer = [0u8; 4];
            prop_assert_eq!(
                Utf8::encode(&mut buffer, 0, scalar),
                Err(CodecError::Surrogate)
            );
        }

        #[test]
        fn decode_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..8), index in 0usize..8) {
            let _ = Utf8::decode(&bytes, index);
        }
    }
}
