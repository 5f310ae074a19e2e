//! The encoding abstraction the transcoder is generic over.

use crate::error::CodecError;
use crate::outcome::Decoded;
use crate::unit::CodeUnit;

/// One of the three Unicode encodings, described by its code-unit width
/// and per-scalar codec operations.
///
/// Implementations are stateless: all operations are associated functions,
/// so a transcode can be driven purely by type parameters. Every decode and
/// encode validates the scalar it handles against the Unicode scalar space.
pub trait Encoding {
    /// The fixed-width storage element of this encoding.
    type Unit: CodeUnit;

    /// Number of units needed to encode `scalar` in this encoding.
    ///
    /// Fails with [`CodecError::Surrogate`] inside the reserved band and
    /// [`CodecError::Invalid`] past the end of the codespace.
    fn scalar_units(scalar: u32) -> Result<usize, CodecError>;

    /// Number of units a sequence starting with `unit` occupies, including
    /// the lead itself.
    ///
    /// Returns `None` if `unit` cannot begin a sequence (an unrecognized
    /// 8-bit lead byte, or a lone low surrogate in 16-bit).
    fn lead_units(unit: Self::Unit) -> Option<usize>;

    /// Decode one scalar from `units` at `index`.
    ///
    /// Pure: two calls with the same arguments yield the same outcome, so
    /// a counting pass can safely be replayed as an encoding pass.
    fn decode(units: &[Self::Unit], index: usize) -> Result<Decoded, CodecError>;

    /// Encode `scalar` into `units` at `index`, returning the number of
    /// units written.
    ///
    /// Validates the scalar and the destination bounds before touching the
    /// buffer; no partial write is performed on failure.
    fn encode(units: &mut [Self::Unit], index: usize, scalar: u32) -> Result<usize, CodecError>;
}
