//! Outcome of a single decode step.

/// One decoded scalar and the source units its sequence occupied.
///
/// Returned by [`Encoding::decode`](crate::traits::Encoding::decode).
/// Callers advance their source cursor by `units`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// The decoded Unicode scalar value.
    pub scalar: u32,
    /// Number of source units the sequence occupied.
    pub units: usize,
}
