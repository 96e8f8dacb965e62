// Error type for the theory crate.
//
// The domain is closed (arithmetic mod 12), so most bad inputs are
// normalized rather than rejected: tonic and degree indices wrap, short
// interval vectors are zero-padded. The variants here cover the cases that
// cannot be normalized without guessing, plus the one derivation that can
// come up empty (note spelling).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// An interval vector had more than 12 entries.
    #[error("interval vector has {len} entries, at most 12 are allowed")]
    IntervalVectorTooLong { len: usize },

    /// An interval vector entry was something other than 0 or 1.
    #[error("interval vector entry {index} is {value}, expected 0 or 1")]
    InvalidIntervalValue { index: usize, value: u8 },

    /// A canonical number does not fit in 12 bits.
    #[error("canonical number {number} is out of range (0..=4095)")]
    CanonicalNumberOutOfRange { number: u32 },

    /// A canonical number without bit 0 set describes a scale without its tonic.
    #[error("canonical number {number} does not contain the root")]
    MissingRoot { number: u32 },

    /// No spelling of the degree's pitch class starts with the letter the
    /// selected interval name calls for.
    #[error("degree {degree} has no spelling on letter {letter}")]
    UnspellableDegree { degree: u8, letter: char },

    /// Go-relative was asked for a mode that is not a rotation of the scale.
    #[error("scale {number} is not a mode of the current scale")]
    ModeNotFound { number: u16 },
}
