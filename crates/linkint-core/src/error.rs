//! Error types for sequence access and number parsing.

/// Positional access outside the valid range of a list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// The 1-based `position` is not valid for a list of `len` elements.
    #[error("position {position} out of range for list of length {len}")]
    PositionOutOfRange {
        /// Requested 1-based position.
        position: usize,
        /// Length of the list at the time of the call.
        len: usize,
    },
}

/// Failure to parse a decimal string into a `BigInt`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBigIntError {
    /// The input had no digits.
    #[error("cannot parse integer from empty string")]
    Empty,

    /// The input contained a character that is not an ASCII decimal digit.
    #[error("invalid digit {found:?} at byte {index}")]
    InvalidDigit {
        /// Offending character.
        found: char,
        /// Byte offset of the character in the input.
        index: usize,
    },
}
