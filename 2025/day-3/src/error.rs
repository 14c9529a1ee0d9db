use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum JoltageError {
    #[error("invalid character '{character}' in battery bank at position {position}")]
    #[diagnostic(
        code(joltage::invalid_character),
        help("a bank may only contain the decimal digits 0-9")
    )]
    InvalidCharacter { character: char, position: usize },

    #[error("digit value {0} is outside 0..=9")]
    #[diagnostic(code(joltage::digit_out_of_range))]
    DigitOutOfRange(u8),

    /// A selection handed to the accumulator did not decode as base 10.
    /// Only the selector produces selections, so this is a bug, not bad input.
    #[error("selection {selection:?} is not a base-10 digit sequence")]
    #[diagnostic(code(joltage::internal_invariant_violation))]
    InternalInvariantViolation { selection: Vec<u8> },
}
