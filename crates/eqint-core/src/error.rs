//! Errors produced when reading an `Eqint` back from text.

use thiserror::Error;

/// Error returned when parsing an [`Eqint`](crate::Eqint) from its decimal form.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseEqintError {
    /// The input was empty.
    #[error("cannot parse an Eqint from empty text")]
    Empty,
    /// The input contained something other than ASCII decimal digits.
    #[error("invalid Eqint text {0:?}: expected unsigned decimal digits")]
    InvalidDigit(String),
}
