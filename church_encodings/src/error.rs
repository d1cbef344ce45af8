//! Arithmetic failure signals.
//!
//! Absence is modelled with the option encoding and subtraction
//! saturates, so the only failure the encodings can report is a zero
//! divisor.

use std::error::Error;
use std::fmt;

/// Failures raised by the division family of `nat`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ArithmeticError {
    /// The divisor of `operation` was zero.
    DivisionByZero { operation: &'static str },
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::DivisionByZero { operation } => {
                write!(f, "DivisionByZero: {} with a zero divisor", operation)
            }
        }
    }
}

impl Error for ArithmeticError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_operation() {
        let err = ArithmeticError::DivisionByZero { operation: "div" };
        assert_eq!(err.to_string(), "DivisionByZero: div with a zero divisor");
    }
}
