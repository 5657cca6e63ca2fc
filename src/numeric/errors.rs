// ============================================================================
// Calculator Errors
// Error types for calculator operations
// ============================================================================

use std::fmt;

/// Errors that can occur while applying, undoing or redoing operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CalcError {
    /// One of the operands was not supplied
    MissingOperand,
    /// Attempted division by zero
    ZeroDivisor,
    /// Divide scale was not supplied or was negative
    InvalidScale,
    /// Divide rounding mode was not supplied
    MissingRoundingMode,
    /// `RoundingMode::Unnecessary` was requested but the quotient is inexact
    RoundingNecessary,
    /// Aligning operand scales needs a power of ten past `u32::MAX`
    Overflow,
    /// A stored operation record is inconsistent with its kind
    MalformedOperation(String),
    /// Calculator configuration failed validation
    InvalidConfig(String),
}

impl CalcError {
    /// True for the caller-input errors (the illegal-argument class).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            CalcError::MissingOperand
                | CalcError::ZeroDivisor
                | CalcError::InvalidScale
                | CalcError::MissingRoundingMode
                | CalcError::RoundingNecessary
        )
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::MissingOperand => {
                write!(f, "illegal argument, n1 and n2 must not be empty")
            },
            CalcError::ZeroDivisor => write!(f, "illegal argument, n2 must not be zero"),
            CalcError::InvalidScale => write!(
                f,
                "illegal argument, scale must not be empty or less than zero"
            ),
            CalcError::MissingRoundingMode => {
                write!(f, "illegal argument, roundingMode must not be empty")
            },
            CalcError::RoundingNecessary => {
                write!(f, "rounding necessary: quotient is inexact at requested scale")
            },
            CalcError::Overflow => {
                write!(f, "arithmetic overflow: scale exponent out of range")
            },
            CalcError::MalformedOperation(reason) => write!(f, "malformed operation: {}", reason),
            CalcError::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
        }
    }
}

impl std::error::Error for CalcError {}

/// Result type alias for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;
