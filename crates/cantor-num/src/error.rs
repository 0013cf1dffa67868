//! Error types for numeric operations.

use thiserror::Error;

/// An error produced by an arithmetic operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumError {
    /// Division or inversion with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
    /// The zeroth root of a number was requested.
    #[error("zeroth root requested")]
    ZerothRootRequested,
    /// A value does not fit in the requested machine integer type.
    #[error("value too large for the target type")]
    ValueTooLarge,
    /// An operation required an integer result but produced a fraction.
    #[error("result is not an integer")]
    NonIntegerResult,
}
