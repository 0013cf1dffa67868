//! Error types for polynomial operations.

use thiserror::Error;

/// An error produced by a polynomial operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolyError {
    /// Two polynomials over structurally different variables were combined.
    #[error("polynomials are over different variables")]
    VariableMismatch,
}
