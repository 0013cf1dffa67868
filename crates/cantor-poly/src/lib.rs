//! # cantor-poly
//!
//! Sparse univariate polynomial arithmetic for Cantor CAS.
//!
//! This crate provides:
//! - Canonical sparse coefficient dictionaries (`SparseDict`)
//! - Integer polynomials with Kronecker-substitution multiplication
//!   (`IntPoly`)
//! - Polynomials over symbolic coefficients with expression rebuilding
//!   (`ExprPoly`)
//! - Exact divisibility testing with quotient recovery (`divides`)
//!
//! ## Representation
//!
//! Coefficients live in ordered maps keyed by exponent; a zero coefficient
//! is never stored, so the empty map is the zero polynomial and structural
//! equality is coefficient-wise equality.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dict;
pub mod div;
pub mod error;
pub mod expr_poly;
pub mod int_poly;

#[cfg(test)]
mod proptests;

pub use dict::{Exponent, SparseDict};
pub use div::divides;
pub use error::PolyError;
pub use expr_poly::{expr_poly, ExprPoly};
pub use int_poly::{int_poly, IntPoly};
