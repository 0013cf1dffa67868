//! # Cantor
//!
//! The arithmetic core of the Cantor computer algebra system.
//!
//! ## Features
//!
//! - **Arbitrary Precision**: Big integers and rationals behind a pluggable
//!   backend trait, selected at build time
//! - **Structural Identity**: One equality/order/hash contract shared by
//!   every container of symbolic values
//! - **Polynomial Arithmetic**: Sparse univariate polynomials with
//!   Kronecker-substitution multiplication and exact division
//! - **Expression Rebuilding**: Polynomials collapse back into generic
//!   expression trees through builder traits
//!
//! ## Quick Start
//!
//! ```rust
//! use cantor::prelude::*;
//!
//! let x = symbol("x");
//! let dict = SparseDict::from_entries([
//!     (1u32, BigInteger::new(1)),
//!     (0, BigInteger::new(1)),
//! ]);
//! let p = int_poly(x, dict); // x + 1
//! let square = p.mul(&p);
//! assert_eq!(square.to_string(), "x**2 + 2*x + 1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use cantor_core as core;
pub use cantor_num as num;
pub use cantor_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use cantor_core::{symbol, Canonical, Coeff, Expr, ExprValue, Symbol, SymbolPool};
    pub use cantor_num::{BigInteger, BigRational, NumError};
    pub use cantor_poly::{divides, expr_poly, int_poly, ExprPoly, IntPoly, PolyError, SparseDict};
}
