//! Capability traits for polynomial coefficients.
//!
//! The polynomial layer is generic over its coefficient domain. [`Coeff`]
//! is the ring-like surface every coefficient must provide; [`ExprValue`]
//! extends it with the expression-building capabilities (Add/Mul/Pow
//! builders) needed to collapse a polynomial back into a generic
//! expression tree. The tree itself is owned elsewhere; this layer only
//! reads and composes values through these traits.

use std::fmt::{Debug, Display};

use crate::canonical::Canonical;
use crate::symbol::Symbol;

/// A polynomial coefficient.
///
/// # Laws
///
/// The usual commutative-ring laws over `add`/`mul`/`neg` with identities
/// `zero()` and `one()`. `canon_cmp` must order `zero()` consistently with
/// `is_zero`.
pub trait Coeff: Clone + Canonical + Display + Debug {
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Returns true if this is the negated multiplicative identity.
    fn is_minus_one(&self) -> bool;

    /// Adds two coefficients.
    fn add(&self, other: &Self) -> Self;

    /// Subtracts two coefficients.
    fn sub(&self, other: &Self) -> Self;

    /// Multiplies two coefficients.
    fn mul(&self, other: &Self) -> Self;

    /// Divides by a non-zero coefficient.
    ///
    /// For integral domains this is the domain's own division (truncating
    /// for integers); for symbolic values it builds the quotient value.
    fn div(&self, other: &Self) -> Self;

    /// Negates a coefficient.
    fn neg(&self) -> Self;

    /// Renders the coefficient for use in a `coefficient*variable` position,
    /// parenthesized if its surface syntax would otherwise bind too loosely.
    fn coeff_str(&self) -> String {
        self.to_string()
    }
}

/// A symbolic value that can be rebuilt into a generic expression.
///
/// This is the capability set consumed from the expression-tree
/// collaborator: structural identity (via [`Canonical`]) plus the
/// Add/Mul/Pow builder functions.
pub trait ExprValue: Coeff {
    /// Lifts a machine integer into the value domain.
    fn from_i64(n: i64) -> Self;

    /// Lifts a symbol into the value domain.
    fn from_symbol(sym: &Symbol) -> Self;

    /// Builds the sum of the given terms (empty sum is zero).
    fn build_add(terms: Vec<Self>) -> Self;

    /// Builds the product of two values.
    fn build_mul(a: Self, b: Self) -> Self;

    /// Builds `base` raised to an integer exponent.
    fn build_pow(base: Self, exp: i64) -> Self;
}
