//! The big-number backend contract.
//!
//! Several arbitrary-precision libraries can carry this crate's arithmetic;
//! they are interchangeable behind the [`Backend`] trait, which enumerates
//! the exact operation set the rest of the crate is allowed to assume. The
//! active backend is chosen at build time via cargo features and its
//! concrete types never leak past this module.

use std::fmt::{Debug, Display};
use std::hash::Hash;

#[cfg(feature = "dashu-backend")]
pub mod dashu;
#[cfg(feature = "num-backend")]
pub mod num;

#[cfg(not(any(feature = "dashu-backend", feature = "num-backend")))]
compile_error!("cantor-num requires one of the features `dashu-backend` or `num-backend`");

/// A big-number backend strategy.
///
/// Implementations must provide value-semantic, exact arithmetic. The
/// contract is uniform: the numeric layer above behaves identically no
/// matter which backend is active.
pub trait Backend {
    /// The backend's arbitrary-precision signed integer.
    type Int: Clone + Eq + Ord + Hash + Default + Debug + Display;
    /// The backend's arbitrary-precision rational, always in lowest terms.
    type Rat: Clone + Eq + Ord + Hash + Debug + Display;

    // --- integers ---

    /// Builds an integer from a machine integer.
    fn int_from_i64(value: i64) -> Self::Int;

    /// Parses an integer from a string in the given radix.
    fn int_from_str_radix(s: &str, radix: u32) -> Option<Self::Int>;

    /// Narrows to an `i64`, or `None` if the magnitude does not fit.
    fn int_to_i64(a: &Self::Int) -> Option<i64>;

    /// Addition.
    fn int_add(a: &Self::Int, b: &Self::Int) -> Self::Int;

    /// Subtraction.
    fn int_sub(a: &Self::Int, b: &Self::Int) -> Self::Int;

    /// Multiplication.
    fn int_mul(a: &Self::Int, b: &Self::Int) -> Self::Int;

    /// Negation.
    fn int_neg(a: &Self::Int) -> Self::Int;

    /// Truncating division: quotient and remainder, both rounded toward
    /// zero. `b` must be non-zero.
    fn int_tdiv_qr(a: &Self::Int, b: &Self::Int) -> (Self::Int, Self::Int);

    /// Bitwise AND. Both operands must be non-negative.
    fn int_and(a: &Self::Int, b: &Self::Int) -> Self::Int;

    /// Left shift by `bits`.
    fn int_shl(a: &Self::Int, bits: usize) -> Self::Int;

    /// Arithmetic right shift by `bits`.
    fn int_shr(a: &Self::Int, bits: usize) -> Self::Int;

    /// Absolute value.
    fn int_abs(a: &Self::Int) -> Self::Int;

    /// Sign: -1, 0 or 1.
    fn int_sign(a: &Self::Int) -> i8;

    /// Number of bits in the magnitude (0 for zero).
    fn int_bit_len(a: &Self::Int) -> usize;

    // --- rationals ---

    /// Builds a rational from an integer.
    fn rat_from_int(n: Self::Int) -> Self::Rat;

    /// Builds `num/den` in lowest terms with a positive denominator.
    /// `den` must be non-zero; construction from two raw integers is not in
    /// canonical form, so this performs the canonicalization pass.
    fn rat_new(num: Self::Int, den: Self::Int) -> Self::Rat;

    /// The (sign-carrying) numerator.
    fn rat_num(r: &Self::Rat) -> Self::Int;

    /// The (positive) denominator.
    fn rat_den(r: &Self::Rat) -> Self::Int;

    /// Addition.
    fn rat_add(a: &Self::Rat, b: &Self::Rat) -> Self::Rat;

    /// Subtraction.
    fn rat_sub(a: &Self::Rat, b: &Self::Rat) -> Self::Rat;

    /// Multiplication.
    fn rat_mul(a: &Self::Rat, b: &Self::Rat) -> Self::Rat;

    /// Division. `b` must be non-zero.
    fn rat_div(a: &Self::Rat, b: &Self::Rat) -> Self::Rat;

    /// Negation.
    fn rat_neg(a: &Self::Rat) -> Self::Rat;

    /// Absolute value.
    fn rat_abs(a: &Self::Rat) -> Self::Rat;

    /// Sign: -1, 0 or 1.
    fn rat_sign(a: &Self::Rat) -> i8;

    /// Reciprocal. `a` must be non-zero.
    fn rat_recip(a: &Self::Rat) -> Self::Rat;
}

#[cfg(feature = "dashu-backend")]
pub(crate) type Active = dashu::DashuBackend;
#[cfg(all(feature = "num-backend", not(feature = "dashu-backend")))]
pub(crate) type Active = num::NumBackend;

pub(crate) type IntRepr = <Active as Backend>::Int;
pub(crate) type RatRepr = <Active as Backend>::Rat;
