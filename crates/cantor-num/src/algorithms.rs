//! Number-theoretic algorithms layered on the backend contract.
//!
//! Everything here is built only from the operations the backend trait
//! guarantees, so each function behaves identically under every backend.

use num_traits::Zero;

use crate::error::NumError;
use crate::integer::BigInteger;
use crate::rational::BigRational;

/// Returns the absolute value of `n`.
#[must_use]
pub fn iabs(n: &BigInteger) -> BigInteger {
    n.abs()
}

/// Floor square root of a non-negative integer.
///
/// Newton iteration seeded from the bit length, so the first guess is
/// already within a factor of two of the root. Satisfies
/// `isqrt(n)^2 <= n < (isqrt(n) + 1)^2`.
///
/// # Panics
///
/// Debug builds panic if `n` is negative.
#[must_use]
pub fn isqrt(n: &BigInteger) -> BigInteger {
    debug_assert!(!n.is_negative(), "isqrt of a negative integer");
    if n.bit_len() <= 1 {
        return n.clone();
    }
    let mut x = BigInteger::new(1) << ((n.bit_len() + 1) / 2);
    loop {
        let y = (&x + &(n / &x)) >> 1;
        if y >= x {
            return x;
        }
        x = y;
    }
}

/// Floor `k`-th root of `n` together with an exactness flag
/// (`root^k == n`).
///
/// Odd roots of negative integers are permitted and negative.
///
/// # Errors
///
/// Returns [`NumError::ZerothRootRequested`] when `k == 0`.
///
/// # Panics
///
/// Debug builds panic on an even root of a negative integer.
pub fn i_nth_root(n: &BigInteger, k: u32) -> Result<(BigInteger, bool), NumError> {
    if k == 0 {
        return Err(NumError::ZerothRootRequested);
    }
    if n.is_negative() {
        debug_assert!(k % 2 == 1, "even root of a negative integer");
        let (root, exact) = i_nth_root(&n.abs(), k)?;
        return Ok((-root, exact));
    }
    if k == 1 || Zero::is_zero(n) {
        return Ok((n.clone(), true));
    }

    // Binary search on [0, 2^ceil(bits/k)]; the upper bound is the
    // smallest power of two whose k-th power exceeds n.
    let mut lo = BigInteger::new(0);
    let mut hi = BigInteger::new(1) << (n.bit_len() / k as usize + 1);
    let one = BigInteger::new(1);
    while lo < &hi - &one {
        let mid = (&lo + &hi) >> 1;
        if &mid.pow(k) <= n {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    let exact = &lo.pow(k) == n;
    Ok((lo, exact))
}

/// Returns true iff `n` is a perfect square. Always false for negative
/// integers.
#[must_use]
pub fn perfect_square(n: &BigInteger) -> bool {
    if n.is_negative() {
        return false;
    }
    let r = isqrt(n);
    &(&r * &r) == n
}

/// Returns true iff `n = a^k` for some integer `a` and some `k >= 2`.
///
/// Zero and one count as perfect powers. Exponents up to the bit length
/// are scanned; only odd exponents can witness a negative `n`.
#[must_use]
pub fn perfect_power(n: &BigInteger) -> bool {
    if n.abs() <= BigInteger::new(1) {
        return true;
    }
    let bits = u32::try_from(n.bit_len()).unwrap_or(u32::MAX);
    for k in 2..=bits {
        if n.is_negative() && k % 2 == 0 {
            continue;
        }
        if let Ok((_, true)) = i_nth_root(n, k) {
            return true;
        }
    }
    false
}

/// Exact division of two integers as a rational in lowest terms.
///
/// # Errors
///
/// Returns [`NumError::DivisionByZero`] if `b` is zero.
pub fn div_rational(a: &BigInteger, b: &BigInteger) -> Result<BigRational, NumError> {
    BigRational::new(a.clone(), b.clone())
}

/// Raises `base` to a signed exponent, producing a rational.
///
/// A negative exponent computes the positive power and inverts it, so
/// `2^-3 = 1/8` and `(-2)^-3 = -1/8`.
///
/// # Errors
///
/// Returns [`NumError::DivisionByZero`] for a zero base with a negative
/// exponent, and [`NumError::ValueTooLarge`] if the exponent magnitude
/// does not fit in a `u32`. [`NumError::NonIntegerResult`] marks an
/// internal invariant violation and is never produced by valid inputs.
pub fn pow_signed(base: &BigInteger, exp: i64) -> Result<BigRational, NumError> {
    if exp >= 0 {
        let e = u32::try_from(exp).map_err(|_| NumError::ValueTooLarge)?;
        return Ok(BigRational::from_integer(base.pow(e)));
    }
    if base.signum() == 0 {
        return Err(NumError::DivisionByZero);
    }
    let e = u32::try_from(exp.unsigned_abs()).map_err(|_| NumError::ValueTooLarge)?;
    let p = base.pow(e);
    let sign = BigInteger::new(i64::from(p.signum()));
    BigRational::new(sign, p.abs())
}
