//! Arbitrary precision integers.
//!
//! [`BigInteger`] wraps the active backend's integer type and provides the
//! operations needed for polynomial arithmetic and symbolic computation.
//! No backend type appears in this surface.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, BitAnd, Div, Mul, Neg, Rem, Shl, Shr, Sub};
use std::sync::LazyLock;

use cantor_core::{hash_of, Canonical, Coeff};
use num_traits::{One, Zero};

use crate::backend::{Active, Backend, IntRepr};
use crate::error::NumError;

/// An arbitrary precision integer.
///
/// Immutable from the outside: every operation returns a new value.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct BigInteger(pub(crate) IntRepr);

/// The process-wide canonical zero.
static ZERO: LazyLock<BigInteger> = LazyLock::new(|| BigInteger::new(0));

/// The process-wide canonical one.
static ONE: LazyLock<BigInteger> = LazyLock::new(|| BigInteger::new(1));

/// Returns the shared zero constant.
#[must_use]
pub fn big_zero() -> &'static BigInteger {
    &ZERO
}

/// Returns the shared one constant.
#[must_use]
pub fn big_one() -> &'static BigInteger {
    &ONE
}

impl BigInteger {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(Active::int_from_i64(value))
    }

    /// Parses an integer from a string in the given radix.
    ///
    /// Returns `None` if the string is not a valid integer.
    #[must_use]
    pub fn from_str_radix(s: &str, radix: u32) -> Option<Self> {
        Active::int_from_str_radix(s, radix).map(Self)
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(Active::int_abs(&self.0))
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        Active::int_sign(&self.0)
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.signum() < 0
    }

    /// Returns the number of bits in the magnitude (0 for zero).
    #[must_use]
    pub fn bit_len(&self) -> usize {
        Active::int_bit_len(&self.0)
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        Active::int_to_i64(&self.0)
    }

    /// Converts to an i64.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::ValueTooLarge`] if the magnitude does not fit.
    pub fn as_i64(&self) -> Result<i64, NumError> {
        self.to_i64().ok_or(NumError::ValueTooLarge)
    }

    /// Truncating division: quotient and remainder, both rounded toward
    /// zero.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::DivisionByZero`] if `other` is zero.
    pub fn tdiv_qr(&self, other: &Self) -> Result<(Self, Self), NumError> {
        if other.signum() == 0 {
            return Err(NumError::DivisionByZero);
        }
        let (q, r) = Active::int_tdiv_qr(&self.0, &other.0);
        Ok((Self(q), Self(r)))
    }

    /// Computes self^exp by repeated squaring.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        let mut result = Self::new(1);
        let mut base = self.clone();
        let mut exp = exp;
        while exp > 0 {
            if exp & 1 == 1 {
                result = &result * &base;
            }
            base = &base * &base;
            exp >>= 1;
        }
        result
    }
}

impl Zero for BigInteger {
    fn zero() -> Self {
        Self(IntRepr::default())
    }

    fn is_zero(&self) -> bool {
        self.signum() == 0
    }
}

impl One for BigInteger {
    fn one() -> Self {
        Self::new(1)
    }

    fn is_one(&self) -> bool {
        self == big_one()
    }
}

impl Canonical for BigInteger {
    fn canon_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn canon_hash(&self) -> u64 {
        hash_of(&self.0)
    }
}

impl Coeff for BigInteger {
    fn zero() -> Self {
        Zero::zero()
    }

    fn one() -> Self {
        One::one()
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn is_one(&self) -> bool {
        One::is_one(self)
    }

    fn is_minus_one(&self) -> bool {
        self == &BigInteger::new(-1)
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn sub(&self, other: &Self) -> Self {
        self - other
    }

    fn mul(&self, other: &Self) -> Self {
        self * other
    }

    fn div(&self, other: &Self) -> Self {
        self / other
    }

    fn neg(&self) -> Self {
        -self
    }
}

impl fmt::Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInteger({})", self.0)
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Arithmetic operations
impl Add for BigInteger {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(Active::int_add(&self.0, &rhs.0))
    }
}

impl Add<&BigInteger> for BigInteger {
    type Output = Self;

    fn add(self, rhs: &BigInteger) -> Self::Output {
        Self(Active::int_add(&self.0, &rhs.0))
    }
}

impl Add for &BigInteger {
    type Output = BigInteger;

    fn add(self, rhs: Self) -> Self::Output {
        BigInteger(Active::int_add(&self.0, &rhs.0))
    }
}

impl Sub for BigInteger {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(Active::int_sub(&self.0, &rhs.0))
    }
}

impl Sub<&BigInteger> for BigInteger {
    type Output = Self;

    fn sub(self, rhs: &BigInteger) -> Self::Output {
        Self(Active::int_sub(&self.0, &rhs.0))
    }
}

impl Sub for &BigInteger {
    type Output = BigInteger;

    fn sub(self, rhs: Self) -> Self::Output {
        BigInteger(Active::int_sub(&self.0, &rhs.0))
    }
}

impl Mul for BigInteger {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(Active::int_mul(&self.0, &rhs.0))
    }
}

impl Mul<&BigInteger> for BigInteger {
    type Output = Self;

    fn mul(self, rhs: &BigInteger) -> Self::Output {
        Self(Active::int_mul(&self.0, &rhs.0))
    }
}

impl Mul for &BigInteger {
    type Output = BigInteger;

    fn mul(self, rhs: Self) -> Self::Output {
        BigInteger(Active::int_mul(&self.0, &rhs.0))
    }
}

impl Div for BigInteger {
    type Output = Self;

    /// Truncating quotient.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`BigInteger::tdiv_qr`] for a checked
    /// division.
    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Div for &BigInteger {
    type Output = BigInteger;

    fn div(self, rhs: Self) -> Self::Output {
        assert!(rhs.signum() != 0, "division by zero");
        BigInteger(Active::int_tdiv_qr(&self.0, &rhs.0).0)
    }
}

impl Rem for BigInteger {
    type Output = Self;

    /// Truncating remainder.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`BigInteger::tdiv_qr`] for a checked
    /// division.
    fn rem(self, rhs: Self) -> Self::Output {
        &self % &rhs
    }
}

impl Rem for &BigInteger {
    type Output = BigInteger;

    fn rem(self, rhs: Self) -> Self::Output {
        assert!(rhs.signum() != 0, "division by zero");
        BigInteger(Active::int_tdiv_qr(&self.0, &rhs.0).1)
    }
}

impl Neg for BigInteger {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(Active::int_neg(&self.0))
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> Self::Output {
        BigInteger(Active::int_neg(&self.0))
    }
}

impl Shl<usize> for BigInteger {
    type Output = Self;

    fn shl(self, bits: usize) -> Self::Output {
        Self(Active::int_shl(&self.0, bits))
    }
}

impl Shl<usize> for &BigInteger {
    type Output = BigInteger;

    fn shl(self, bits: usize) -> Self::Output {
        BigInteger(Active::int_shl(&self.0, bits))
    }
}

impl Shr<usize> for BigInteger {
    type Output = Self;

    fn shr(self, bits: usize) -> Self::Output {
        Self(Active::int_shr(&self.0, bits))
    }
}

impl Shr<usize> for &BigInteger {
    type Output = BigInteger;

    fn shr(self, bits: usize) -> Self::Output {
        BigInteger(Active::int_shr(&self.0, bits))
    }
}

impl BitAnd for &BigInteger {
    type Output = BigInteger;

    /// Bitwise AND of two non-negative integers.
    fn bitand(self, rhs: Self) -> Self::Output {
        BigInteger(Active::int_and(&self.0, &rhs.0))
    }
}

impl From<i64> for BigInteger {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for BigInteger {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u32> for BigInteger {
    fn from(value: u32) -> Self {
        Self::new(i64::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_ops() {
        let a = BigInteger::new(10);
        let b = BigInteger::new(3);

        assert_eq!((a.clone() + b.clone()).to_i64(), Some(13));
        assert_eq!((a.clone() - b.clone()).to_i64(), Some(7));
        assert_eq!((a.clone() * b.clone()).to_i64(), Some(30));
        assert_eq!((a.clone() / b.clone()).to_i64(), Some(3));
        assert_eq!((a % b).to_i64(), Some(1));
    }

    #[test]
    fn test_tdiv_qr_truncates_toward_zero() {
        let a = BigInteger::new(-7);
        let b = BigInteger::new(2);
        let (q, r) = a.tdiv_qr(&b).unwrap();
        assert_eq!(q.to_i64(), Some(-3));
        assert_eq!(r.to_i64(), Some(-1));
    }

    #[test]
    fn test_tdiv_qr_by_zero() {
        let a = BigInteger::new(5);
        assert_eq!(
            a.tdiv_qr(&BigInteger::new(0)),
            Err(NumError::DivisionByZero)
        );
    }

    #[test]
    fn test_shifts_and_mask() {
        let one = BigInteger::new(1);
        let full = &one << 8;
        assert_eq!(full.to_i64(), Some(256));
        assert_eq!((&full >> 3).to_i64(), Some(32));

        let mask = full - one;
        let v = BigInteger::new(0x1ab);
        assert_eq!((&v & &mask).to_i64(), Some(0xab));
    }

    #[test]
    fn test_bit_len() {
        assert_eq!(BigInteger::new(0).bit_len(), 0);
        assert_eq!(BigInteger::new(1).bit_len(), 1);
        assert_eq!(BigInteger::new(255).bit_len(), 8);
        assert_eq!(BigInteger::new(256).bit_len(), 9);
    }

    #[test]
    fn test_pow() {
        assert_eq!(BigInteger::new(3).pow(4).to_i64(), Some(81));
        assert_eq!(BigInteger::new(-2).pow(3).to_i64(), Some(-8));
        assert_eq!(BigInteger::new(5).pow(0).to_i64(), Some(1));
    }

    #[test]
    fn test_large_numbers() {
        let a = BigInteger::from_str_radix("123456789012345678901234567890", 10).unwrap();
        let b = BigInteger::from_str_radix("987654321098765432109876543210", 10).unwrap();
        let sum = a + b;
        assert_eq!(sum.to_string(), "1111111110111111111011111111100");
    }

    #[test]
    fn test_as_i64_overflow() {
        let big = BigInteger::from_str_radix("123456789012345678901234567890", 10).unwrap();
        assert_eq!(big.as_i64(), Err(NumError::ValueTooLarge));
    }

    #[test]
    fn test_singletons() {
        assert!(Zero::is_zero(big_zero()));
        assert_eq!(big_one().to_i64(), Some(1));
    }
}
