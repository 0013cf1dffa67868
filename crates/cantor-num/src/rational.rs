//! Arbitrary precision rational numbers.
//!
//! [`BigRational`] values are always held in canonical form: reduced to
//! lowest terms, with a positive denominator. Construction canonicalizes,
//! so every operation can assume its inputs already are.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use cantor_core::{hash_of, Canonical};
use num_traits::{One, Zero};

use crate::backend::{Active, Backend, RatRepr};
use crate::error::NumError;
use crate::integer::BigInteger;

/// An arbitrary precision rational number in lowest terms.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BigRational(pub(crate) RatRepr);

impl BigRational {
    /// Creates `num/den` in lowest terms with a positive denominator.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::DivisionByZero`] if `den` is zero.
    pub fn new(num: BigInteger, den: BigInteger) -> Result<Self, NumError> {
        if den.signum() == 0 {
            return Err(NumError::DivisionByZero);
        }
        Ok(Self(Active::rat_new(num.0, den.0)))
    }

    /// Creates a rational equal to the given integer.
    #[must_use]
    pub fn from_integer(n: BigInteger) -> Self {
        Self(Active::rat_from_int(n.0))
    }

    /// The sign-carrying numerator.
    #[must_use]
    pub fn numerator(&self) -> BigInteger {
        BigInteger(Active::rat_num(&self.0))
    }

    /// The positive denominator.
    #[must_use]
    pub fn denominator(&self) -> BigInteger {
        BigInteger(Active::rat_den(&self.0))
    }

    /// Returns true if the denominator is one.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator().is_one()
    }

    /// Converts to an integer when the denominator is one.
    #[must_use]
    pub fn to_integer(&self) -> Option<BigInteger> {
        if self.is_integer() {
            Some(self.numerator())
        } else {
            None
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(Active::rat_abs(&self.0))
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        Active::rat_sign(&self.0)
    }

    /// Returns the reciprocal.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::DivisionByZero`] if the value is zero.
    pub fn recip(&self) -> Result<Self, NumError> {
        if self.signum() == 0 {
            return Err(NumError::DivisionByZero);
        }
        Ok(Self(Active::rat_recip(&self.0)))
    }
}

impl Zero for BigRational {
    fn zero() -> Self {
        Self::from_integer(BigInteger::new(0))
    }

    fn is_zero(&self) -> bool {
        self.signum() == 0
    }
}

impl One for BigRational {
    fn one() -> Self {
        Self::from_integer(BigInteger::new(1))
    }

    fn is_one(&self) -> bool {
        self.numerator().is_one() && self.denominator().is_one()
    }
}

impl Default for BigRational {
    fn default() -> Self {
        Zero::zero()
    }
}

impl Canonical for BigRational {
    fn canon_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn canon_hash(&self) -> u64 {
        hash_of(&self.0)
    }
}

impl fmt::Debug for BigRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigRational({self})")
    }
}

impl fmt::Display for BigRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

impl Add for BigRational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(Active::rat_add(&self.0, &rhs.0))
    }
}

impl Add for &BigRational {
    type Output = BigRational;

    fn add(self, rhs: Self) -> Self::Output {
        BigRational(Active::rat_add(&self.0, &rhs.0))
    }
}

impl Sub for BigRational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(Active::rat_sub(&self.0, &rhs.0))
    }
}

impl Sub for &BigRational {
    type Output = BigRational;

    fn sub(self, rhs: Self) -> Self::Output {
        BigRational(Active::rat_sub(&self.0, &rhs.0))
    }
}

impl Mul for BigRational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(Active::rat_mul(&self.0, &rhs.0))
    }
}

impl Mul for &BigRational {
    type Output = BigRational;

    fn mul(self, rhs: Self) -> Self::Output {
        BigRational(Active::rat_mul(&self.0, &rhs.0))
    }
}

impl Div for BigRational {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`BigRational::recip`] with
    /// multiplication for a checked division.
    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Div for &BigRational {
    type Output = BigRational;

    fn div(self, rhs: Self) -> Self::Output {
        assert!(rhs.signum() != 0, "division by zero");
        BigRational(Active::rat_div(&self.0, &rhs.0))
    }
}

impl Neg for BigRational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(Active::rat_neg(&self.0))
    }
}

impl Neg for &BigRational {
    type Output = BigRational;

    fn neg(self) -> Self::Output {
        BigRational(Active::rat_neg(&self.0))
    }
}

impl From<BigInteger> for BigRational {
    fn from(n: BigInteger) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for BigRational {
    fn from(n: i64) -> Self {
        Self::from_integer(BigInteger::new(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_form() {
        let r = BigRational::new(BigInteger::new(6), BigInteger::new(-4)).unwrap();
        assert_eq!(r.numerator().to_i64(), Some(-3));
        assert_eq!(r.denominator().to_i64(), Some(2));
    }

    #[test]
    fn test_zero_denominator() {
        let r = BigRational::new(BigInteger::new(1), BigInteger::new(0));
        assert_eq!(r, Err(NumError::DivisionByZero));
    }

    #[test]
    fn test_arithmetic() {
        let half = BigRational::new(BigInteger::new(1), BigInteger::new(2)).unwrap();
        let third = BigRational::new(BigInteger::new(1), BigInteger::new(3)).unwrap();

        let sum = &half + &third;
        assert_eq!(sum.to_string(), "5/6");

        let prod = &half * &third;
        assert_eq!(prod.to_string(), "1/6");

        let quot = half / third;
        assert_eq!(quot.to_string(), "3/2");
    }

    #[test]
    fn test_integer_collapse() {
        let r = BigRational::new(BigInteger::new(4), BigInteger::new(2)).unwrap();
        assert!(r.is_integer());
        assert_eq!(r.to_integer().unwrap().to_i64(), Some(2));
        assert_eq!(r.to_string(), "2");
    }

    #[test]
    fn test_recip() {
        let r = BigRational::new(BigInteger::new(-2), BigInteger::new(3)).unwrap();
        assert_eq!(r.recip().unwrap().to_string(), "-3/2");
        assert_eq!(BigRational::zero().recip(), Err(NumError::DivisionByZero));
    }

    #[test]
    fn test_ordering() {
        let half = BigRational::new(BigInteger::new(1), BigInteger::new(2)).unwrap();
        let third = BigRational::new(BigInteger::new(1), BigInteger::new(3)).unwrap();
        assert!(third < half);
        assert!(-half.clone() < third);
    }
}
