//! Univariate polynomials with arbitrary precision integer coefficients.
//!
//! Multiplication uses Kronecker substitution: both operands are packed
//! into single big integers by evaluation at a power of two wide enough
//! that adjacent coefficient slots cannot collide, multiplied once, and
//! unpacked by balanced signed-digit extraction.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use cantor_core::{hash_combine, Canonical, Coeff, Symbol};
use cantor_num::BigInteger;

use crate::dict::{poly_string, SparseDict};

/// Class seed mixed into every integer polynomial hash.
const INT_POLY_SEED: u64 = 0x71f3_0ab8_d24c_5e19;

/// An immutable univariate polynomial over arbitrary precision integers.
#[derive(Clone, PartialEq, Eq)]
pub struct IntPoly {
    var: Symbol,
    dict: SparseDict<u32, BigInteger>,
}

/// Creates an integer polynomial over `var` from a canonical coefficient
/// dictionary.
///
/// # Panics
///
/// Debug builds panic if the dictionary stores a zero coefficient.
#[must_use]
pub fn int_poly(var: Symbol, dict: SparseDict<u32, BigInteger>) -> IntPoly {
    debug_assert!(dict.is_canonical(), "zero coefficient stored in dict");
    IntPoly { var, dict }
}

/// Number of bits needed to represent `x` (0 for 0).
fn bit_length(x: usize) -> usize {
    (usize::BITS - x.leading_zeros()) as usize
}

impl IntPoly {
    /// The polynomial's variable.
    #[must_use]
    pub fn var(&self) -> &Symbol {
        &self.var
    }

    /// The coefficient dictionary.
    #[must_use]
    pub fn dict(&self) -> &SparseDict<u32, BigInteger> {
        &self.dict
    }

    /// The degree (0 for the zero polynomial).
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.dict.degree()
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.dict.is_empty()
    }

    /// Term-wise sum.
    ///
    /// # Panics
    ///
    /// Panics if the variables differ.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        assert!(self.var == other.var, "polynomials over different variables");
        int_poly(self.var.clone(), self.dict.add(&other.dict))
    }

    /// Term-wise difference.
    ///
    /// # Panics
    ///
    /// Panics if the variables differ.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        assert!(self.var == other.var, "polynomials over different variables");
        int_poly(self.var.clone(), self.dict.sub(&other.dict))
    }

    /// Negation.
    #[must_use]
    pub fn neg(&self) -> Self {
        int_poly(self.var.clone(), self.dict.neg())
    }

    /// The largest coefficient magnitude (zero for the zero polynomial).
    #[must_use]
    pub fn max_abs_coef(&self) -> BigInteger {
        let mut max = BigInteger::new(0);
        for (_, c) in self.dict.iter() {
            let a = c.abs();
            if a > max {
                max = a;
            }
        }
        max
    }

    /// Evaluates the polynomial at `x = 2^n` by Horner's method over the
    /// sparse terms.
    #[must_use]
    pub fn eval_bit(&self, n: usize) -> BigInteger {
        let mut iter = self.dict.iter().rev();
        let Some((&first_deg, first)) = iter.next() else {
            return BigInteger::new(0);
        };
        let mut r = first.clone();
        let mut prev = first_deg;
        for (&deg, c) in iter {
            r = (r << (n * (prev - deg) as usize)) + c;
            prev = deg;
        }
        r << (n * prev as usize)
    }

    /// Evaluates the polynomial at `x` by Horner's method over the sparse
    /// terms.
    #[must_use]
    pub fn eval(&self, x: &BigInteger) -> BigInteger {
        let mut iter = self.dict.iter().rev();
        let Some((&first_deg, first)) = iter.next() else {
            return BigInteger::new(0);
        };
        let mut r = first.clone();
        let mut prev = first_deg;
        for (&deg, c) in iter {
            r = r * x.pow(prev - deg) + c;
            prev = deg;
        }
        r * x.pow(prev)
    }

    /// Kronecker substitution product.
    ///
    /// Both operands are packed into single integers by [`Self::eval_bit`]
    /// at a slot width `N` wide enough that adjacent coefficient slots
    /// cannot corrupt each other, multiplied once, and unpacked by a
    /// balanced-base-`2^N` signed-digit decomposition with a running carry.
    /// The carry reconstructs negative coefficients without per-term sign
    /// bookkeeping.
    ///
    /// # Panics
    ///
    /// Panics if the variables differ.
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn mul(&self, other: &Self) -> Self {
        assert!(self.var == other.var, "polynomials over different variables");
        if self.is_zero() || other.is_zero() {
            return int_poly(self.var.clone(), SparseDict::new());
        }

        // Every product coefficient is below slots * Ca * Cb < 2^(N-1);
        // the extra bit keeps the balanced extraction below its 2^(N-1)
        // threshold, not just below the 2^N slot size.
        let slots = (self.degree().min(other.degree()) as usize) + 1;
        let n = bit_length(slots)
            + self.max_abs_coef().bit_len()
            + other.max_abs_coef().bit_len()
            + 1;

        let packed = self.eval_bit(n) * other.eval_bit(n);
        let negative = packed.is_negative();
        let mut s = packed.abs();

        let one = BigInteger::new(1);
        let full = &one << n;
        let thresh = &full >> 1;
        let mask = &full - &one;

        let mut dict = SparseDict::new();
        let mut carry = false;
        let mut deg = 0u32;
        while !Coeff::is_zero(&s) || carry {
            let low = &s & &mask;
            let digit = if low < thresh {
                let d = if carry { low + &one } else { low };
                carry = false;
                d
            } else {
                let d = &low - &full;
                let d = if carry { d + &one } else { d };
                carry = true;
                d
            };
            let digit = if negative { -digit } else { digit };
            dict.set(deg, digit);
            s = s >> n;
            deg += 1;
        }
        int_poly(self.var.clone(), dict)
    }
}

impl Canonical for IntPoly {
    fn canon_cmp(&self, other: &Self) -> Ordering {
        self.var
            .canon_cmp(&other.var)
            .then_with(|| self.dict.canon_cmp(&other.dict))
    }

    fn canon_hash(&self) -> u64 {
        let seed = hash_combine(INT_POLY_SEED, self.var.canon_hash());
        hash_combine(seed, self.dict.canon_hash())
    }
}

impl Hash for IntPoly {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.canon_hash());
    }
}

impl fmt::Display for IntPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", poly_string(&self.dict, self.var.name()))
    }
}

impl fmt::Debug for IntPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntPoly({self})")
    }
}
