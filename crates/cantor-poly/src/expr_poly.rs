//! Univariate polynomials with symbolic coefficients.
//!
//! An [`ExprPoly`] carries coefficients from any [`ExprValue`] domain and
//! allows negative exponents (Laurent-like terms). It knows how to collapse
//! itself back into a generic expression through the domain's Add/Mul/Pow
//! builders, and classifies single-term polynomials so the caller can pick
//! a simpler tree node when one exists.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use cantor_core::{hash_combine, Canonical, Coeff, ExprValue, Symbol};

use crate::dict::{poly_string, SparseDict};

/// Class seed mixed into every symbolic polynomial hash.
const EXPR_POLY_SEED: u64 = 0x2c88_4df1_63b7_a90d;

/// An immutable univariate polynomial with symbolic coefficients.
#[derive(Clone, PartialEq, Eq)]
pub struct ExprPoly<C: ExprValue> {
    var: Symbol,
    dict: SparseDict<i64, C>,
}

/// Creates a symbolic polynomial over `var` from a canonical coefficient
/// dictionary.
///
/// # Panics
///
/// Debug builds panic if the dictionary stores a zero coefficient.
#[must_use]
pub fn expr_poly<C: ExprValue>(var: Symbol, dict: SparseDict<i64, C>) -> ExprPoly<C> {
    debug_assert!(dict.is_canonical(), "zero coefficient stored in dict");
    ExprPoly { var, dict }
}

impl<C: ExprValue> ExprPoly<C> {
    /// The polynomial's variable.
    #[must_use]
    pub fn var(&self) -> &Symbol {
        &self.var
    }

    /// The coefficient dictionary.
    #[must_use]
    pub fn dict(&self) -> &SparseDict<i64, C> {
        &self.dict
    }

    /// The degree (0 for the zero polynomial).
    #[must_use]
    pub fn degree(&self) -> i64 {
        self.dict.degree()
    }

    /// Term-wise sum.
    ///
    /// # Panics
    ///
    /// Panics if the variables differ.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        assert!(self.var == other.var, "polynomials over different variables");
        expr_poly(self.var.clone(), self.dict.add(&other.dict))
    }

    /// Term-wise difference.
    ///
    /// # Panics
    ///
    /// Panics if the variables differ.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        assert!(self.var == other.var, "polynomials over different variables");
        expr_poly(self.var.clone(), self.dict.sub(&other.dict))
    }

    /// Negation.
    #[must_use]
    pub fn neg(&self) -> Self {
        expr_poly(self.var.clone(), self.dict.neg())
    }

    /// Convolution product.
    ///
    /// # Panics
    ///
    /// Panics if the variables differ.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        assert!(self.var == other.var, "polynomials over different variables");
        expr_poly(self.var.clone(), self.dict.mul(&other.dict))
    }

    /// Divides every coefficient by a non-zero scalar.
    #[must_use]
    pub fn div_scalar(&self, scalar: &C) -> Self {
        expr_poly(self.var.clone(), self.dict.div_scalar(scalar))
    }

    /// Rebuilds the polynomial as a generic expression: the sum over all
    /// terms of `coeff * var**exp`, exponent 0 contributing the bare
    /// coefficient.
    #[must_use]
    pub fn get_basic(&self) -> C {
        let mut terms = Vec::with_capacity(self.dict.len());
        for (&exp, coeff) in self.dict.iter() {
            if exp == 0 {
                terms.push(coeff.clone());
            } else {
                let var_pow = C::build_pow(C::from_symbol(&self.var), exp);
                terms.push(C::build_mul(coeff.clone(), var_pow));
            }
        }
        C::build_add(terms)
    }

    /// Evaluates the polynomial at `x`: the sum of `coeff * x**exp` in the
    /// coefficient domain.
    #[must_use]
    pub fn eval(&self, x: &C) -> C {
        let mut terms = Vec::with_capacity(self.dict.len());
        for (&exp, coeff) in self.dict.iter() {
            let power = C::build_pow(x.clone(), exp);
            terms.push(C::build_mul(coeff.clone(), power));
        }
        C::build_add(terms)
    }

    /// The maximum coefficient under the structural order (zero for the
    /// zero polynomial).
    #[must_use]
    pub fn max_coef(&self) -> C {
        let mut max = C::zero();
        for (i, (_, coeff)) in self.dict.iter().enumerate() {
            if i == 0 || max.canon_cmp(coeff) == Ordering::Less {
                max = coeff.clone();
            }
        }
        max
    }

    fn single(&self) -> Option<(i64, &C)> {
        if self.dict.len() == 1 {
            self.dict.iter().next().map(|(&k, v)| (k, v))
        } else {
            None
        }
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.dict.is_empty()
    }

    /// Returns true if this is the constant polynomial 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.single().is_some_and(|(e, c)| e == 0 && c.is_one())
    }

    /// Returns true if this is the constant polynomial -1.
    #[must_use]
    pub fn is_minus_one(&self) -> bool {
        self.single().is_some_and(|(e, c)| e == 0 && c.is_minus_one())
    }

    /// Returns true if this is a bare constant (including zero).
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.is_zero() || self.single().is_some_and(|(e, _)| e == 0)
    }

    /// Returns true if this is exactly the variable.
    #[must_use]
    pub fn is_symbol(&self) -> bool {
        self.single().is_some_and(|(e, c)| e == 1 && c.is_one())
    }

    /// Returns true if the lone term would collapse to a product node:
    /// a non-constant term with a coefficient other than one.
    #[must_use]
    pub fn is_mul(&self) -> bool {
        self.single()
            .is_some_and(|(e, c)| e != 0 && !c.is_one() && !c.is_zero())
    }

    /// Returns true if the lone term would collapse to a power node:
    /// a unit coefficient with an exponent other than zero or one.
    #[must_use]
    pub fn is_pow(&self) -> bool {
        self.single()
            .is_some_and(|(e, c)| e != 0 && e != 1 && c.is_one())
    }
}

impl<C: ExprValue> Canonical for ExprPoly<C> {
    fn canon_cmp(&self, other: &Self) -> Ordering {
        self.var
            .canon_cmp(&other.var)
            .then_with(|| self.dict.canon_cmp(&other.dict))
    }

    fn canon_hash(&self) -> u64 {
        let seed = hash_combine(EXPR_POLY_SEED, self.var.canon_hash());
        hash_combine(seed, self.dict.canon_hash())
    }
}

impl<C: ExprValue> Hash for ExprPoly<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.canon_hash());
    }
}

impl<C: ExprValue> fmt::Display for ExprPoly<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", poly_string(&self.dict, self.var.name()))
    }
}

impl<C: ExprValue> fmt::Debug for ExprPoly<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprPoly({self})")
    }
}
