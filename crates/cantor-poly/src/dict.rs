//! Canonical sparse coefficient dictionaries.
//!
//! A [`SparseDict`] maps exponents to non-zero coefficients; the empty
//! dictionary is the zero polynomial. Every operation re-establishes the
//! canonical invariant: a coefficient that becomes zero is removed, never
//! stored. Equality, ordering and hashing go through the structural
//! container algorithms so that two semantically equal dictionaries built
//! through different code paths compare and hash identically.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::{self, Debug, Display, Write};
use std::hash::{Hash, Hasher};

use cantor_core::{map_compare, map_eq, map_hash_combine, render_map, Canonical, Coeff};

/// Class seed mixed into every dictionary hash.
const DICT_SEED: u64 = 0x53d1_c7a2_9b4e_0f66;

/// An exponent key: a machine integer with a total order and an `i64` view
/// for rendering.
pub trait Exponent:
    Copy + Ord + std::hash::Hash + Default + Debug + Display + Canonical
{
    /// Exponent addition (for term convolution).
    #[must_use]
    fn add(self, other: Self) -> Self;

    /// The exponent as a signed machine integer.
    fn to_i64(self) -> i64;
}

impl Exponent for u32 {
    fn add(self, other: Self) -> Self {
        self + other
    }

    fn to_i64(self) -> i64 {
        i64::from(self)
    }
}

impl Exponent for i64 {
    fn add(self, other: Self) -> Self {
        self + other
    }

    fn to_i64(self) -> i64 {
        self
    }
}

/// A sparse exponent-to-coefficient mapping in canonical form.
///
/// No zero-valued entry is ever stored; the empty dictionary is the zero
/// polynomial.
#[derive(Clone)]
pub struct SparseDict<K: Exponent, V: Coeff> {
    map: BTreeMap<K, V>,
}

impl<K: Exponent, V: Coeff> SparseDict<K, V> {
    /// Creates the empty (zero) dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    /// Builds a dictionary from entries, dropping zero coefficients and
    /// summing duplicates.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut dict = Self::new();
        for (k, v) in entries {
            dict.add_term(k, &v);
        }
        dict
    }

    /// Returns true if the canonical invariant holds: no stored coefficient
    /// is zero.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.map.values().all(|v| !v.is_zero())
    }

    /// Stores `value` at `key`, removing the entry when `value` is zero.
    pub fn set(&mut self, key: K, value: V) {
        if value.is_zero() {
            self.map.remove(&key);
        } else {
            self.map.insert(key, value);
        }
    }

    /// Adds `value` into the coefficient at `key`, pruning a zero result.
    pub fn add_term(&mut self, key: K, value: &V) {
        let sum = match self.map.get(&key) {
            Some(existing) => existing.add(value),
            None => value.clone(),
        };
        self.set(key, sum);
    }

    /// The coefficient at `key`, or zero when absent.
    #[must_use]
    pub fn get(&self, key: K) -> V {
        self.map.get(&key).cloned().unwrap_or_else(V::zero)
    }

    /// The largest stored exponent, or `K::default()` for the zero
    /// polynomial.
    #[must_use]
    pub fn degree(&self) -> K {
        self.map.keys().next_back().copied().unwrap_or_default()
    }

    /// The coefficient of the highest-degree term, or zero for the zero
    /// polynomial.
    #[must_use]
    pub fn leading_coeff(&self) -> V {
        self.map
            .values()
            .next_back()
            .cloned()
            .unwrap_or_else(V::zero)
    }

    /// The number of stored terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates the terms in ascending exponent order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, &V)> {
        self.map.iter()
    }

    /// Term-wise sum.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut out = self.clone();
        for (k, v) in &other.map {
            out.add_term(*k, v);
        }
        out
    }

    /// Term-wise difference.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let mut out = self.clone();
        for (k, v) in &other.map {
            out.add_term(*k, &v.neg());
        }
        out
    }

    /// Negation.
    #[must_use]
    pub fn neg(&self) -> Self {
        let mut out = Self::new();
        for (k, v) in &self.map {
            out.map.insert(*k, v.neg());
        }
        out
    }

    /// Term-by-term convolution product.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let mut out = Self::new();
        for (ka, va) in &self.map {
            for (kb, vb) in &other.map {
                out.add_term(ka.add(*kb), &va.mul(vb));
            }
        }
        out
    }

    /// Multiplies every coefficient by a scalar.
    #[must_use]
    pub fn scale(&self, scalar: &V) -> Self {
        let mut out = Self::new();
        for (k, v) in &self.map {
            out.set(*k, v.mul(scalar));
        }
        out
    }

    /// Divides every coefficient by a non-zero scalar, pruning terms whose
    /// quotient is zero.
    #[must_use]
    pub fn div_scalar(&self, scalar: &V) -> Self {
        let mut out = Self::new();
        for (k, v) in &self.map {
            out.set(*k, v.div(scalar));
        }
        out
    }

    /// Multiplies by the single term `coeff * x^key`.
    #[must_use]
    pub fn mul_term(&self, key: K, coeff: &V) -> Self {
        let mut out = Self::new();
        for (k, v) in &self.map {
            out.set(k.add(key), v.mul(coeff));
        }
        out
    }
}

impl<K: Exponent, V: Coeff> Default for SparseDict<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Exponent, V: Coeff> PartialEq for SparseDict<K, V> {
    fn eq(&self, other: &Self) -> bool {
        map_eq(&self.map, &other.map)
    }
}

impl<K: Exponent, V: Coeff> Eq for SparseDict<K, V> {}

impl<K: Exponent, V: Coeff> PartialOrd for SparseDict<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Exponent, V: Coeff> Ord for SparseDict<K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        map_compare(&self.map, &other.map)
    }
}

impl<K: Exponent, V: Coeff> Hash for SparseDict<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.canon_hash());
    }
}

impl<K: Exponent, V: Coeff> Canonical for SparseDict<K, V> {
    fn canon_cmp(&self, other: &Self) -> Ordering {
        map_compare(&self.map, &other.map)
    }

    fn canon_hash(&self) -> u64 {
        map_hash_combine(DICT_SEED, self.map.iter())
    }
}

impl<K: Exponent, V: Coeff> Debug for SparseDict<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SparseDict{}", render_map(self.map.iter()))
    }
}

/// Renders a polynomial over `var` from highest to lowest degree.
///
/// Degree 0 prints the bare coefficient, coefficients of magnitude one
/// print the (possibly negated) variable alone, all others print
/// `coefficient*variable`. Degree 1 omits the exponent suffix, negative
/// exponents are parenthesized. The first term carries its own sign; later
/// terms join with `" + "` or `" - "`, the sign stripped from the term
/// text. The zero polynomial renders as `"0"`.
pub(crate) fn poly_string<K: Exponent, V: Coeff>(dict: &SparseDict<K, V>, var: &str) -> String {
    if dict.is_empty() {
        return String::from("0");
    }
    let mut out = String::new();
    for (i, (k, v)) in dict.iter().rev().enumerate() {
        let term = term_string(k.to_i64(), v, var);
        if i == 0 {
            out.push_str(&term);
        } else if let Some(rest) = term.strip_prefix('-') {
            let _ = write!(out, " - {rest}");
        } else {
            let _ = write!(out, " + {term}");
        }
    }
    out
}

fn term_string<V: Coeff>(exp: i64, coeff: &V, var: &str) -> String {
    if exp == 0 {
        return coeff.to_string();
    }
    let var_part = match exp {
        1 => var.to_string(),
        e if e < 0 => format!("{var}**({e})"),
        e => format!("{var}**{e}"),
    };
    if coeff.is_one() {
        var_part
    } else if coeff.is_minus_one() {
        format!("-{var_part}")
    } else {
        format!("{}*{var_part}", coeff.coeff_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cantor_num::BigInteger;

    fn dict(entries: &[(u32, i64)]) -> SparseDict<u32, BigInteger> {
        SparseDict::from_entries(
            entries.iter().map(|&(k, v)| (k, BigInteger::new(v))),
        )
    }

    #[test]
    fn test_zero_pruning() {
        let d = dict(&[(2, 1), (1, 0), (0, 3)]);
        assert_eq!(d.len(), 2);
        assert!(d.is_canonical());
        assert_eq!(d.get(1), BigInteger::new(0));
    }

    #[test]
    fn test_add_cancellation() {
        let a = dict(&[(1, 2), (0, 3)]);
        let b = dict(&[(1, -2), (0, 4)]);
        let sum = a.add(&b);
        assert_eq!(sum, dict(&[(0, 7)]));
        assert!(sum.is_canonical());
    }

    #[test]
    fn test_sub_to_zero() {
        let a = dict(&[(3, 5), (1, -2)]);
        assert!(a.sub(&a).is_empty());
    }

    #[test]
    fn test_convolution() {
        // (x + 1)(x - 1) = x^2 - 1
        let a = dict(&[(1, 1), (0, 1)]);
        let b = dict(&[(1, 1), (0, -1)]);
        assert_eq!(a.mul(&b), dict(&[(2, 1), (0, -1)]));
    }

    #[test]
    fn test_degree_and_leading() {
        let d = dict(&[(4, -7), (1, 2)]);
        assert_eq!(d.degree(), 4);
        assert_eq!(d.leading_coeff(), BigInteger::new(-7));

        let zero = dict(&[]);
        assert_eq!(zero.degree(), 0);
        assert_eq!(zero.leading_coeff(), BigInteger::new(0));
    }

    #[test]
    fn test_ordering_size_first() {
        let small = dict(&[(9, 100)]);
        let big = dict(&[(0, 1), (1, 1)]);
        assert!(small < big);
    }

    #[test]
    fn test_hash_path_independent() {
        // Built straight vs. built through arithmetic.
        let direct = dict(&[(2, 1), (0, -1)]);
        let computed = dict(&[(1, 1), (0, 1)]).mul(&dict(&[(1, 1), (0, -1)]));
        assert_eq!(direct.canon_hash(), computed.canon_hash());
    }

    #[test]
    fn test_div_scalar() {
        let d = dict(&[(2, 6), (0, 3)]);
        let half = d.div_scalar(&BigInteger::new(3));
        assert_eq!(half, dict(&[(2, 2), (0, 1)]));
        // Truncating coefficient division prunes terms that vanish.
        let q = dict(&[(1, 1), (0, 5)]).div_scalar(&BigInteger::new(2));
        assert_eq!(q, dict(&[(0, 2)]));
    }

    #[test]
    fn test_rendering() {
        let d = dict(&[(2, 1), (1, -1), (0, 3)]);
        assert_eq!(poly_string(&d, "x"), "x**2 - x + 3");
        assert_eq!(poly_string(&dict(&[(0, 1)]), "x"), "1");
        assert_eq!(poly_string(&dict(&[(1, 1)]), "x"), "x");
        assert_eq!(poly_string(&dict(&[]), "x"), "0");
        assert_eq!(poly_string(&dict(&[(3, -2), (1, 1)]), "y"), "-2*y**3 + y");
    }

    #[test]
    fn test_rendering_negative_exponent() {
        let d: SparseDict<i64, BigInteger> = SparseDict::from_entries(
            [(-2i64, BigInteger::new(4)), (0, BigInteger::new(1))],
        );
        assert_eq!(poly_string(&d, "x"), "1 + 4*x**(-2)");
    }
}
