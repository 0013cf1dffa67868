//! A compact reference expression tree.
//!
//! This is the minimal stand-in for the full expression-tree collaborator:
//! enough structure to carry symbolic polynomial coefficients and to be the
//! target of "rebuild as generic expression". It implements the [`Coeff`]
//! and [`ExprValue`] capability traits, which is all the polynomial layer
//! ever sees of it.

use std::cmp::Ordering;
use std::fmt;

use crate::canonical::{hash_combine, seq_compare, Canonical};
use crate::symbol::Symbol;
use crate::traits::{Coeff, ExprValue};

/// A symbolic expression value.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Expr {
    /// An integer literal.
    Integer(i64),
    /// A symbolic variable.
    Symbol(Symbol),
    /// A sum of at least two terms.
    Add(Vec<Expr>),
    /// A product of at least two factors.
    Mul(Vec<Expr>),
    /// A base raised to an integer exponent.
    Pow(Box<Expr>, i64),
}

impl Expr {
    /// Returns true if this node is an atom (integer or symbol).
    #[must_use]
    pub fn is_atom(&self) -> bool {
        matches!(self, Expr::Integer(_) | Expr::Symbol(_))
    }

    /// Returns the integer value of an integer literal.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Expr::Integer(n) => Some(*n),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Expr::Integer(_) => 0,
            Expr::Symbol(_) => 1,
            Expr::Add(_) => 2,
            Expr::Mul(_) => 3,
            Expr::Pow(_, _) => 4,
        }
    }
}

impl Canonical for Expr {
    fn canon_cmp(&self, other: &Self) -> Ordering {
        let rank = self.rank().cmp(&other.rank());
        if rank != Ordering::Equal {
            return rank;
        }
        match (self, other) {
            (Expr::Integer(a), Expr::Integer(b)) => a.cmp(b),
            (Expr::Symbol(a), Expr::Symbol(b)) => a.canon_cmp(b),
            (Expr::Add(a), Expr::Add(b)) | (Expr::Mul(a), Expr::Mul(b)) => seq_compare(a, b),
            (Expr::Pow(ba, ea), Expr::Pow(bb, eb)) => {
                let cmp = ba.canon_cmp(bb);
                if cmp != Ordering::Equal {
                    return cmp;
                }
                ea.cmp(eb)
            }
            _ => unreachable!("ranks already compared"),
        }
    }

    #[allow(clippy::cast_sign_loss)]
    fn canon_hash(&self) -> u64 {
        let seed = u64::from(self.rank()).wrapping_add(0x45);
        match self {
            Expr::Integer(n) => hash_combine(seed, *n as u64),
            Expr::Symbol(s) => hash_combine(seed, s.canon_hash()),
            Expr::Add(args) | Expr::Mul(args) => args
                .iter()
                .fold(seed, |acc, a| hash_combine(acc, a.canon_hash())),
            Expr::Pow(base, exp) => {
                hash_combine(hash_combine(seed, base.canon_hash()), *exp as u64)
            }
        }
    }
}

impl Coeff for Expr {
    fn zero() -> Self {
        Expr::Integer(0)
    }

    fn one() -> Self {
        Expr::Integer(1)
    }

    fn is_zero(&self) -> bool {
        matches!(self, Expr::Integer(0))
    }

    fn is_one(&self) -> bool {
        matches!(self, Expr::Integer(1))
    }

    fn is_minus_one(&self) -> bool {
        matches!(self, Expr::Integer(-1))
    }

    fn add(&self, other: &Self) -> Self {
        Expr::build_add(vec![self.clone(), other.clone()])
    }

    fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    fn mul(&self, other: &Self) -> Self {
        Expr::build_mul(self.clone(), other.clone())
    }

    fn div(&self, other: &Self) -> Self {
        if let (Expr::Integer(a), Expr::Integer(b)) = (self, other) {
            if *b != 0 && a % b == 0 {
                return Expr::Integer(a / b);
            }
        }
        Expr::build_mul(self.clone(), Expr::build_pow(other.clone(), -1))
    }

    fn neg(&self) -> Self {
        match self {
            Expr::Integer(n) => Expr::Integer(-n),
            _ => Expr::build_mul(Expr::Integer(-1), self.clone()),
        }
    }

    fn coeff_str(&self) -> String {
        // Sums bind looser than the implicit `*` of a coefficient position.
        match self {
            Expr::Add(_) => format!("({self})"),
            _ => self.to_string(),
        }
    }
}

impl ExprValue for Expr {
    fn from_i64(n: i64) -> Self {
        Expr::Integer(n)
    }

    fn from_symbol(sym: &Symbol) -> Self {
        Expr::Symbol(sym.clone())
    }

    fn build_add(terms: Vec<Self>) -> Self {
        let mut constant = 0i64;
        let mut rest = Vec::new();
        for term in terms {
            match term {
                Expr::Integer(n) => constant += n,
                other => rest.push(other),
            }
        }
        if rest.is_empty() {
            return Expr::Integer(constant);
        }
        if constant != 0 {
            rest.push(Expr::Integer(constant));
        }
        if rest.len() == 1 {
            if let Some(single) = rest.pop() {
                return single;
            }
        }
        Expr::Add(rest)
    }

    fn build_mul(a: Self, b: Self) -> Self {
        if a.is_zero() || b.is_zero() {
            return Expr::Integer(0);
        }
        if a.is_one() {
            return b;
        }
        if b.is_one() {
            return a;
        }
        if let (Expr::Integer(x), Expr::Integer(y)) = (&a, &b) {
            if let Some(p) = x.checked_mul(*y) {
                return Expr::Integer(p);
            }
        }
        Expr::Mul(vec![a, b])
    }

    fn build_pow(base: Self, exp: i64) -> Self {
        if exp == 0 {
            return Expr::Integer(1);
        }
        if exp == 1 {
            return base;
        }
        if let Expr::Integer(n) = base {
            if exp > 0 {
                if let Ok(e) = u32::try_from(exp) {
                    if let Some(p) = n.checked_pow(e) {
                        return Expr::Integer(p);
                    }
                }
            }
        }
        Expr::Pow(Box::new(base), exp)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Integer(n) => write!(f, "{n}"),
            Expr::Symbol(s) => write!(f, "{s}"),
            Expr::Add(args) => {
                for (i, a) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, " + ")?;
                    }
                    write!(f, "{a}")?;
                }
                Ok(())
            }
            Expr::Mul(args) => {
                for (i, a) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, "*")?;
                    }
                    if matches!(a, Expr::Add(_)) {
                        write!(f, "({a})")?;
                    } else {
                        write!(f, "{a}")?;
                    }
                }
                Ok(())
            }
            Expr::Pow(base, exp) => {
                if base.is_atom() {
                    write!(f, "{base}")?;
                } else {
                    write!(f, "({base})")?;
                }
                if *exp < 0 {
                    write!(f, "**({exp})")
                } else {
                    write!(f, "**{exp}")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::symbol;

    #[test]
    fn test_builders_fold_constants() {
        let sum = Expr::build_add(vec![Expr::Integer(2), Expr::Integer(3)]);
        assert_eq!(sum, Expr::Integer(5));

        let prod = Expr::build_mul(Expr::Integer(4), Expr::Integer(-2));
        assert_eq!(prod, Expr::Integer(-8));

        assert_eq!(Expr::build_pow(Expr::Integer(2), 10), Expr::Integer(1024));
        assert_eq!(Expr::build_pow(Expr::Integer(7), 0), Expr::Integer(1));
    }

    #[test]
    fn test_builders_keep_symbolic_structure() {
        let x = Expr::from_symbol(&symbol("x"));
        let term = Expr::build_mul(Expr::Integer(3), Expr::build_pow(x.clone(), 2));
        assert_eq!(term.to_string(), "3*x**2");

        let sum = Expr::build_add(vec![term, Expr::Integer(1)]);
        assert_eq!(sum.to_string(), "3*x**2 + 1");
    }

    #[test]
    fn test_canonical_order_is_total() {
        let x = Expr::from_symbol(&symbol("x"));
        let y = Expr::from_symbol(&symbol("y"));
        let n = Expr::Integer(5);

        assert_eq!(n.canon_cmp(&x), Ordering::Less);
        assert_eq!(x.canon_cmp(&y), Ordering::Less);
        assert_eq!(x.canon_cmp(&x), Ordering::Equal);
        assert!(x.canon_eq(&Expr::from_symbol(&symbol("x"))));
    }

    #[test]
    fn test_coeff_str_parenthesizes_sums() {
        let x = Expr::from_symbol(&symbol("x"));
        let sum = Expr::Add(vec![x.clone(), Expr::Integer(1)]);
        assert_eq!(sum.coeff_str(), "(x + 1)");
        assert_eq!(Expr::Integer(-2).coeff_str(), "-2");
    }

    #[test]
    fn test_negative_exponent_display() {
        let x = Expr::from_symbol(&symbol("x"));
        let p = Expr::build_pow(x, -2);
        assert_eq!(p.to_string(), "x**(-2)");
    }
}
