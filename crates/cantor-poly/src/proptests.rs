//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use cantor_core::{symbol, Canonical};
    use cantor_num::BigInteger;

    use crate::dict::SparseDict;
    use crate::div::divides;
    use crate::int_poly::{int_poly, IntPoly};

    // Strategy for sparse small-degree, small-coefficient polynomials:
    // up to five terms with degrees below 8 and coefficients in [-50, 50].
    fn small_poly() -> impl Strategy<Value = IntPoly> {
        prop::collection::vec((0u32..8u32, -50i64..=50i64), 0..5).prop_map(|terms| {
            int_poly(
                symbol("x"),
                SparseDict::from_entries(
                    terms.into_iter().map(|(k, v)| (k, BigInteger::new(v))),
                ),
            )
        })
    }

    fn small_dict() -> impl Strategy<Value = SparseDict<u32, BigInteger>> {
        prop::collection::vec((0u32..6u32, -20i64..=20i64), 0..4).prop_map(|terms| {
            SparseDict::from_entries(terms.into_iter().map(|(k, v)| (k, BigInteger::new(v))))
        })
    }

    proptest! {
        // Kronecker substitution against the naive convolution.

        #[test]
        fn kronecker_matches_convolution(a in small_poly(), b in small_poly()) {
            let naive = int_poly(symbol("x"), a.dict().mul(b.dict()));
            prop_assert_eq!(a.mul(&b), naive);
        }

        #[test]
        fn mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn mul_distributes_over_add(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(
                a.mul(&b.add(&c)),
                a.mul(&b).add(&a.mul(&c))
            );
        }

        // Divisibility round trip.

        #[test]
        fn divides_recovers_factor(a in small_poly(), b in small_poly()) {
            prop_assume!(!a.is_zero());
            let product = a.mul(&b);
            // Term cancellation in the product can push it below `a`'s term
            // count, where the elimination loop gives up; when it answers,
            // the quotient is exactly the other factor.
            if let Ok(Some(q)) = divides(&a, &product) {
                prop_assert_eq!(q, b);
            }
        }

        #[test]
        fn divides_quotient_reconstructs(a in small_poly(), b in small_poly()) {
            if let Ok(Some(q)) = divides(&a, &b) {
                prop_assert_eq!(a.mul(&q), b);
            }
        }

        // Canonical invariant: no operation stores a zero coefficient.

        #[test]
        fn operations_stay_canonical(a in small_dict(), b in small_dict()) {
            prop_assert!(a.add(&b).is_canonical());
            prop_assert!(a.sub(&b).is_canonical());
            prop_assert!(a.neg().is_canonical());
            prop_assert!(a.mul(&b).is_canonical());
            prop_assert!(a.div_scalar(&BigInteger::new(2)).is_canonical());
        }

        // The structural order is consistent with equality and evaluation.

        #[test]
        fn compare_consistent_with_eq(a in small_dict(), b in small_dict()) {
            let cmp = a.canon_cmp(&b);
            prop_assert_eq!(cmp == std::cmp::Ordering::Equal, a == b);
            prop_assert_eq!(cmp, b.canon_cmp(&a).reverse());
        }

        #[test]
        fn compare_transitive(a in small_dict(), b in small_dict(), c in small_dict()) {
            use std::cmp::Ordering::Less;
            if a.canon_cmp(&b) == Less && b.canon_cmp(&c) == Less {
                prop_assert_eq!(a.canon_cmp(&c), Less);
            }
        }

        #[test]
        fn equal_dicts_hash_equal(a in small_dict()) {
            let b = a.clone();
            prop_assert_eq!(a.canon_hash(), b.canon_hash());
        }

        // Multiplication commutes with evaluation.

        #[test]
        fn eval_is_homomorphic(a in small_poly(), b in small_poly(), x in -9i64..9i64) {
            let x = BigInteger::new(x);
            prop_assert_eq!(
                a.mul(&b).eval(&x),
                a.eval(&x) * b.eval(&x)
            );
        }
    }
}
