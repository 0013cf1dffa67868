//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{div_rational, i_nth_root, isqrt, perfect_square, BigInteger};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        // Integer ring axioms

        #[test]
        fn integer_add_commutative(a in small_int(), b in small_int()) {
            let a = BigInteger::new(a);
            let b = BigInteger::new(b);
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn integer_mul_associative(a in small_int(), b in small_int(), c in small_int()) {
            let a = BigInteger::new(a);
            let b = BigInteger::new(b);
            let c = BigInteger::new(c);
            prop_assert_eq!(
                (a.clone() * b.clone()) * c.clone(),
                a * (b * c)
            );
        }

        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = BigInteger::new(a);
            let b = BigInteger::new(b);
            let c = BigInteger::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn tdiv_reconstructs(a in small_int(), b in non_zero_int()) {
            let a = BigInteger::new(a);
            let b = BigInteger::new(b);
            let (q, r) = a.tdiv_qr(&b).unwrap();
            // a == q*b + r, with |r| < |b| and r matching a's sign.
            prop_assert_eq!(&(&q * &b) + &r, a.clone());
            prop_assert!(r.abs() < b.abs());
            prop_assert!(r.signum() == 0 || r.signum() == a.signum());
        }

        // Rational reconstruction

        #[test]
        fn rational_reconstructs(num in small_int(), den in non_zero_int()) {
            let n = BigInteger::new(num);
            let d = BigInteger::new(den);
            let r = div_rational(&n, &d).unwrap();
            // num/den and the canonical form name the same rational:
            // num * den' == num' * den.
            prop_assert_eq!(&n * &r.denominator(), r.numerator() * d.clone());
            prop_assert!(r.denominator().signum() > 0);
        }

        // Root bounds

        #[test]
        fn isqrt_bounds(n in 0i64..1_000_000i64) {
            let n = BigInteger::new(n);
            let r = isqrt(&n);
            let r1 = r.clone() + BigInteger::new(1);
            prop_assert!(&r * &r <= n);
            prop_assert!(&r1 * &r1 > n);
        }

        #[test]
        fn isqrt_detects_squares(a in 0i64..10_000i64) {
            let a = BigInteger::new(a);
            let sq = &a * &a;
            prop_assert_eq!(isqrt(&sq), a);
            prop_assert!(perfect_square(&sq));
        }

        #[test]
        fn nth_root_floor(n in 1i64..1_000_000i64, k in 2u32..6u32) {
            let n = BigInteger::new(n);
            let (r, exact) = i_nth_root(&n, k).unwrap();
            prop_assert!(r.pow(k) <= n);
            let r1 = r.clone() + BigInteger::new(1);
            prop_assert!(r1.pow(k) > n);
            prop_assert_eq!(exact, r.pow(k) == n);
        }
    }
}
