//! The `dashu` backend adapter.

use dashu::base::{Abs, BitTest, Inverse, Signed, UnsignedAbs};
use dashu::integer::IBig;
use dashu::rational::RBig;

use super::Backend;

/// Backend strategy over `dashu`'s `IBig`/`RBig`.
#[derive(Debug, Clone, Copy)]
pub struct DashuBackend;

impl Backend for DashuBackend {
    type Int = IBig;
    type Rat = RBig;

    fn int_from_i64(value: i64) -> IBig {
        IBig::from(value)
    }

    fn int_from_str_radix(s: &str, radix: u32) -> Option<IBig> {
        IBig::from_str_radix(s, radix).ok()
    }

    fn int_to_i64(a: &IBig) -> Option<i64> {
        a.clone().try_into().ok()
    }

    fn int_add(a: &IBig, b: &IBig) -> IBig {
        a + b
    }

    fn int_sub(a: &IBig, b: &IBig) -> IBig {
        a - b
    }

    fn int_mul(a: &IBig, b: &IBig) -> IBig {
        a * b
    }

    fn int_neg(a: &IBig) -> IBig {
        -a
    }

    fn int_tdiv_qr(a: &IBig, b: &IBig) -> (IBig, IBig) {
        (a / b, a % b)
    }

    fn int_and(a: &IBig, b: &IBig) -> IBig {
        debug_assert!(!Signed::is_negative(a) && !Signed::is_negative(b));
        IBig::from(a.clone().unsigned_abs() & b.clone().unsigned_abs())
    }

    fn int_shl(a: &IBig, bits: usize) -> IBig {
        a.clone() << bits
    }

    fn int_shr(a: &IBig, bits: usize) -> IBig {
        a.clone() >> bits
    }

    fn int_abs(a: &IBig) -> IBig {
        a.clone().abs()
    }

    fn int_sign(a: &IBig) -> i8 {
        if *a == IBig::ZERO {
            0
        } else if Signed::is_positive(a) {
            1
        } else {
            -1
        }
    }

    fn int_bit_len(a: &IBig) -> usize {
        a.bit_len()
    }

    fn rat_from_int(n: IBig) -> RBig {
        RBig::from(n)
    }

    fn rat_new(num: IBig, den: IBig) -> RBig {
        debug_assert!(den != IBig::ZERO);
        // `from_parts` reduces to lowest terms; the denominator is unsigned,
        // so its sign moves to the numerator first.
        let num = if Signed::is_negative(&den) { -num } else { num };
        RBig::from_parts(num, den.unsigned_abs())
    }

    fn rat_num(r: &RBig) -> IBig {
        r.numerator().clone()
    }

    fn rat_den(r: &RBig) -> IBig {
        IBig::from(r.denominator().clone())
    }

    fn rat_add(a: &RBig, b: &RBig) -> RBig {
        a + b
    }

    fn rat_sub(a: &RBig, b: &RBig) -> RBig {
        a - b
    }

    fn rat_mul(a: &RBig, b: &RBig) -> RBig {
        a * b
    }

    fn rat_div(a: &RBig, b: &RBig) -> RBig {
        a / b
    }

    fn rat_neg(a: &RBig) -> RBig {
        -a
    }

    fn rat_abs(a: &RBig) -> RBig {
        a.clone().abs()
    }

    fn rat_sign(a: &RBig) -> i8 {
        if *a == RBig::ZERO {
            0
        } else if Signed::is_positive(a) {
            1
        } else {
            -1
        }
    }

    fn rat_recip(a: &RBig) -> RBig {
        debug_assert!(*a != RBig::ZERO);
        a.clone().inv()
    }
}
