//! The `num-bigint`/`num-rational` backend adapter.

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

use super::Backend;

/// Backend strategy over the `num` crate family.
#[derive(Debug, Clone, Copy)]
pub struct NumBackend;

impl Backend for NumBackend {
    type Int = BigInt;
    type Rat = BigRational;

    fn int_from_i64(value: i64) -> BigInt {
        BigInt::from(value)
    }

    fn int_from_str_radix(s: &str, radix: u32) -> Option<BigInt> {
        BigInt::parse_bytes(s.as_bytes(), radix)
    }

    fn int_to_i64(a: &BigInt) -> Option<i64> {
        a.to_i64()
    }

    fn int_add(a: &BigInt, b: &BigInt) -> BigInt {
        a + b
    }

    fn int_sub(a: &BigInt, b: &BigInt) -> BigInt {
        a - b
    }

    fn int_mul(a: &BigInt, b: &BigInt) -> BigInt {
        a * b
    }

    fn int_neg(a: &BigInt) -> BigInt {
        -a
    }

    fn int_tdiv_qr(a: &BigInt, b: &BigInt) -> (BigInt, BigInt) {
        // `div_rem` truncates toward zero, matching the contract.
        a.div_rem(b)
    }

    fn int_and(a: &BigInt, b: &BigInt) -> BigInt {
        debug_assert!(!a.is_negative() && !b.is_negative());
        a & b
    }

    fn int_shl(a: &BigInt, bits: usize) -> BigInt {
        a << bits
    }

    fn int_shr(a: &BigInt, bits: usize) -> BigInt {
        a >> bits
    }

    fn int_abs(a: &BigInt) -> BigInt {
        a.abs()
    }

    fn int_sign(a: &BigInt) -> i8 {
        match a.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn int_bit_len(a: &BigInt) -> usize {
        a.bits() as usize
    }

    fn rat_from_int(n: BigInt) -> BigRational {
        BigRational::from_integer(n)
    }

    fn rat_new(num: BigInt, den: BigInt) -> BigRational {
        debug_assert!(!den.is_zero());
        // `Ratio::new` reduces to lowest terms with a positive denominator.
        BigRational::new(num, den)
    }

    fn rat_num(r: &BigRational) -> BigInt {
        r.numer().clone()
    }

    fn rat_den(r: &BigRational) -> BigInt {
        r.denom().clone()
    }

    fn rat_add(a: &BigRational, b: &BigRational) -> BigRational {
        a + b
    }

    fn rat_sub(a: &BigRational, b: &BigRational) -> BigRational {
        a - b
    }

    fn rat_mul(a: &BigRational, b: &BigRational) -> BigRational {
        a * b
    }

    fn rat_div(a: &BigRational, b: &BigRational) -> BigRational {
        a / b
    }

    fn rat_neg(a: &BigRational) -> BigRational {
        -a
    }

    fn rat_abs(a: &BigRational) -> BigRational {
        a.abs()
    }

    fn rat_sign(a: &BigRational) -> i8 {
        if a.is_zero() {
            0
        } else if a.is_negative() {
            -1
        } else {
            1
        }
    }

    fn rat_recip(a: &BigRational) -> BigRational {
        debug_assert!(!a.is_zero());
        a.recip()
    }
}
