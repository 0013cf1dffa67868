//! Exact polynomial division.

use cantor_core::Coeff;

use crate::dict::SparseDict;
use crate::error::PolyError;
use crate::int_poly::{int_poly, IntPoly};

/// Tests whether `a` exactly divides `b`, returning the quotient when it
/// does.
///
/// `Ok(None)` means the division is inexact (or `a` is zero); it is a
/// normal negative answer, not an error. `Ok(Some(q))` guarantees
/// `a * q == b` exactly.
///
/// Works by repeated leading-term elimination: the leading coefficients
/// must divide exactly at every step, and the running remainder must reach
/// zero before its degree drops below `a`'s.
///
/// # Errors
///
/// Returns [`PolyError::VariableMismatch`] if the two polynomials are over
/// structurally different variables.
pub fn divides(a: &IntPoly, b: &IntPoly) -> Result<Option<IntPoly>, PolyError> {
    if a.var() != b.var() {
        return Err(PolyError::VariableMismatch);
    }
    if a.is_zero() {
        return Ok(None);
    }

    let mut quo = SparseDict::new();
    let mut rem = b.clone();

    while rem.dict().len() >= a.dict().len() {
        let a_deg = a.degree();
        let b_deg = rem.degree();
        if b_deg < a_deg {
            return Ok(None);
        }

        // Leading coefficient of `a` is non-zero by the canonical invariant.
        let lead_a = a.dict().leading_coeff();
        let lead_b = rem.dict().leading_coeff();
        let q = &lead_b / &lead_a;
        let r = &lead_b % &lead_a;
        if !Coeff::is_zero(&r) {
            return Ok(None);
        }

        quo.set(b_deg - a_deg, q.clone());
        let term = int_poly(
            a.var().clone(),
            SparseDict::from_entries([(b_deg - a_deg, q)]),
        );
        rem = rem.sub(&a.mul(&term));
    }

    if rem.is_zero() {
        Ok(Some(int_poly(a.var().clone(), quo)))
    } else {
        Ok(None)
    }
}
