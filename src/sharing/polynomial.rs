//! Polynomial evaluation over a prime field.
//!
//! Shared by `split` and tests to avoid duplicating the Horner loop.

use crate::field::PrimeField;
use num_bigint::BigUint;
use num_traits::Zero;

/// Evaluates `f(x) = c[0] + c[1]*x + ... + c[t]*x^t mod m` by Horner's method.
pub(crate) fn evaluate(coeffs: &[BigUint], x: &BigUint, field: PrimeField<'_>) -> BigUint {
    let mut result = match coeffs.last() {
        Some(top) => field.reduce(top),
        None => return BigUint::zero(),
    };
    for coeff in coeffs.iter().rev().skip(1) {
        result = field.add(&field.mul(&result, x), coeff);
    }
    result
}
