//! Secret splitting.
//!
//! Forms `f(x) = secret + c1*x + ... + ct*x^t mod q` with uniformly random
//! coefficients and hands participant `i` the evaluation `f(i)`.

use super::{polynomial, share::Share, SharingError};
use crate::field::PrimeField;
use num_bigint::{BigUint, RandBigInt};
use rand_core::{CryptoRng, RngCore};

/// Splits `secret` into `n` shares with threshold `t`.
///
/// Any `t + 1` of the returned shares determine `secret`; any `t` of them
/// are consistent with every possible secret.
///
/// # Arguments
/// * `secret` - canonical exponent in `[0, q)`.
/// * `t` - threshold; a quorum needs `t + 1` participants.
/// * `n` - total number of shares, `n > t`.
/// * `q` - the prime exponent-field order.
/// * `rng` - cryptographic randomness for the polynomial coefficients.
///
/// # Returns
/// * `Ok(Vec<Share>)` with indices `1..=n`.
/// * `Err(SharingError)` on parameter violations.
pub fn split_secret<R: RngCore + CryptoRng + ?Sized>(
    secret: &BigUint,
    t: u32,
    n: u32,
    q: &BigUint,
    rng: &mut R,
) -> Result<Vec<Share>, SharingError> {
    if t < 1 || t >= n {
        return Err(SharingError::InvalidThreshold);
    }
    if secret >= q {
        return Err(SharingError::SecretOutOfRange);
    }

    let field = PrimeField::new(q);

    // coefficients[0] = secret, coefficients[1..=t] random in [0, q)
    let mut coeffs: Vec<BigUint> = Vec::with_capacity(t as usize + 1);
    coeffs.push(secret.clone());
    for _ in 0..t {
        coeffs.push(rng.gen_biguint_below(q));
    }

    let mut shares = Vec::with_capacity(n as usize);
    for i in 1..=n {
        let x = BigUint::from(i);
        let y = polynomial::evaluate(&coeffs, &x, field);
        shares.push(Share::new(i, y)?);
    }

    Ok(shares)
}
