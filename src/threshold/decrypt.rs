//! Partial decryption and quorum combination.
//!
//! Correctness: with `D_i = B^{a_i}` and weights satisfying
//! `Σ w_i * a_i ≡ a (mod q)`, the product `Π D_i^{w_i} = B^{Σ w_i * a_i}`
//! equals `B^a mod p`: exponentiation distributes over the modular sum the
//! weights reconstruct, so the group-element combination matches a direct
//! `B^a mod p` with no intermediate reconstruction of `a`.

use super::{PartialDecryption, SharedSecret, ThresholdError};
use crate::field::PrimeField;
use crate::lagrange::LagrangeWeightSet;
use crate::sharing::Share;
use num_bigint::BigUint;

/// Computes one participant's partial decryption `B^{a_i} mod p`.
///
/// Pure and side-effect free; each participant can run this independently.
pub fn partial_decrypt(b: &BigUint, share: &Share, p: &BigUint) -> PartialDecryption {
    let field = PrimeField::new(p);
    PartialDecryption {
        index: share.index,
        value: field.pow(b, &share.value),
    }
}

/// Combines a quorum of partial decryptions into the shared secret
/// `Π partials_i^{weight_i} mod p = B^a mod p`.
///
/// The partials must pair up with the weight set index-for-index, in the
/// same order, with no repeats; the weight set is expected to come from
/// [`crate::lagrange::weights_at_zero`] over a quorum of exactly `t + 1`
/// indices.
///
/// # Returns
/// * `Ok(SharedSecret)` on success.
/// * `Err(ThresholdError::IndexSetMismatch)` when the pairing is violated.
pub fn combine_partials(
    partials: &[PartialDecryption],
    weights: &LagrangeWeightSet,
    p: &BigUint,
) -> Result<SharedSecret, ThresholdError> {
    if partials.is_empty() || partials.len() != weights.len() {
        return Err(ThresholdError::IndexSetMismatch);
    }
    for (partial, (index, _)) in partials.iter().zip(weights.pairs()) {
        if partial.index != *index {
            return Err(ThresholdError::IndexSetMismatch);
        }
    }
    // O(k^2) duplicate scan; quorums are small.
    for i in 0..partials.len() {
        for j in (i + 1)..partials.len() {
            if partials[i].index == partials[j].index {
                return Err(ThresholdError::IndexSetMismatch);
            }
        }
    }

    log::debug!("combining {} partial decryptions", partials.len());

    let field = PrimeField::new(p);
    let mut result = BigUint::from(1u32);
    for (partial, (_, weight)) in partials.iter().zip(weights.pairs()) {
        let term = field.pow(&partial.value, weight);
        result = field.mul(&result, &term);
    }

    Ok(SharedSecret::new(result))
}
