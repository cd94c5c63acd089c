//! Secret reconstruction from shares, for scheme verification only.
//!
//! Interpolates the unique degree-`t` polynomial through the supplied points
//! and evaluates it at zero. This path exists to validate the sharing scheme
//! (split-then-reconstruct round trips); the decryption flow never calls it,
//! because running it on private-key shares would rebuild the raw exponent
//! and forfeit the threshold property. Combine ElGamal partials via
//! [`crate::threshold`] instead.

use super::{share::Share, SharingError};
use crate::field::PrimeField;
use crate::lagrange::weights_at_zero;
use num_bigint::BigUint;
use num_traits::Zero;

/// Recovers `f(0)` from at least `t + 1` shares.
///
/// # Arguments
/// * `shares` - the participating shares; all of them are interpolated.
/// * `t` - the threshold the shares were created with.
/// * `q` - the prime exponent-field order.
///
/// # Returns
/// * `Ok(BigUint)` - the reconstructed secret in `[0, q)`.
/// * `Err(SharingError::InsufficientShares)` - fewer than `t + 1` shares.
/// * `Err(SharingError::DuplicateIndex)` - a repeated share index.
pub fn reconstruct_secret(
    shares: &[Share],
    t: u32,
    q: &BigUint,
) -> Result<BigUint, SharingError> {
    if shares.len() < t as usize + 1 {
        return Err(SharingError::InsufficientShares);
    }
    // O(k^2) duplicate scan; quorums are small.
    for i in 0..shares.len() {
        for j in (i + 1)..shares.len() {
            if shares[i].index == shares[j].index {
                return Err(SharingError::DuplicateIndex);
            }
        }
    }

    let indices: Vec<u32> = shares.iter().map(|s| s.index).collect();
    // Duplicates were rejected above; the remaining degenerate case is an
    // index collision modulo q, which is the same caller bug.
    let weights = weights_at_zero(&indices, q).map_err(|_| SharingError::DuplicateIndex)?;

    let field = PrimeField::new(q);
    let mut secret = BigUint::zero();
    for (share, (_, weight)) in shares.iter().zip(weights.pairs()) {
        secret = field.add(&secret, &field.mul(weight, &share.value));
    }

    Ok(secret)
}
