//! Threshold ElGamal decryption.
//!
//! Each quorum participant raises the ephemeral element `B` to their own
//! exponent share; the partials are then combined with Lagrange weights into
//! `B^a mod p` without the secret exponent `a` ever being assembled. That is
//! the essential security property of the whole design: only exponent
//! *shares* and group-element combinations exist on this path.
//!
//! Partial decryptions are pure and independent per participant, so a
//! caller may compute them concurrently and combine once any `t + 1`
//! results (with their matching weights) are in; completion order is
//! irrelevant as long as the index/weight pairing is preserved.

pub mod decrypt;

pub use decrypt::{combine_partials, partial_decrypt};

use crate::field::canonical_bytes;
use core::fmt;
use num_bigint::BigUint;
use zeroize::Zeroizing;

/// Errors for quorum combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdError {
    /// Partials and weights do not reference the same index set in the
    /// same order (or the quorum is empty / contains repeats).
    IndexSetMismatch,
}

/// One participant's partial decryption `B^{a_i} mod p`.
///
/// Unlike a [`crate::sharing::Share`], this is a group element intended to
/// travel to the combiner; it reveals nothing about the share exponent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartialDecryption {
    /// The participant's share index.
    pub index: u32,
    /// `B^{a_i} mod p`.
    pub value: BigUint,
}

/// The reconstructed ElGamal shared secret `B^a mod p`.
///
/// Exists only transiently to derive a symmetric key; `Debug` output is
/// redacted and the canonical encoding is handed out in a zeroizing buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct SharedSecret(BigUint);

impl SharedSecret {
    /// Wraps a group element as a shared secret.
    ///
    /// Public so that verification code can compare a quorum's output with
    /// a directly computed `B^a mod p`.
    pub fn new(element: BigUint) -> Self {
        Self(element)
    }

    /// Canonical minimal big-endian encoding, for key derivation.
    pub fn canonical_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(canonical_bytes(&self.0))
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedSecret").field(&"***SENSITIVE***").finish()
    }
}
