//! ElGamal group parameters and key material.
//!
//! The protocol runs in a prime-order subgroup of `Z_p^*`: a prime modulus
//! `p`, a prime `q` dividing `p - 1`, and a generator `g` of the order-`q`
//! subgroup. Parameter *generation* (safe-prime search, primality proofs) is
//! an external concern; this module only accepts parameters that are claimed
//! valid and enforces the cheap structural invariants before any protocol
//! math runs on them.
//!
//! # Validation
//! - `q >= 2` and `q | (p - 1)`: interpolation over `Z_q` is meaningless
//!   otherwise.
//! - `1 < g < p` and `g^q ≡ 1 mod p`: one exponentiation; primality of `p`
//!   and `q` is NOT re-checked.

use crate::field::PrimeField;
use core::fmt;
use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand_core::{CryptoRng, RngCore};

/// Errors for group-parameter handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupError {
    /// Supplied `(p, q, g)` violate the subgroup structure.
    InvalidParameters,
}

/// Public group parameters `(p, q, g)`.
///
/// Immutable once constructed; every other component borrows these read-only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupParameters {
    p: BigUint,
    q: BigUint,
    g: BigUint,
}

impl GroupParameters {
    /// Validates and wraps `(p, q, g)`.
    ///
    /// # Returns
    /// * `Ok(GroupParameters)` when the structural invariants hold.
    /// * `Err(GroupError::InvalidParameters)` otherwise.
    pub fn new(p: BigUint, q: BigUint, g: BigUint) -> Result<Self, GroupError> {
        let two = BigUint::from(2u32);
        if p < BigUint::from(3u32) || q < two {
            log::warn!("group parameters rejected: modulus or order out of range");
            return Err(GroupError::InvalidParameters);
        }
        if (&p - BigUint::one()) % &q != BigUint::zero() {
            log::warn!("group parameters rejected: q does not divide p - 1");
            return Err(GroupError::InvalidParameters);
        }
        if g <= BigUint::one() || g >= p {
            log::warn!("group parameters rejected: generator out of range");
            return Err(GroupError::InvalidParameters);
        }
        if g.modpow(&q, &p) != BigUint::one() {
            log::warn!("group parameters rejected: generator order does not divide q");
            return Err(GroupError::InvalidParameters);
        }
        Ok(Self { p, q, g })
    }

    /// The prime modulus `p`.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// The prime subgroup order `q`.
    pub fn q(&self) -> &BigUint {
        &self.q
    }

    /// The subgroup generator `g`.
    pub fn g(&self) -> &BigUint {
        &self.g
    }

    /// Field context for group-element arithmetic (`mod p`).
    pub fn element_field(&self) -> PrimeField<'_> {
        PrimeField::new(&self.p)
    }

    /// Field context for exponent arithmetic (`mod q`).
    pub fn exponent_field(&self) -> PrimeField<'_> {
        PrimeField::new(&self.q)
    }
}

/// An ElGamal exponent/element pair: secret `x` in `[0, q)` and public
/// `g^x mod p`.
///
/// Used both for the long-term key (`a`, `A = g^a`) whose secret half gets
/// Shamir-split, and for the ephemeral pair (`b`, `B = g^b`) that drives a
/// decryption round.
#[derive(Clone, PartialEq, Eq)]
pub struct Keypair {
    /// The secret exponent. Split it; never ship it.
    pub secret: BigUint,
    /// The public group element.
    pub public: BigUint,
}

impl Keypair {
    /// Samples a fresh pair: `x` uniform in `[0, q)`, `g^x mod p`.
    pub fn generate<R: RngCore + CryptoRng + ?Sized>(
        params: &GroupParameters,
        rng: &mut R,
    ) -> Self {
        let secret = rng.gen_biguint_below(params.q());
        let public = params.g().modpow(&secret, params.p());
        Self { secret, public }
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("public", &self.public)
            .field("secret", &"***SENSITIVE***")
            .finish()
    }
}
