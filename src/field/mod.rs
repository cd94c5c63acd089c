//! Prime-field arithmetic context.
//!
//! All protocol math happens in one of two prime fields: exponent arithmetic
//! in `Z_q` and group-element arithmetic in `Z_p`. `PrimeField` makes the
//! modulus an explicit, borrowed context value that is passed to every
//! operation, so there is no process-wide "current modulus" and field
//! operations for different moduli can run concurrently without interfering.
//!
//! # Design Choices
//! - **Borrowed context**: `PrimeField` holds `&BigUint` and is `Copy`;
//!   constructing one per call site is free.
//! - **Canonical representatives**: every operation returns a value in
//!   `[0, modulus)`; inputs are reduced first, so callers may pass
//!   un-normalized values.
//! - **Inversion via extended Euclid**: computed over `BigInt` and folded
//!   back to a canonical `BigUint`; returns `None` when the element is not
//!   invertible (gcd != 1).

pub mod encode;

pub use encode::canonical_bytes;

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

/// A prime field `Z_m` identified by its modulus.
///
/// The modulus is only borrowed; a `PrimeField` is a view, not an owner.
#[derive(Clone, Copy, Debug)]
pub struct PrimeField<'a> {
    modulus: &'a BigUint,
}

impl<'a> PrimeField<'a> {
    /// Creates a field context for the given modulus.
    ///
    /// The modulus must be at least 2; protocol-level validation of the
    /// actual group parameters happens in [`crate::group`].
    pub fn new(modulus: &'a BigUint) -> Self {
        debug_assert!(*modulus >= BigUint::from(2u32));
        Self { modulus }
    }

    /// The field modulus.
    pub fn modulus(&self) -> &BigUint {
        self.modulus
    }

    /// Canonical representative of `value` in `[0, modulus)`.
    pub fn reduce(&self, value: &BigUint) -> BigUint {
        value % self.modulus
    }

    /// `(a + b) mod m`.
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (self.reduce(a) + self.reduce(b)) % self.modulus
    }

    /// `(a - b) mod m`, canonical (never negative).
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        ((self.reduce(a) + self.modulus) - self.reduce(b)) % self.modulus
    }

    /// `(-a) mod m`.
    pub fn neg(&self, a: &BigUint) -> BigUint {
        (self.modulus - self.reduce(a)) % self.modulus
    }

    /// `(a * b) mod m`.
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (self.reduce(a) * self.reduce(b)) % self.modulus
    }

    /// `base^exp mod m`.
    pub fn pow(&self, base: &BigUint, exp: &BigUint) -> BigUint {
        base.modpow(exp, self.modulus)
    }

    /// Multiplicative inverse of `a` modulo `m`, or `None` if `gcd(a, m) != 1`.
    ///
    /// Iterative extended Euclid over `BigInt`; the Bezout coefficient is
    /// normalized back into `[0, m)`.
    pub fn inv(&self, a: &BigUint) -> Option<BigUint> {
        let modulus = BigInt::from(self.modulus.clone());
        let mut old_r = BigInt::from(self.reduce(a));
        let mut r = modulus.clone();
        let mut old_t = BigInt::one();
        let mut t = BigInt::zero();

        while !r.is_zero() {
            let quotient = &old_r / &r;
            let next_r = &old_r - &quotient * &r;
            old_r = core::mem::replace(&mut r, next_r);
            let next_t = &old_t - &quotient * &t;
            old_t = core::mem::replace(&mut t, next_t);
        }

        if !old_r.is_one() {
            return None;
        }

        let mut inv = old_t % &modulus;
        if inv < BigInt::zero() {
            inv += &modulus;
        }
        inv.to_biguint()
    }
}
