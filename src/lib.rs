//! Threshold ElGamal decryption.
//!
//! A secret exponent `a` is Shamir-split among `n` participants so that any
//! `t + 1` of them can jointly produce the ElGamal shared secret
//! `B^a mod p`, without the exponent itself ever being reassembled. The
//! reconstructed group element is hashed into a 32-byte symmetric key that
//! seals the actual message with an AEAD cipher.
//!
//! # Flow
//! 1. [`sharing::split_secret`]: one share per participant.
//! 2. [`threshold::partial_decrypt`]: each quorum member raises the
//!    ephemeral element `B` to their share.
//! 3. [`lagrange::weights_at_zero`] + [`threshold::combine_partials`]:
//!    the quorum's partials multiply into `B^a mod p`.
//! 4. [`hybrid::derive_key`] + [`hybrid::encrypt_message`] /
//!    [`hybrid::decrypt_message`]: hybrid AEAD layer over the payload.
//!
//! Transport, participant authentication, and group-parameter generation
//! are external concerns; see [`group`] for the invariants this crate does
//! enforce on supplied parameters.

pub mod field;
pub mod group;
pub mod hybrid;
pub mod lagrange;
pub mod sharing;
pub mod threshold;

pub use group::{GroupError, GroupParameters, Keypair};
pub use hybrid::{
    decrypt_message, derive_key, encrypt_message, EncryptedEnvelope, HybridError, SymmetricKey,
};
pub use lagrange::{weights_at_zero, LagrangeError, LagrangeWeightSet};
pub use sharing::{split_secret, Share, SharingError};
pub use threshold::{
    combine_partials, partial_decrypt, PartialDecryption, SharedSecret, ThresholdError,
};
