//! Hybrid encryption of the message payload.
//!
//! The reconstructed shared secret never encrypts anything directly: it is
//! hashed into a fixed 32-byte symmetric key (`kdf`), and the payload is
//! sealed with an AEAD cipher under that key (`envelope`). Decryption fails
//! closed: a wrong key, a truncated envelope, or a single flipped bit
//! yields a typed error, never partial plaintext.
//!
//! # Scheme
//! 1. **KDF**: BLAKE3(canonical_bytes(S)) -> 32-byte key
//! 2. **Seal**: ChaCha20-Poly1305, fresh random 12-byte nonce per call
//! 3. **Format**: `[Nonce (12)] [Ciphertext (len(plaintext))] [Tag (16)]`

pub mod envelope;
pub mod kdf;

pub use envelope::{decrypt_message, encrypt_message, EncryptedEnvelope};
pub use kdf::{derive_key, SymmetricKey};

/// Symmetric key length in bytes.
pub const KEY_LEN: usize = 32;
/// AEAD nonce length in bytes.
pub const NONCE_LEN: usize = 12;
/// AEAD authentication-tag length in bytes.
pub const TAG_LEN: usize = 16;

/// Errors for the hybrid layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HybridError {
    /// Key material is not exactly [`KEY_LEN`] bytes.
    InvalidKeyLength,
    /// Wire envelope is shorter than nonce + tag.
    MalformedInput,
    /// AEAD tag verification failed: wrong key or tampered envelope.
    AuthenticationFailure,
    /// The cipher backend refused the operation (plaintext too long).
    EncryptionFailure,
}
