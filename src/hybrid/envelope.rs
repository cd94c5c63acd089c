//! Authenticated encryption envelope.
//!
//! Seals a payload under a [`SymmetricKey`] with ChaCha20-Poly1305. Every
//! call to [`encrypt_message`] draws a fresh random nonce from the OS, so a
//! key may seal many messages. The wire form is the fixed concatenation
//! `nonce(12) || ciphertext(len(plaintext)) || tag(16)`; nonce and tag must
//! travel with the ciphertext for decryption to succeed.

use super::{kdf::SymmetricKey, HybridError, NONCE_LEN, TAG_LEN};
use chacha20poly1305::aead::{Aead, KeyInit};
use chacha20poly1305::{ChaCha20Poly1305, Key, Nonce};
use core::fmt;
use rand_core::{OsRng, RngCore};

/// A sealed message: nonce, ciphertext, and authentication tag.
#[derive(Clone, PartialEq, Eq)]
pub struct EncryptedEnvelope {
    nonce: [u8; NONCE_LEN],
    ciphertext: Vec<u8>,
    tag: [u8; TAG_LEN],
}

impl EncryptedEnvelope {
    /// The per-message nonce.
    pub fn nonce(&self) -> &[u8; NONCE_LEN] {
        &self.nonce
    }

    /// The ciphertext body (same length as the plaintext).
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// The 16-byte authentication tag.
    pub fn tag(&self) -> &[u8; TAG_LEN] {
        &self.tag
    }

    /// Wire encoding: `nonce || ciphertext || tag`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(NONCE_LEN + self.ciphertext.len() + TAG_LEN);
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.ciphertext);
        out.extend_from_slice(&self.tag);
        out
    }

    /// Parses the wire encoding.
    ///
    /// # Returns
    /// * `Err(HybridError::MalformedInput)` when `bytes` is shorter than
    ///   nonce + tag.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HybridError> {
        if bytes.len() < NONCE_LEN + TAG_LEN {
            return Err(HybridError::MalformedInput);
        }
        let (nonce_bytes, rest) = bytes.split_at(NONCE_LEN);
        let (ciphertext, tag_bytes) = rest.split_at(rest.len() - TAG_LEN);

        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(nonce_bytes);
        let mut tag = [0u8; TAG_LEN];
        tag.copy_from_slice(tag_bytes);

        Ok(Self {
            nonce,
            ciphertext: ciphertext.to_vec(),
            tag,
        })
    }
}

impl fmt::Debug for EncryptedEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptedEnvelope")
            .field("nonce", &hex::encode(self.nonce))
            .field("ciphertext_len", &self.ciphertext.len())
            .finish()
    }
}

/// Seals `plaintext` under `key` with a fresh random nonce.
///
/// # Returns
/// * `Ok(EncryptedEnvelope)` on success.
/// * `Err(HybridError::EncryptionFailure)` if the cipher backend refuses
///   the payload (length overflow).
pub fn encrypt_message(
    key: &SymmetricKey,
    plaintext: &[u8],
) -> Result<EncryptedEnvelope, HybridError> {
    let mut nonce = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce);

    let cipher = ChaCha20Poly1305::new(Key::from_slice(key.as_bytes()));
    let mut sealed = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .map_err(|_| HybridError::EncryptionFailure)?;

    // The cipher returns ciphertext with the tag appended.
    let tag_bytes = sealed.split_off(sealed.len() - TAG_LEN);
    let mut tag = [0u8; TAG_LEN];
    tag.copy_from_slice(&tag_bytes);

    Ok(EncryptedEnvelope {
        nonce,
        ciphertext: sealed,
        tag,
    })
}

/// Opens an envelope, verifying the tag before any plaintext is released.
///
/// # Returns
/// * `Ok(Vec<u8>)` - the plaintext.
/// * `Err(HybridError::AuthenticationFailure)` - tag mismatch: wrong key or
///   a tampered nonce/ciphertext/tag. No partial plaintext is ever returned.
pub fn decrypt_message(
    key: &SymmetricKey,
    envelope: &EncryptedEnvelope,
) -> Result<Vec<u8>, HybridError> {
    let cipher = ChaCha20Poly1305::new(Key::from_slice(key.as_bytes()));

    let mut sealed = Vec::with_capacity(envelope.ciphertext.len() + TAG_LEN);
    sealed.extend_from_slice(&envelope.ciphertext);
    sealed.extend_from_slice(&envelope.tag);

    cipher
        .decrypt(Nonce::from_slice(&envelope.nonce), sealed.as_slice())
        .map_err(|_| HybridError::AuthenticationFailure)
}
