//! Symmetric-key derivation from the shared secret.
//!
//! The key is the BLAKE3 digest of the shared secret's canonical byte
//! encoding (see [`crate::field::canonical_bytes`]). The encoding is a
//! stable contract: any deviation changes every derived key.

use super::{HybridError, KEY_LEN};
use crate::threshold::SharedSecret;
use core::fmt;
use zeroize::Zeroizing;

/// A 32-byte symmetric key.
///
/// Storage is zeroized on drop; `Debug` output is redacted.
#[derive(Clone)]
pub struct SymmetricKey(Zeroizing<[u8; KEY_LEN]>);

impl SymmetricKey {
    /// Wraps externally supplied key material, enforcing the length
    /// contract.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HybridError> {
        let key: [u8; KEY_LEN] = bytes
            .try_into()
            .map_err(|_| HybridError::InvalidKeyLength)?;
        Ok(Self(Zeroizing::new(key)))
    }

    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SymmetricKey").field(&"***SENSITIVE***").finish()
    }
}

/// Derives the symmetric key from a reconstructed shared secret.
pub fn derive_key(secret: &SharedSecret) -> SymmetricKey {
    let encoded = secret.canonical_bytes();
    let digest = blake3::hash(&encoded);
    SymmetricKey(Zeroizing::new(*digest.as_bytes()))
}
