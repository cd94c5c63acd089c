//! Secret share definition.
//!
//! A share is one point `(index, f(index) mod q)` on the hidden polynomial.
//! The index is public (it identifies the participant); the value is exponent
//! material and must be treated like a key.

use super::SharingError;
use core::fmt;
use num_bigint::BigUint;

/// One Shamir share: participant index and polynomial evaluation.
#[derive(Clone, PartialEq, Eq)]
pub struct Share {
    /// The evaluation point, `1..=n`. Public information.
    pub index: u32,
    /// `f(index) mod q`. Highly sensitive.
    pub value: BigUint,
}

impl Share {
    /// Creates a share, rejecting the invalid evaluation point `0`.
    ///
    /// Index `0` would place the secret itself on the wire: `f(0)` *is* the
    /// secret.
    pub fn new(index: u32, value: BigUint) -> Result<Self, SharingError> {
        if index == 0 {
            return Err(SharingError::InvalidIndex);
        }
        Ok(Self { index, value })
    }
}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("index", &self.index)
            .field("bits", &self.value.bits())
            .field("value", &"***SENSITIVE***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_creation() {
        let s = Share::new(3, BigUint::from(42u32)).unwrap();
        assert_eq!(s.index, 3);
        assert_eq!(s.value, BigUint::from(42u32));
    }

    #[test]
    fn test_zero_index_rejected() {
        assert_eq!(
            Share::new(0, BigUint::from(1u32)),
            Err(SharingError::InvalidIndex)
        );
    }

    #[test]
    fn test_debug_redaction() {
        let s = Share::new(5, BigUint::from(0xDEADBEEFu32)).unwrap();
        let dbg = format!("{:?}", s);
        assert!(dbg.contains("index: 5"));
        assert!(dbg.contains("***SENSITIVE***"));
        assert!(!dbg.contains("3735928559")); // decimal of 0xDEADBEEF
    }
}
