//! Key derivation for passphrase-based encryption.
//!
//! The wire format pins key derivation to a single unsalted SHA-256 over the
//! passphrase bytes: two parties that agree on a passphrase must derive the
//! same key with no out-of-band salt exchange. Strength validation of the
//! passphrase is the caller's job, not this module's.

use crate::config::KEY_LENGTH;
use crate::crypto::SymmetricKey;
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Derive a 256-bit key from a passphrase.
///
/// Deterministic: the same passphrase always yields the same key. An empty
/// passphrase is permitted and produces a valid (but weak) key.
pub fn derive_key(passphrase: &str) -> SymmetricKey {
    let digest = Sha256::digest(passphrase.as_bytes());
    let mut key = [0u8; KEY_LENGTH];
    key.copy_from_slice(&digest);
    key
}

/// Generate a random 256-bit key from the thread RNG.
///
/// For callers that exchange keys out of band instead of agreeing on a
/// passphrase.
pub fn generate_key() -> SymmetricKey {
    let mut key = [0u8; KEY_LENGTH];
    rand::thread_rng().fill_bytes(&mut key);
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_derivation_deterministic() {
        let key1 = derive_key("password123");
        let key2 = derive_key("password123");

        assert_eq!(key1, key2);
    }

    #[test]
    fn test_different_passphrases_different_keys() {
        let key1 = derive_key("password1");
        let key2 = derive_key("password2");

        assert_ne!(key1, key2);
    }

    #[test]
    fn test_empty_passphrase_permitted() {
        let key = derive_key("");

        // SHA-256 of the empty string, well known vector.
        assert_eq!(
            key[..4],
            [0xe3, 0xb0, 0xc4, 0x42],
            "empty passphrase should hash to the standard SHA-256 empty digest"
        );
    }

    #[test]
    fn test_generate_key_random() {
        let key1 = generate_key();
        let key2 = generate_key();

        assert_ne!(key1, key2);
    }
}
