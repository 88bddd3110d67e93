//! AES-256-GCM authenticated encryption.
//!
//! Wire format: `IV (16 bytes) || ciphertext || tag (16 bytes)`. The IV is
//! random per encryption and never reused.

use crate::config::{IV_LENGTH, TAG_LENGTH};
use crate::crypto::SymmetricKey;
use crate::error::{Error, Result};
use aes::Aes256;
use aes_gcm::aead::consts::U16;
use aes_gcm::aead::Aead;
use aes_gcm::{AesGcm, KeyInit, Nonce};
use rand::RngCore;

/// AES-256-GCM parameterized with the wire format's 16-byte IV.
type Aes256Gcm16 = AesGcm<Aes256, U16>;

/// AES-256-GCM cipher wrapper.
pub struct Cipher {
    cipher: Aes256Gcm16,
}

impl Cipher {
    /// Create a new cipher from a 256-bit key.
    pub fn new(key: &SymmetricKey) -> Self {
        let cipher = Aes256Gcm16::new_from_slice(key).expect("Invalid key length");
        Self { cipher }
    }

    /// Encrypt data with a fresh random IV.
    ///
    /// Returns: IV (16 bytes) || ciphertext || tag (16 bytes)
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut iv = [0u8; IV_LENGTH];
        rand::thread_rng().fill_bytes(&mut iv);
        let nonce = Nonce::from_slice(&iv);

        let ciphertext = self
            .cipher
            .encrypt(nonce, plaintext)
            .map_err(|e| Error::CryptoInit(e.to_string()))?;

        // Prepend IV to ciphertext
        let mut result = Vec::with_capacity(IV_LENGTH + ciphertext.len());
        result.extend_from_slice(&iv);
        result.extend_from_slice(&ciphertext);

        Ok(result)
    }

    /// Decrypt data that was encrypted with `encrypt`.
    ///
    /// Expects: IV (16 bytes) || ciphertext || tag (16 bytes)
    ///
    /// A tag mismatch is recoverable: the caller is expected to retry with
    /// the next candidate key, not to treat it as fatal.
    pub fn decrypt(&self, payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() < IV_LENGTH {
            return Err(Error::InputTooShort {
                needed: IV_LENGTH,
                got: payload.len(),
            });
        }

        let (iv, ciphertext) = payload.split_at(IV_LENGTH);
        let nonce = Nonce::from_slice(iv);

        self.cipher
            .decrypt(nonce, ciphertext)
            .map_err(|_| Error::Authentication)
    }
}

/// Encrypt a byte payload with the given key.
pub fn encrypt_bytes(plaintext: &[u8], key: &SymmetricKey) -> Result<Vec<u8>> {
    Cipher::new(key).encrypt(plaintext)
}

/// Decrypt a byte payload with the given key.
pub fn decrypt_bytes(payload: &[u8], key: &SymmetricKey) -> Result<Vec<u8>> {
    Cipher::new(key).decrypt(payload)
}

/// Minimum valid payload size: IV plus the tag of an empty message.
pub const fn min_payload_len() -> usize {
    IV_LENGTH + TAG_LENGTH
}
