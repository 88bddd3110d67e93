//! Cryptographic operations for the veiltext codec.
//!
//! This module provides:
//! - AES-256-GCM authenticated encryption with a 16-byte IV wire format
//! - Deterministic SHA-256 passphrase key derivation
//! - Streaming GCM decryption for large payloads

mod cipher;
mod kdf;
mod stream;

pub use cipher::{decrypt_bytes, encrypt_bytes, min_payload_len, Cipher};
pub use kdf::{derive_key, generate_key};
pub use stream::decrypt_stream;

/// A 256-bit symmetric key. Derived per call and owned by the caller's
/// stack frame; the codec never persists keys.
pub type SymmetricKey = [u8; crate::config::KEY_LENGTH];
