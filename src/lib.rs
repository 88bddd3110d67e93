//! Steganographic authenticated message codec
//!
//! Turns plaintext into a carrier string that passes as ordinary chat text,
//! and turns carrier strings back into plaintext, with cryptographic
//! integrity guarantees. Third-party messaging apps and their moderation
//! only ever see printable filler plus non-rendering code points.
//!
//! # Features
//!
//! - **AES-256-GCM Encryption**: authenticated encryption with deterministic
//!   SHA-256 passphrase key derivation
//! - **Invisible Encoding**: ciphertext smuggled through text fields as
//!   Unicode variation selectors
//! - **Disguise Styles**: randomized filler voices wrapped around the payload
//! - **Direct Morse Path**: unencrypted binary-glyph encoding
//! - **Streaming Decryption**: constant-memory GCM decryption for attachments
//!
//! # Architecture
//!
//! ```text
//! Encode: plaintext → Encrypt (AES-256-GCM) → Invisible base-16 → Decorate
//! Decode: carrier → Classify → matching codec path → plaintext (or None)
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use veiltext::{decode_from_transmission, derive_key, encode_for_transmission, CodecConfig};
//!
//! let key = derive_key("shared passphrase");
//! let carrier = encode_for_transmission("meet at 5", &key, &CodecConfig::default()).unwrap();
//!
//! // The carrier reads like chat filler; the payload is invisible.
//! let decoded = decode_from_transmission(&carrier, &[key]);
//! assert_eq!(decoded.as_deref(), Some("meet at 5"));
//! ```
//!
//! Every operation is a pure, stateless transformation over its explicit
//! inputs; the only shared resource is the thread-local secure RNG, so all
//! calls are safe from any number of threads without locking.

pub mod classify;
pub mod codec;
pub mod config;
pub mod crypto;
pub mod encoding;
pub mod error;
pub mod style;

pub use codec::{decode_from_transmission, decode_with_passphrases, encode_for_transmission};
pub use config::CodecConfig;
pub use crypto::{decrypt_stream, derive_key, generate_key, SymmetricKey};
pub use error::{Error, Result};
pub use style::CiphertextStyle;
