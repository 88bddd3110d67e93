//! Error types for the veiltext codec.

use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in codec operations.
///
/// Content-shape failures (`Authentication`, `InputTooShort`,
/// `MalformedGlyphGroup`) are recoverable: the decode facade resolves them
/// into `None` so callers can fall through to the next candidate key or
/// report "could not decrypt" without exception handling.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during streaming decryption.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// GCM tag check failed (wrong key or tampered data).
    #[error("Decryption failed: wrong key or tampered data")]
    Authentication,

    /// Payload shorter than the mandatory IV prefix.
    #[error("Payload too short: need at least {needed} bytes, have {got}")]
    InputTooShort { needed: usize, got: usize },

    /// Streaming tag check failed after plaintext was already written.
    /// The caller must discard everything written to the output.
    #[error("Stream integrity violation: wrong key or tampered data")]
    IntegrityViolation,

    /// Morse decode hit a group that does not parse.
    #[error("Malformed glyph group: {0:?}")]
    MalformedGlyphGroup(String),

    /// Underlying cipher unavailable or misconfigured. Unlike the other
    /// variants this indicates an environment fault, not bad input.
    #[error("Crypto initialization error: {0}")]
    CryptoInit(String),
}
