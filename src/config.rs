//! Configuration constants and types for the veiltext codec.

use crate::style::CiphertextStyle;
use serde::{Deserialize, Serialize};

/// IV length in bytes prepended to every encrypted payload.
///
/// GCM's recommended IV length is 12 bytes; the wire format uses 16 for
/// compatibility with existing carrier strings.
pub const IV_LENGTH: usize = 16;

/// Authentication tag length in bytes (128 bits).
pub const TAG_LENGTH: usize = 16;

/// Symmetric key length in bytes (AES-256).
pub const KEY_LENGTH: usize = 32;

/// Read buffer size for streaming decryption. Must be a multiple of the
/// AES block size so GHASH accumulation stays block-aligned mid-stream.
pub const STREAM_CHUNK_SIZE: usize = 8 * 1024;

/// Default minimum number of filler phrases around a hidden payload.
pub const DEFAULT_MIN_FILLER_WORDS: usize = 3;

/// Default maximum number of filler phrases around a hidden payload.
pub const DEFAULT_MAX_FILLER_WORDS: usize = 7;

/// Snapshot of the caller's codec settings for a single encode call.
///
/// The codec holds no ambient state: the settings collaborator produces a
/// fresh snapshot at call time and passes it in explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Disguise voice applied to encrypted payloads.
    pub style: CiphertextStyle,

    /// Minimum filler phrase count.
    pub min_filler_words: usize,

    /// Maximum filler phrase count.
    pub max_filler_words: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            style: CiphertextStyle::Neko,
            min_filler_words: DEFAULT_MIN_FILLER_WORDS,
            max_filler_words: DEFAULT_MAX_FILLER_WORDS,
        }
    }
}

impl CodecConfig {
    /// Create a configuration with custom settings. Swapped bounds are
    /// accepted; the decorator normalizes them at use.
    pub fn new(style: CiphertextStyle, min_filler_words: usize, max_filler_words: usize) -> Self {
        Self {
            style,
            min_filler_words,
            max_filler_words,
        }
    }
}
