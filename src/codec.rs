//! Codec facade: the two entry points the platform collaborators call.
//!
//! Encode: plaintext -> encrypt -> invisible base-16 -> filler decoration
//! (or plaintext -> Morse glyphs for the direct-encoding style).
//!
//! Decode: classify the captured text, run the matching path, hand back the
//! recovered plaintext or `None`. "No hidden content present" is a normal
//! outcome, not an error.

use crate::classify;
use crate::config::CodecConfig;
use crate::crypto::{self, SymmetricKey};
use crate::encoding::{invisible, morse};
use crate::error::Result;
use crate::style;
use tracing::debug;

/// Turn plaintext into a carrier string safe to paste into any text field.
///
/// For a direct-encoding style the key is unused and the output is the bare
/// glyph string. Otherwise the plaintext is encrypted, mapped through the
/// invisible alphabet and wrapped in filler from the configured voice.
pub fn encode_for_transmission(
    plaintext: &str,
    key: &SymmetricKey,
    config: &CodecConfig,
) -> Result<String> {
    if config.style.is_direct_encoding() {
        return Ok(morse::encode(plaintext));
    }

    let payload = crypto::encrypt_bytes(plaintext.as_bytes(), key)?;
    let hidden = invisible::encode(&payload);

    Ok(style::decorate(
        &hidden,
        config.style,
        config.min_filler_words,
        config.max_filler_words,
    ))
}

/// Recover plaintext from a carrier string, trying each candidate key in
/// the caller-supplied order.
///
/// Returns `None` when the text carries no recognizable payload, when a
/// Morse payload is malformed, or when every candidate key fails
/// authentication. The caller shows "could not decrypt" for a `None` on
/// text that classified as hidden content.
pub fn decode_from_transmission(carrier: &str, candidate_keys: &[SymmetricKey]) -> Option<String> {
    // Morse first: an invisible-ciphertext string could in principle pass a
    // weaker shape test, never the reverse.
    if classify::is_morse_like(carrier) {
        debug!("carrier classified as morse");
        return morse::decode(carrier);
    }

    if classify::is_invisible_ciphertext(carrier) {
        debug!(keys = candidate_keys.len(), "carrier classified as invisible ciphertext");
        let payload = invisible::decode(carrier);
        for (index, key) in candidate_keys.iter().enumerate() {
            if let Ok(plaintext) = crypto::decrypt_bytes(&payload, key) {
                debug!(index, "candidate key authenticated");
                return String::from_utf8(plaintext).ok();
            }
        }
        return None;
    }

    None
}

/// Like [`decode_from_transmission`], but derives keys from an ordered list
/// of candidate passphrases (oldest first, or user-priority order).
pub fn decode_with_passphrases(carrier: &str, passphrases: &[String]) -> Option<String> {
    let keys: Vec<SymmetricKey> = passphrases.iter().map(|p| crypto::derive_key(p)).collect();
    decode_from_transmission(carrier, &keys)
}
