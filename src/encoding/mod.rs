//! Payload encodings for smuggling bytes and text through chat fields.
//!
//! Two formats:
//! - [`invisible`]: binary ciphertext as non-rendering variation selectors
//! - [`morse`]: plaintext as `.`/`-` glyph groups, no encryption

pub mod invisible;
pub mod morse;
