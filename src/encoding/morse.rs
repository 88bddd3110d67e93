//! Direct binary-glyph encoding, Morse style.
//!
//! Each character's code point is written as unpadded binary with `-` for 1
//! and `.` for 0, groups joined by single spaces. No encryption is involved;
//! this is the one payload format a human can decode by hand.
//!
//! Groups carry a full Unicode scalar value, so characters beyond U+FFFF
//! encode as one long group rather than the two surrogate groups a UTF-16
//! based encoder would emit. Such text does not interoperate with those
//! encoders.

use crate::error::{Error, Result};

/// Encode text as binary glyph groups.
///
/// `encode("A")` is `"-.....-"` (code point 65, binary `1000001`).
pub fn encode(text: &str) -> String {
    text.chars()
        .map(|c| {
            let mut group = String::new();
            let code_point = c as u32;
            let bits = 32 - code_point.leading_zeros();
            for i in (0..bits.max(1)).rev() {
                group.push(if code_point >> i & 1 == 1 { '-' } else { '.' });
            }
            group
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decode binary glyph groups back to text.
///
/// Returns `None` on blank input or any malformed group (stray characters,
/// groups too long for a code point, values that are not valid scalar
/// values). Failures stay local; the caller falls back to other decode
/// paths or reports "could not decrypt".
pub fn decode(glyphs: &str) -> Option<String> {
    if glyphs.trim().is_empty() {
        return None;
    }
    try_decode(glyphs).ok()
}

fn try_decode(glyphs: &str) -> Result<String> {
    glyphs
        .split(' ')
        .filter(|group| !group.is_empty())
        .map(decode_group)
        .collect()
}

fn decode_group(group: &str) -> Result<char> {
    let malformed = || Error::MalformedGlyphGroup(group.to_string());

    let mut code_point: u32 = 0;
    for glyph in group.chars() {
        let bit = match glyph {
            '-' => 1,
            '.' => 0,
            _ => return Err(malformed()),
        };
        code_point = code_point.checked_mul(2).ok_or_else(malformed)? + bit;
    }
    char::from_u32(code_point).ok_or_else(malformed)
}
