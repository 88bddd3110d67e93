//! Content classification heuristics for incoming text.
//!
//! Decides which decode path a piece of captured text should take. The two
//! predicates are not mutually exclusive by construction: the decode facade
//! checks Morse first, since the Morse shape test is the stricter of the
//! two. Keep that ordering.

use crate::encoding::invisible;

/// True iff at least one character of `text` belongs to the invisible
/// alphabet.
pub fn is_invisible_ciphertext(text: &str) -> bool {
    text.chars().any(|c| invisible::digit_of(c).is_some())
}

/// True iff the trimmed text looks like binary glyph groups: contains at
/// least one `.` or `-`, consists only of `.`/`-`/space, and has at least
/// one non-empty group.
pub fn is_morse_like(text: &str) -> bool {
    let trimmed = text.trim();

    let has_glyphs = trimmed.contains('.') || trimmed.contains('-');
    let only_glyphs = trimmed.chars().all(|c| c == '.' || c == '-' || c == ' ');
    let has_valid_group = trimmed
        .split(' ')
        .any(|group| !group.is_empty() && group.chars().all(|c| c == '.' || c == '-'));

    has_glyphs && only_glyphs && has_valid_group
}
