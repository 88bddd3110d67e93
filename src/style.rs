//! Ciphertext disguise styles and filler decoration.
//!
//! A style is a "voice": a fixed list of filler phrases that get wrapped
//! around an invisible payload so the carrier reads like an ordinary chat
//! message in that voice. Styles form a closed enum; adding a voice means
//! adding a variant, never subclassing anything.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Filler phrases for the default cat-girl voice.
const NEKO_PHRASES: &[&str] = &[
    "嗷呜!", "咕噜~", "喵~", "喵咕~", "喵喵~", "喵?", "喵喵！", "哈！", "喵呜...", "咪咪喵！",
    "咕咪?",
];

const BANGBOO_PHRASES: &[&str] = &[
    "嗯呢...", "哇哒！", "嗯呢！", "嗯呢哒！", "嗯呐呐！", "嗯哒！", "嗯呢呢！",
];

const HILICHURLIAN_PHRASES: &[&str] = &[
    "Muhe ye!",
    "Ye dada!",
    "Ya yika!",
    "Biat ye！",
    "Dala si？",
    "Yaya ika！",
    "Mi? Dada!",
    "ye pupu!",
    "gusha dada!",
    "Dala？",
    "Mosi mita！",
    "Mani ye！",
    "Biat ye！",
    "Todo yo.",
    "tiga mitono!",
    "Biat, gusha!",
    "Unu dada!",
    "Mimi movo!",
];

const NIER_PHRASES: &[&str] = &[
    "Ee ", "ser ", "les ", "hii ", "san ", "mia ", "ni ", "Escalei ", "lu ", "push ", "to ",
    "lei ", "Schmosh ", "juna ", "wu ", "ria ", "e ", "je ", "cho ", "no ", "Nasico ", "whosh ",
    "pier ", "wa ", "nei ", "Wananba ", "he ", "na ", "qua ", "lei ", "Sila ", "schmer ", "ya ",
    "pi ", "pa ", "lu ", "Un ", "schen ", "ta ", "tii ", "pia ", "pa ", "ke ", "lo ",
];

const MANBO_PHRASES: &[&str] = &[
    "曼波~",
    "哈吉米~",
    "哈吉米咩那咩路多~",
    "曼波!",
    "曼波...",
    "欧码叽哩，曼波！",
    "叮咚鸡！",
    "哈压库！",
    "哈压库~",
    "哈吉米！",
    "哦耶~",
    "duang~",
];

/// A disguise voice for encoded payloads.
///
/// Every variant except [`CiphertextStyle::Morse`] wraps an encrypted
/// invisible payload in filler phrases. Morse is the direct-encoding path:
/// plaintext goes straight to glyph groups with no encryption and no
/// decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CiphertextStyle {
    /// Cat-girl voice, the default.
    Neko,
    /// Bangboo voice.
    Bangboo,
    /// Hilichurlian voice.
    Hilichurlian,
    /// NieR machine-language voice.
    Nier,
    /// Manbo voice.
    Manbo,
    /// Direct binary-glyph encoding, no encryption.
    Morse,
}

impl CiphertextStyle {
    /// All styles, in display order.
    pub const ALL: [CiphertextStyle; 6] = [
        CiphertextStyle::Neko,
        CiphertextStyle::Bangboo,
        CiphertextStyle::Hilichurlian,
        CiphertextStyle::Nier,
        CiphertextStyle::Manbo,
        CiphertextStyle::Morse,
    ];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            CiphertextStyle::Neko => "Neko",
            CiphertextStyle::Bangboo => "Bangboo",
            CiphertextStyle::Hilichurlian => "Hilichurlian",
            CiphertextStyle::Nier => "NieR",
            CiphertextStyle::Manbo => "Manbo",
            CiphertextStyle::Morse => "Morse",
        }
    }

    /// Filler phrases for this voice. Empty for direct-encoding styles.
    pub fn phrases(&self) -> &'static [&'static str] {
        match self {
            CiphertextStyle::Neko => NEKO_PHRASES,
            CiphertextStyle::Bangboo => BANGBOO_PHRASES,
            CiphertextStyle::Hilichurlian => HILICHURLIAN_PHRASES,
            CiphertextStyle::Nier => NIER_PHRASES,
            CiphertextStyle::Manbo => MANBO_PHRASES,
            CiphertextStyle::Morse => &[],
        }
    }

    /// Whether this style encodes plaintext directly, bypassing encryption
    /// and decoration.
    pub fn is_direct_encoding(&self) -> bool {
        matches!(self, CiphertextStyle::Morse)
    }

    /// Look up a style by label, case-insensitive. Unknown names fall back
    /// to the default voice.
    pub fn from_name(name: &str) -> CiphertextStyle {
        Self::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(name))
            .unwrap_or(CiphertextStyle::Neko)
    }
}

impl Default for CiphertextStyle {
    fn default() -> Self {
        CiphertextStyle::Neko
    }
}

/// Wrap a payload in randomized filler text drawn from the style's voice.
///
/// Picks a phrase count uniformly from the normalized `[min_words,
/// max_words]` range, concatenates that many phrases drawn uniformly with
/// replacement, splits the filler at its character midpoint and embeds the
/// payload between the halves. A style with no phrases returns the payload
/// unchanged.
pub fn decorate(
    payload: &str,
    style: CiphertextStyle,
    min_words: usize,
    max_words: usize,
) -> String {
    let phrases = style.phrases();
    if phrases.is_empty() {
        return payload.to_string();
    }

    let final_min = min_words.min(max_words);
    let final_max = min_words.max(max_words);

    let mut rng = rand::thread_rng();
    let count = if final_min == final_max {
        final_min
    } else {
        rng.gen_range(final_min..=final_max)
    };

    let mut filler = String::new();
    for _ in 0..count {
        filler.push_str(phrases[rng.gen_range(0..phrases.len())]);
    }

    let middle = filler.chars().count() / 2;
    let split_at = filler
        .char_indices()
        .nth(middle)
        .map(|(byte_index, _)| byte_index)
        .unwrap_or(filler.len());

    format!("{}{}{}", &filler[..split_at], payload, &filler[split_at..])
}
