//! Invisible base-16 codec over Unicode variation selectors.
//!
//! Maps raw bytes to a string of the 16 non-rendering code points
//! U+FE00..=U+FE0F, one symbol per base-16 digit of the payload taken as an
//! arbitrary-precision integer. The resulting string renders as nothing at
//! all and survives being pasted into ordinary text fields, which is what
//! lets ciphertext ride inside a normal-looking chat message.
//!
//! Decoding ignores every character outside the alphabet, so the payload can
//! be embedded anywhere inside arbitrary surrounding text.
//!
//! Wire-format caveat: the integer representation cannot express leading
//! zero bytes, so a payload whose first byte is 0x00 comes back one byte
//! shorter. Changing this would break every carrier string already in the
//! wild, so the behavior is kept as is; for encrypted payloads it strikes
//! with probability ~1/256 per encryption.

/// Number of symbols in the invisible alphabet. Fixed; the codec is a
/// base-16 positional system.
pub const ALPHABET_SIZE: usize = 16;

/// First code point of the variation-selector block used as the alphabet.
const ALPHABET_START: u32 = 0xFE00;

/// Map a digit value 0-15 to its invisible symbol.
fn symbol_of(digit: u8) -> char {
    debug_assert!((digit as usize) < ALPHABET_SIZE);
    // Safety of unwrap: U+FE00..=U+FE0F are valid scalar values.
    char::from_u32(ALPHABET_START + digit as u32).expect("variation selector out of range")
}

/// Map an invisible symbol back to its digit value, or `None` for any
/// character outside the alphabet.
pub fn digit_of(c: char) -> Option<u8> {
    let offset = (c as u32).wrapping_sub(ALPHABET_START);
    if (offset as usize) < ALPHABET_SIZE {
        Some(offset as u8)
    } else {
        None
    }
}

/// Encode bytes as an invisible base-16 string.
///
/// The byte sequence is read as a non-negative big-endian integer and
/// converted by repeated division: remainders come out least significant
/// first and are reversed at the end. Empty input encodes to the empty
/// string, as does an all-zero input (the integer zero has no digits).
pub fn encode(data: &[u8]) -> String {
    let mut digits: Vec<u8> = data.to_vec();
    strip_leading_zeros(&mut digits);

    let mut symbols = Vec::new();
    while !digits.is_empty() {
        let remainder = div_rem_in_place(&mut digits, ALPHABET_SIZE as u32);
        symbols.push(symbol_of(remainder));
    }

    symbols.iter().rev().collect()
}

/// Decode an invisible base-16 string back to bytes.
///
/// Scans left to right; characters outside the alphabet are skipped, every
/// recognized symbol contributes `value = value * 16 + digit`. The result
/// is the minimal big-endian representation of the accumulated integer; an
/// input with no recognized symbols decodes to an empty vec.
pub fn decode(text: &str) -> Vec<u8> {
    let mut acc: Vec<u8> = Vec::new();
    for c in text.chars() {
        if let Some(digit) = digit_of(c) {
            mul_add_in_place(&mut acc, ALPHABET_SIZE as u32, digit as u32);
        }
    }
    acc
}

/// Divide a big-endian base-256 number by `base` in place, returning the
/// remainder. The quotient keeps no leading zero bytes.
fn div_rem_in_place(digits: &mut Vec<u8>, base: u32) -> u8 {
    let mut remainder: u32 = 0;
    for digit in digits.iter_mut() {
        let current = remainder * 256 + *digit as u32;
        *digit = (current / base) as u8;
        remainder = current % base;
    }
    strip_leading_zeros(digits);
    remainder as u8
}

/// Compute `digits * base + add` in place over a big-endian base-256
/// number. An empty vec is the integer zero and stays empty while the
/// value is zero, which is how leading zero digits get normalized away.
fn mul_add_in_place(digits: &mut Vec<u8>, base: u32, add: u32) {
    let mut carry = add;
    for digit in digits.iter_mut().rev() {
        let current = *digit as u32 * base + carry;
        *digit = (current & 0xFF) as u8;
        carry = current >> 8;
    }
    while carry > 0 {
        digits.insert(0, (carry & 0xFF) as u8);
        carry >>= 8;
    }
}

fn strip_leading_zeros(digits: &mut Vec<u8>) {
    let nonzero = digits.iter().position(|&d| d != 0).unwrap_or(digits.len());
    digits.drain(..nonzero);
}
