//! Streaming AES-256-GCM decryption for large payloads.
//!
//! The in-memory path in [`crate::crypto::cipher`] needs the whole payload
//! resident; attachments can be tens of megabytes, so this module decrypts
//! incrementally from a `Read` into a `Write` in fixed-size chunks. GCM is
//! CTR encryption plus a GHASH tag, which lets us drive the two halves
//! separately: a `Ctr32BE<Aes256>` keystream for the plaintext and a running
//! GHASH over the ciphertext, verified against the trailing tag once the
//! input is exhausted.
//!
//! Plaintext reaches the output sink before the tag is checked. On
//! [`Error::IntegrityViolation`] the caller must treat everything already
//! written as untrustworthy and discard it.

use crate::config::{IV_LENGTH, STREAM_CHUNK_SIZE, TAG_LENGTH};
use crate::crypto::SymmetricKey;
use crate::error::{Error, Result};
use aes::cipher::{BlockEncrypt, KeyInit, KeyIvInit, StreamCipher};
use aes::Aes256;
use ctr::Ctr32BE;
use ghash::universal_hash::UniversalHash;
use ghash::GHash;
use std::io::{Read, Write};
use subtle::ConstantTimeEq;
use tracing::{debug, warn};

/// GCM's counter mode: 32-bit big-endian counter increment.
type Gcm256Ctr = Ctr32BE<Aes256>;

/// Decrypt a `IV || ciphertext || tag` stream, writing plaintext to `output`.
///
/// Reads exactly [`IV_LENGTH`] bytes as the IV, then decrypts the remainder
/// in chunks, holding back the final [`TAG_LENGTH`] bytes as the candidate
/// tag. After the input is exhausted the tag is verified over the entire
/// stream in constant time.
///
/// # Errors
///
/// - [`Error::InputTooShort`] if the stream ends before the IV (or the tag)
///   could be read. Nothing has been written to `output` in the IV case.
/// - [`Error::IntegrityViolation`] if the tag check fails. Plaintext has
///   already been written; the caller must discard it.
/// - [`Error::Io`] for failures of the underlying handles.
///
/// Both handles are owned by the caller and must be closed by the caller on
/// every exit path.
pub fn decrypt_stream<R: Read, W: Write>(
    input: &mut R,
    output: &mut W,
    key: &SymmetricKey,
) -> Result<()> {
    let iv = read_iv(input)?;

    let aes = Aes256::new_from_slice(key).expect("Invalid key length");

    // GHASH key: H = E(K, 0^128)
    let mut hash_key = aes::Block::default();
    aes.encrypt_block(&mut hash_key);
    let hash_key = ghash::Key::clone_from_slice(hash_key.as_slice());

    // Pre-counter block J0. The wire format's IV is 16 bytes, not GCM's
    // fast-path 12, so J0 = GHASH_H(IV || 0^64 || [len(IV) in bits]_64).
    let mut j0_hasher = GHash::new(&hash_key);
    j0_hasher.update_padded(&iv);
    let mut length_block = [0u8; 16];
    length_block[8..].copy_from_slice(&((IV_LENGTH as u64) * 8).to_be_bytes());
    j0_hasher.update(&[length_block.into()]);
    let j0 = j0_hasher.finalize();

    // Seeding the counter at J0 makes the first keystream block E(K, J0),
    // the tag mask; the data keystream then continues from inc32(J0),
    // exactly as GCM prescribes.
    let mut keystream = Gcm256Ctr::new(key.into(), &j0);
    let mut tag_mask = [0u8; TAG_LENGTH];
    keystream.apply_keystream(&mut tag_mask);

    let mut ghash = GHash::new(&hash_key);
    let mut ciphertext_len: u64 = 0;

    // The last TAG_LENGTH bytes of the stream are the tag, but the stream
    // length is unknown until EOF, so `pending` always retains at least
    // that much unprocessed data. Mid-stream chunks are trimmed to the AES
    // block size so GHASH never pads before the final partial block.
    let mut pending: Vec<u8> = Vec::with_capacity(STREAM_CHUNK_SIZE + TAG_LENGTH);
    let mut buf = [0u8; STREAM_CHUNK_SIZE];

    loop {
        let read = input.read(&mut buf)?;
        if read == 0 {
            break;
        }
        pending.extend_from_slice(&buf[..read]);

        if pending.len() > TAG_LENGTH {
            let mut take = pending.len() - TAG_LENGTH;
            take -= take % 16;
            if take > 0 {
                let mut chunk: Vec<u8> = pending.drain(..take).collect();
                ghash.update_padded(&chunk);
                keystream.apply_keystream(&mut chunk);
                output.write_all(&chunk)?;
                ciphertext_len += take as u64;
            }
        }
    }

    if pending.len() < TAG_LENGTH {
        return Err(Error::InputTooShort {
            needed: TAG_LENGTH,
            got: pending.len(),
        });
    }

    let tag_start = pending.len() - TAG_LENGTH;
    let tag = pending.split_off(tag_start);
    if !pending.is_empty() {
        ghash.update_padded(&pending);
        ciphertext_len += pending.len() as u64;
        keystream.apply_keystream(&mut pending);
        output.write_all(&pending)?;
    }

    // Final GHASH block: AAD bits (always zero here) || ciphertext bits.
    let mut length_block = [0u8; 16];
    length_block[8..].copy_from_slice(&(ciphertext_len * 8).to_be_bytes());
    ghash.update(&[length_block.into()]);

    let mut expected_tag = ghash.finalize();
    for (byte, mask) in expected_tag.iter_mut().zip(tag_mask.iter()) {
        *byte ^= mask;
    }

    if bool::from(expected_tag.as_slice().ct_eq(&tag)) {
        debug!(ciphertext_len, "stream decryption authenticated");
        Ok(())
    } else {
        warn!(
            ciphertext_len,
            "stream tag mismatch, partial output must be discarded"
        );
        Err(Error::IntegrityViolation)
    }
}

/// Read the IV prefix, reporting exactly how much was available on a short
/// stream.
fn read_iv<R: Read>(input: &mut R) -> Result<[u8; IV_LENGTH]> {
    let mut iv = [0u8; IV_LENGTH];
    let mut filled = 0;
    while filled < IV_LENGTH {
        let read = input.read(&mut iv[filled..])?;
        if read == 0 {
            return Err(Error::InputTooShort {
                needed: IV_LENGTH,
                got: filled,
            });
        }
        filled += read;
    }
    Ok(iv)
}
