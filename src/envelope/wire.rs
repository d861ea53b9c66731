//! BDAP wire format.
//!
//! ```text
//! N            : 2 bytes, uint16 LE, number of recipients (1..=65535)
//! U            : 32 bytes, ephemeral X25519 public key
//! slot[0..N-1] : each { fingerprint: 7 bytes, wrapped_secret: 32 bytes }
//! body         : GCM ciphertext of the plaintext (|plaintext| bytes)
//! tag          : 16 bytes, GCM authentication tag
//! ```
//!
//! The format carries no version byte and is not self-describing beyond
//! `N`: a ciphertext is well-formed iff its total length matches the size
//! formula exactly for the `N` it claims.

use crate::error::{EnvelopeError, Result};

/// Bytes contributed by one recipient slot: a 7-byte fingerprint plus a
/// 32-byte wrapped copy of the shared secret.
pub(crate) const SLOT_SIZE: usize = 7 + 32;

/// Fixed-size portion of the header: the `N` field plus the ephemeral
/// X25519 public key.
pub(crate) const HEADER_SIZE: usize = 2 + 32;

/// Bytes contributed by the GCM tag.
pub(crate) const TAG_SIZE: usize = 16;

pub(crate) const FINGERPRINT_SIZE: usize = 7;
pub(crate) const WRAPPED_SECRET_SIZE: usize = 32;

/// Computes the exact ciphertext length for `n_recipients` recipients and a
/// plaintext of `plaintext_len` bytes, per the wire layout above.
pub fn ciphertext_size(n_recipients: u16, plaintext_len: usize) -> usize {
    HEADER_SIZE + (n_recipients as usize) * SLOT_SIZE + plaintext_len + TAG_SIZE
}

/// Recovers the plaintext length a well-formed ciphertext decrypts to.
///
/// Returns `Err(MalformedCiphertext)` if the buffer is too short to hold a
/// header, slot table, and tag for the `N` it declares, or if its length
/// doesn't match the size formula for that `N` exactly.
pub fn decrypted_size(ciphertext: &[u8]) -> Result<usize> {
    parse_header(ciphertext)?;
    let n = u16::from_le_bytes([ciphertext[0], ciphertext[1]]) as usize;
    Ok(ciphertext.len() - HEADER_SIZE - n * SLOT_SIZE - TAG_SIZE)
}

/// One parsed recipient slot.
pub(crate) struct Slot<'a> {
    pub(crate) fingerprint: &'a [u8],
    pub(crate) wrapped_secret: &'a [u8; 32],
}

/// The fixed fields of a parsed ciphertext.
pub(crate) struct Parsed<'a> {
    pub(crate) n: u16,
    pub(crate) ephemeral_public: &'a [u8; 32],
    pub(crate) slots: &'a [u8],
    pub(crate) body: &'a [u8],
    pub(crate) tag: &'a [u8; 16],
}

/// Validates overall structure and returns the parsed fixed-size fields.
///
/// This only checks shape (lengths line up with the `N` field); it makes no
/// claim about authenticity, which is the GCM tag's job.
pub(crate) fn parse_header(ciphertext: &[u8]) -> Result<Parsed<'_>> {
    if ciphertext.len() < HEADER_SIZE + TAG_SIZE {
        return Err(EnvelopeError::MalformedCiphertext);
    }
    let n = u16::from_le_bytes([ciphertext[0], ciphertext[1]]);
    if n == 0 {
        return Err(EnvelopeError::MalformedCiphertext);
    }
    let expected_len = ciphertext_size(n, 0);
    if ciphertext.len() < expected_len {
        return Err(EnvelopeError::MalformedCiphertext);
    }
    let ephemeral_public: &[u8; 32] = ciphertext[2..34]
        .try_into()
        .map_err(|_| EnvelopeError::MalformedCiphertext)?;

    let slots_start = HEADER_SIZE;
    let slots_len = (n as usize) * SLOT_SIZE;
    let slots = &ciphertext[slots_start..slots_start + slots_len];

    let body_start = slots_start + slots_len;
    let body = &ciphertext[body_start..ciphertext.len() - TAG_SIZE];
    let tag: &[u8; 16] = ciphertext[ciphertext.len() - TAG_SIZE..]
        .try_into()
        .map_err(|_| EnvelopeError::MalformedCiphertext)?;

    Ok(Parsed {
        n,
        ephemeral_public,
        slots,
        body,
        tag,
    })
}

/// Iterates over the recipient slots of an already-parsed ciphertext.
pub(crate) fn slots<'a>(parsed: &Parsed<'a>) -> impl Iterator<Item = Slot<'a>> {
    parsed.slots.chunks_exact(SLOT_SIZE).map(|chunk| Slot {
        fingerprint: &chunk[..FINGERPRINT_SIZE],
        wrapped_secret: chunk[FINGERPRINT_SIZE..].try_into().unwrap(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_formula_matches_spec_examples() {
        assert_eq!(ciphertext_size(2, 5), 133);
        assert_eq!(ciphertext_size(1, 0), 89);
    }

    #[test]
    fn decrypted_size_round_trips_through_ciphertext_size() {
        let total = ciphertext_size(3, 1000);
        let buf = vec![0u8; total];
        let mut buf = buf;
        buf[0..2].copy_from_slice(&3u16.to_le_bytes());
        assert_eq!(decrypted_size(&buf).unwrap(), 1000);
    }

    #[test]
    fn too_short_buffer_is_malformed() {
        assert!(decrypted_size(&[0u8; 10]).is_err());
    }

    #[test]
    fn inconsistent_length_for_declared_n_is_malformed() {
        let mut buf = vec![0u8; ciphertext_size(1, 0)];
        buf[0..2].copy_from_slice(&2u16.to_le_bytes());
        assert!(decrypted_size(&buf).is_err());
    }

    #[test]
    fn zero_recipients_is_malformed() {
        let mut buf = vec![0u8; ciphertext_size(1, 0)];
        buf[0..2].copy_from_slice(&0u16.to_le_bytes());
        assert!(decrypted_size(&buf).is_err());
    }
}
