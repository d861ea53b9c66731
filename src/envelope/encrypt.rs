//! Envelope encryption: the sender's half of the BDAP protocol.

use super::wire::{self, FINGERPRINT_SIZE};
use crate::aes::{ctr_crypt, gcm_encrypt};
use crate::error::{EnvelopeError, Result};
use crate::keys::ed25519::{ed25519_public_to_x25519_public, PublicKey};
use crate::keys::x25519;
use crate::rng::EnvelopeRng;
use crate::xof::shake256_fixed;
use zeroize::Zeroize;

/// Encrypts `plaintext` for every public key in `recipients`.
///
/// Produces a ciphertext of exactly
/// `wire::ciphertext_size(recipients.len() as u16, plaintext.len())` bytes,
/// or fails with the first error encountered, having zeroed every
/// intermediate secret and any partially-written output on the way out.
pub fn encrypt(
    recipients: &[PublicKey],
    plaintext: &[u8],
    rng: &mut impl EnvelopeRng,
) -> Result<Vec<u8>> {
    let n = recipients.len();
    if n == 0 || n > u16::MAX as usize {
        return Err(EnvelopeError::MalformedCiphertext);
    }
    let n = n as u16;

    log::debug!("encrypt: sealing {} bytes for {n} recipients", plaintext.len());
    let mut out = vec![0u8; wire::ciphertext_size(n, plaintext.len())];

    match encrypt_into(&mut out, recipients, plaintext, rng) {
        Ok(()) => Ok(out),
        Err(e) => {
            out.zeroize();
            Err(e)
        }
    }
}

fn encrypt_into(
    out: &mut [u8],
    recipients: &[PublicKey],
    plaintext: &[u8],
    rng: &mut impl EnvelopeRng,
) -> Result<()> {
    let n = recipients.len() as u16;

    out[0..2].copy_from_slice(&n.to_le_bytes());

    let (mut ephemeral_private, ephemeral_public) = x25519::random_keypair();
    out[2..34].copy_from_slice(&ephemeral_public);

    let mut s = [0u8; 32];
    rng.fill_bytes(&mut s);

    let mut cursor = wire::HEADER_SIZE;
    for (index, recipient) in recipients.iter().enumerate() {
        let xpk = ed25519_public_to_x25519_public(recipient).ok_or_else(|| {
            log::warn!("encrypt: recipient {index} has no valid X25519 conversion");
            EnvelopeError::Ed25519ToX25519Failed
        })?;

        let mut q = x25519::exchange(&ephemeral_private, &xpk).map_err(|e| {
            log::warn!("encrypt: X25519 DH with recipient {index} failed");
            e
        })?;

        let mut ikm = [0u8; 32 + 32 + 32];
        ikm[..32].copy_from_slice(&q);
        ikm[32..64].copy_from_slice(&xpk);
        ikm[64..].copy_from_slice(&ephemeral_public);
        let mut key_iv: [u8; 48] = shake256_fixed(&ikm);
        q.zeroize();
        ikm.zeroize();

        let key: [u8; 32] = key_iv[..32].try_into().unwrap();
        let iv: [u8; 16] = key_iv[32..].try_into().unwrap();

        let recipient_bytes = recipient.to_bytes();
        out[cursor..cursor + FINGERPRINT_SIZE]
            .copy_from_slice(&recipient_bytes[..FINGERPRINT_SIZE]);
        cursor += FINGERPRINT_SIZE;

        ctr_crypt(&mut out[cursor..cursor + 32], &s, &iv, &key);
        cursor += 32;

        key_iv.zeroize();
    }

    ephemeral_private.zeroize();

    let mut bulk: [u8; 44] = shake256_fixed(&s);
    let key: [u8; 32] = bulk[..32].try_into().unwrap();
    let nonce: [u8; 12] = bulk[32..].try_into().unwrap();

    let body_len = out.len() - cursor - wire::TAG_SIZE;
    let (body, tag_region) = out[cursor..].split_at_mut(body_len);
    let mut c = vec![0u8; body_len + wire::TAG_SIZE];
    gcm_encrypt(&mut c, plaintext, &[], &nonce, &key);
    body.copy_from_slice(&c[..body_len]);
    tag_region.copy_from_slice(&c[body_len..]);
    c.zeroize();

    s.zeroize();
    bulk.zeroize();

    Ok(())
}
