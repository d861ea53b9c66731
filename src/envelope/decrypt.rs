//! Envelope decryption: the recipient's half of the BDAP protocol.

use super::wire::{self, parse_header, slots};
use crate::aes::{ctr_crypt, gcm_decrypt};
use crate::error::{EnvelopeError, Result};
use crate::keys::ed25519::{ed25519_private_to_x25519_private, public_from_seed, PrivateKey};
use crate::keys::x25519;
use crate::secure::{constant_time_eq, LockedSecret};
use crate::xof::shake256_fixed;
use zeroize::Zeroize;

/// Decrypts `ciphertext` using the recipient's 32-byte Ed25519 seed.
///
/// Locates the slot whose fingerprint matches the recipient's own public
/// key, unwraps the shared secret, and authenticates and decrypts the body.
/// The GCM tag, not the fingerprint, is what actually authenticates the
/// result: a fingerprint collision with a different recipient's slot
/// surfaces as [`EnvelopeError::GcmDecryptFailed`], never as success.
pub fn decrypt(seed: [u8; 32], ciphertext: &[u8]) -> Result<Vec<u8>> {
    log::debug!("decrypt: opening a {}-byte envelope", ciphertext.len());

    // Lock order: seed before the derived scalar; unlocked LIFO via the
    // reverse drop order of these two bindings.
    let mut seed_buf = LockedSecret::new(seed).ok_or_else(|| {
        log::warn!("decrypt: failed to lock the seed buffer in memory");
        EnvelopeError::MemoryProtectionFailed
    })?;

    let private = PrivateKey::from_seed(*seed_buf.as_bytes());
    let public = public_from_seed(seed_buf.as_bytes());

    let parsed = parse_header(ciphertext).map_err(|e| {
        log::warn!("decrypt: malformed ciphertext header");
        e
    })?;

    let public_bytes = public.to_bytes();
    let fingerprint = &public_bytes[..wire::FINGERPRINT_SIZE];
    let matched = slots(&parsed)
        .find(|slot| constant_time_eq(slot.fingerprint, fingerprint))
        .ok_or_else(|| {
            log::debug!("decrypt: no slot fingerprint matched this recipient");
            EnvelopeError::NoValidRecipient
        })?;
    let wrapped: [u8; 32] = *matched.wrapped_secret;

    let xsk = ed25519_private_to_x25519_private(&private);
    let mut scalar_buf =
        LockedSecret::new(xsk).ok_or(EnvelopeError::MemoryProtectionFailed)?;

    let result = decrypt_with_scalar(scalar_buf.as_bytes(), &parsed, &wrapped);

    scalar_buf.unlock();
    seed_buf.unlock();

    result
}

fn decrypt_with_scalar(
    xsk: &[u8; 32],
    parsed: &wire::Parsed<'_>,
    wrapped: &[u8; 32],
) -> Result<Vec<u8>> {
    let xpk = x25519::public_key_from_private(xsk);

    let mut q = x25519::exchange(xsk, parsed.ephemeral_public).map_err(|e| {
        log::warn!("decrypt: X25519 DH with the ephemeral public key failed");
        e
    })?;

    let mut ikm = [0u8; 32 + 32 + 32];
    ikm[..32].copy_from_slice(&q);
    ikm[32..64].copy_from_slice(&xpk);
    ikm[64..].copy_from_slice(parsed.ephemeral_public);
    let mut key_iv: [u8; 48] = shake256_fixed(&ikm);
    q.zeroize();
    ikm.zeroize();

    let key: [u8; 32] = key_iv[..32].try_into().unwrap();
    let iv: [u8; 16] = key_iv[32..].try_into().unwrap();
    key_iv.zeroize();

    let mut s = [0u8; 32];
    ctr_crypt(&mut s, wrapped, &iv, &key);

    let mut bulk: [u8; 44] = shake256_fixed(&s);
    let body_key: [u8; 32] = bulk[..32].try_into().unwrap();
    let nonce: [u8; 12] = bulk[32..].try_into().unwrap();
    s.zeroize();
    bulk.zeroize();

    let mut plaintext = vec![0u8; parsed.body.len()];
    let mut c = Vec::with_capacity(parsed.body.len() + wire::TAG_SIZE);
    c.extend_from_slice(parsed.body);
    c.extend_from_slice(parsed.tag);

    let ok = gcm_decrypt(&mut plaintext, &c, &[], &nonce, &body_key);
    c.zeroize();

    if !ok {
        plaintext.zeroize();
        log::warn!("decrypt: GCM tag verification failed");
        return Err(EnvelopeError::GcmDecryptFailed);
    }

    Ok(plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::encrypt::encrypt;
    use crate::keys::ed25519::generate_keypair;
    use crate::rng::Csprng;

    #[test]
    fn round_trip_for_every_recipient() {
        let (pk_a, sk_a) = generate_keypair();
        let (pk_b, sk_b) = generate_keypair();
        let mut rng = Csprng::new();

        let ct = encrypt(&[pk_a, pk_b], b"hello", &mut rng).unwrap();

        assert_eq!(decrypt(*sk_a.seed(), &ct).unwrap(), b"hello".to_vec());
        assert_eq!(decrypt(*sk_b.seed(), &ct).unwrap(), b"hello".to_vec());
    }

    #[test]
    fn empty_payload_round_trips() {
        let (pk, sk) = generate_keypair();
        let mut rng = Csprng::new();

        let ct = encrypt(&[pk], b"", &mut rng).unwrap();
        assert_eq!(ct.len(), wire::ciphertext_size(1, 0));
        assert_eq!(decrypt(*sk.seed(), &ct).unwrap(), b"".to_vec());
    }

    #[test]
    fn tampered_tag_is_rejected() {
        let (pk, sk) = generate_keypair();
        let mut rng = Csprng::new();

        let mut ct = encrypt(&[pk], b"hello", &mut rng).unwrap();
        let last = ct.len() - 1;
        ct[last] ^= 0xFF;

        assert_eq!(decrypt(*sk.seed(), &ct), Err(EnvelopeError::GcmDecryptFailed));
    }

    #[test]
    fn wrong_recipient_is_rejected() {
        let (pk_a, _) = generate_keypair();
        let (_, sk_b) = generate_keypair();
        let mut rng = Csprng::new();

        let ct = encrypt(&[pk_a], b"hello", &mut rng).unwrap();
        assert_eq!(decrypt(*sk_b.seed(), &ct), Err(EnvelopeError::NoValidRecipient));
    }
}
