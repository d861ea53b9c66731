//! Ed25519 identity keys: key pair generation and the two conversions that
//! let an Ed25519 identity operate as an X25519 encryption key.
//!
//! Signing and verification are deliberately absent from this module.
//! Ed25519 exists here to give every participant a single long-term
//! identity key pair; the envelope protocol performs key agreement with
//! the X25519 conversion of that same key pair, not with Ed25519 directly.

use super::field::FieldElement;
use super::group::{base_point, has_small_order, is_on_main_subgroup, scalar_mult_point, GeP3};
use crate::hash::sha512;
use crate::rng::Csprng;
use zeroize::Zeroize;

/// An Ed25519 public key: the compressed encoding of a curve point.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PublicKey([u8; 32]);

impl PublicKey {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }
}

/// An Ed25519 private key, stored as its original 32-byte seed.
///
/// The seed, rather than the derived scalar, is what both base-point
/// multiplication and X25519 conversion hash from, so the seed is what
/// this type keeps and zeroizes on drop.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct PrivateKey([u8; 32]);

impl PrivateKey {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self(seed)
    }

    pub fn seed(&self) -> &[u8; 32] {
        &self.0
    }
}

/// Clamps the first half of a SHA-512 digest into a valid Ed25519/X25519
/// scalar, per RFC 8032 section 5.1.5 and RFC 7748 section 5.
fn clamp(mut bytes: [u8; 32]) -> [u8; 32] {
    bytes[0] &= 248;
    bytes[31] &= 63;
    bytes[31] |= 64;
    bytes
}

/// Generates a fresh Ed25519 identity key pair from OS randomness.
pub fn generate_keypair() -> (PublicKey, PrivateKey) {
    let mut seed = [0u8; 32];
    Csprng::new().fill_bytes(&mut seed);
    let public = public_from_seed(&seed);
    (public, PrivateKey(seed))
}

/// Derives the public key corresponding to a given seed.
///
/// `SHA512(seed)[0..32]`, clamped, is the scalar multiplied against the
/// base point; this is the same derivation RFC 8032 uses for signing keys.
pub fn public_from_seed(seed: &[u8; 32]) -> PublicKey {
    let digest = sha512(seed);
    let scalar = clamp(digest[..32].try_into().unwrap());
    PublicKey(scalar_mult_point(&scalar, &base_point()).to_bytes())
}

/// Converts an Ed25519 public key into its X25519 Montgomery-form
/// counterpart via the standard birational map `x = (1+y)/(1-y)`.
///
/// Returns `None` if `public`'s bytes match the small-order blacklist
/// (this also catches the identity encoding, whose `y == 1` would
/// otherwise make the birational map divide by zero), if it is not a
/// valid point encoding, or if the point does not lie in the main
/// subgroup generated by the base point — a torsion point here would let
/// a sender's ephemeral contribution land in a small subgroup during the
/// X25519 exchange.
pub fn ed25519_public_to_x25519_public(public: &PublicKey) -> Option<[u8; 32]> {
    if has_small_order(&public.0) {
        return None;
    }

    let (point, status) = GeP3::decompress(&public.0);
    if status != 0 {
        return None;
    }
    if !is_on_main_subgroup(&point) {
        return None;
    }

    let recip = point.z.invert();
    let y = point.y * recip;

    let numerator = FieldElement::ONE + y;
    let denominator = FieldElement::ONE - y;

    Some((numerator * denominator.invert()).to_bytes())
}

/// Converts an Ed25519 private key into its X25519 scalar counterpart.
///
/// Unlike the public-key conversion this needs no base-point
/// multiplication: the X25519 private scalar is simply the clamped first
/// half of `SHA512(seed)`, the same value `public_from_seed` multiplies
/// against the base point to get the Ed25519 public key.
pub fn ed25519_private_to_x25519_private(private: &PrivateKey) -> [u8; 32] {
    let digest = sha512(&private.0);
    clamp(digest[..32].try_into().unwrap())
}
