//! The BDAP multi-recipient envelope protocol.
//!
//! This is the crate's only stateful entry point; every primitive it
//! composes ([`crate::keys`], [`crate::xof`], [`crate::aes`]) is a pure
//! function. `encrypt` generates a fresh ephemeral X25519 key pair, draws
//! one shared secret, wraps that secret once per recipient under a key
//! agreed with each recipient's converted X25519 identity, and encrypts the
//! payload once under a key derived from the shared secret. `decrypt`
//! reverses exactly one recipient's slot.

mod decrypt;
mod encrypt;
mod wire;

pub use decrypt::decrypt;
pub use encrypt::encrypt;
pub use wire::{ciphertext_size, decrypted_size};
