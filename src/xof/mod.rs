//! Extendable-output functions.
//!
//! Implements Keccak-f[1600] and the SHAKE-256 sponge on top of it
//! (FIPS 202). Used throughout the envelope protocol for key derivation and
//! as the backing generator for the deterministic test RNG.

mod keccak;
mod shake256;

pub use shake256::{shake256, shake256_fixed};
