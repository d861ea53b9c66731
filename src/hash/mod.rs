//! Hash algorithms exposed by the crate.
//!
//! SHA-512, used to derive an X25519 private scalar from an Ed25519 seed.

pub mod sha512;

pub use sha512::sha512;
