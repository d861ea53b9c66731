//! Ed25519 identity keys.
//!
//! This module implements just enough of Ed25519 to serve as BDAP's
//! identity key format: key pair generation and point decompression, plus
//! the conversions that let an Ed25519 identity act as an X25519 key for
//! the envelope protocol. Signing and verification are not implemented —
//! BDAP never signs with these keys.
//!
//! ## Implementation notes
//!
//! The field and group arithmetic are written from scratch in Rust, but
//! their structure, algorithms, and mathematical approach are **inspired
//! by** the widely referenced Ed25519 implementation by Orson Peters:
//!
//! <https://github.com/orlp/ed25519>
//!
//! In particular, this code follows the same high-level design principles:
//! - limb-based finite field arithmetic,
//! - explicit carry propagation,
//! - constant-time scalar and group operations,
//! - faithful adherence to the reference formulas.
//!
//! The original implementation is released into the public domain (CC0).

/// High-level Ed25519 API: key pair generation and the X25519 conversions.
pub(crate) mod core;

/// Finite field arithmetic over GF(2²⁵⁵ − 19).
pub(crate) mod field;

/// Edwards curve group operations: point (de)compression and scalar
/// multiplication.
pub(crate) mod group;

pub use core::*;
