//! Asymmetric key material: Ed25519 identities and the X25519 Diffie-Hellman
//! exchange the envelope protocol is actually built on.
//!
//! ## Ed25519
//!
//! The `ed25519` module implements key pair generation, point
//! (de)compression, and the conversions that let an Ed25519 identity act
//! as an X25519 key, based on twisted Edwards curves over the field
//! 𝔽ₚ where `p = 2²⁵⁵ − 19`. It does not implement signing.
//!
//! This is a from-scratch Rust implementation inspired by the reference
//! code by Orson Peters:
//!
//! <https://github.com/orlp/ed25519>
//!
//! It closely follows the mathematical structure and execution model of
//! the reference implementation, including:
//! - limb-based field arithmetic,
//! - explicit carry propagation,
//! - constant-time group and scalar operations.
//!
//! ## X25519
//!
//! The `x25519` module implements Curve25519 Diffie-Hellman key agreement
//! using the Montgomery ladder as specified in RFC 7748. Every recipient
//! exchange in the envelope protocol goes through this module.
pub mod ed25519;
pub mod x25519;
