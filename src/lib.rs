//! BDAP: a multi-recipient end-to-end encryption envelope.
//!
//! Each recipient contributes an X25519 identity (derived from their
//! Ed25519 key pair); the sender generates a fresh ephemeral X25519 key
//! pair per message, derives a per-recipient shared secret, wraps a single
//! random bulk secret for every recipient under that shared secret with
//! AES-256-CTR, and encrypts the message body once under a key derived
//! from the bulk secret with AES-256-GCM. SHAKE-256 is the key-derivation
//! workhorse throughout.
//!
//! # Module overview
//!
//! - `error` — the envelope's error taxonomy.
//! - `os` — OS-facing entropy and memory-locking primitives.
//! - `secure` — zeroization, constant-time comparison, and locked secret
//!   buffers built on top of `os`.
//! - `hash` — SHA-512, used to derive X25519 scalars from Ed25519 seeds.
//! - `xof` — SHAKE-256 (and the Keccak-f[1600] permutation it's built on),
//!   used for key derivation and as a deterministic test RNG.
//! - `aes` — bit-sliced AES-256 and the CTR/GCM modes built on it.
//! - `rng` — the OS-backed CSPRNG used for key and nonce generation, plus
//!   a SHAKE-256-backed deterministic generator for reproducible tests.
//! - `keys` — Ed25519 identity keys and the X25519 Diffie-Hellman exchange
//!   the envelope protocol performs key agreement with.
//! - `envelope` — the protocol itself: wire format, encryption, decryption.
//!
//! # Design goals
//!
//! - No heap allocation in the field, group, and block-cipher primitives.
//! - Constant-time arithmetic and comparisons wherever secret data is
//!   involved; branches and table lookups are reserved for public data.
//! - Explicit, minimal APIs: callers pass in the randomness source and get
//!   back a `Result`, not a hidden global state machine.

mod aes;
mod error;
mod os;
mod secure;
mod xof;

pub mod envelope;
pub mod hash;
pub mod keys;
pub mod rng;

pub use error::{EnvelopeError, Result};
