//! Random number generation.
//!
//! Two generators live here, deliberately kept as distinct types rather
//! than two modes of one type: [`Csprng`] draws from OS entropy through a
//! ChaCha20-based DRBG and is what key generation and nonce derivation use
//! in production; [`ShakeRng`] expands a fixed seed through SHAKE-256 and
//! exists only so tests and benchmarks can reproduce an exact byte stream.
//! Nothing in this crate switches between them at runtime.

/// Design goals:
/// - Cryptographic security
/// - Deterministic expansion from a secure seed
/// - Forward secrecy through periodic rekeying
/// - No heap allocation
/// - Minimal and explicit API surface
pub(crate) mod chacha20;
mod csprng;
mod shake_rng;

/// Cryptographically secure pseudorandom number generator.
///
/// This type is the primary entry point for generating secure randomness
/// within this crate.
pub use csprng::Csprng;

/// Deterministic, seed-reproducible generator for tests and benchmarks.
pub use shake_rng::ShakeRng;

/// A source of randomness the envelope protocol can draw from.
///
/// Lets [`crate::envelope::encrypt`] accept either generator without caring
/// which one the caller picked.
pub trait EnvelopeRng {
    fn fill_bytes(&mut self, out: &mut [u8]);
}

impl EnvelopeRng for Csprng {
    fn fill_bytes(&mut self, out: &mut [u8]) {
        Csprng::fill_bytes(self, out)
    }
}

impl EnvelopeRng for ShakeRng {
    fn fill_bytes(&mut self, out: &mut [u8]) {
        ShakeRng::fill_bytes(self, out)
    }
}
