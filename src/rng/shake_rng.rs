//! Deterministic SHAKE-256-backed random generator.
//!
//! [`Csprng`](super::Csprng) draws from OS entropy and is the right choice
//! for real key material. `ShakeRng` instead expands a caller-supplied seed
//! through SHAKE-256, so the exact same seed always produces the exact same
//! byte stream. It exists for reproducible test vectors and benchmarks, not
//! for production randomness, and is a distinct type rather than a mode
//! switch on `Csprng` so the two can never be swapped by accident.

use crate::xof::shake256;

const BUFFER_SIZE: usize = 4096;

/// A deterministic byte stream derived from a seed via SHAKE-256.
///
/// Internally this keeps a 4096-byte buffer produced by hashing the seed
/// (or, once exhausted, the previous buffer) with SHAKE-256, and serves
/// output from the front of that buffer until it runs out.
pub struct ShakeRng {
    buffer: [u8; BUFFER_SIZE],
    available: usize,
}

impl ShakeRng {
    /// Creates a generator whose output stream is entirely determined by
    /// `seed`.
    pub fn from_seed(seed: &[u8]) -> Self {
        let mut buffer = [0u8; BUFFER_SIZE];
        shake256(seed, &mut buffer);

        Self {
            buffer,
            available: BUFFER_SIZE,
        }
    }

    /// Fills `out` with the next bytes of the deterministic stream.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        let mut written = 0;
        while written < out.len() {
            if self.available == 0 {
                let previous = self.buffer;
                shake256(&previous, &mut self.buffer);
                self.available = BUFFER_SIZE;
            }

            let take = (out.len() - written).min(self.available);
            let start = BUFFER_SIZE - self.available;
            out[written..written + take].copy_from_slice(&self.buffer[start..start + take]);

            written += take;
            self.available -= take;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_reproduces_same_stream() {
        let mut a = ShakeRng::from_seed(b"deterministic-seed");
        let mut b = ShakeRng::from_seed(b"deterministic-seed");

        let mut out_a = [0u8; 10_000];
        let mut out_b = [0u8; 10_000];
        a.fill_bytes(&mut out_a);
        b.fill_bytes(&mut out_b);

        assert_eq!(out_a[..], out_b[..]);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = ShakeRng::from_seed(b"seed-one");
        let mut b = ShakeRng::from_seed(b"seed-two");

        let mut out_a = [0u8; 64];
        let mut out_b = [0u8; 64];
        a.fill_bytes(&mut out_a);
        b.fill_bytes(&mut out_b);

        assert_ne!(out_a, out_b);
    }

    #[test]
    fn stream_survives_buffer_refill() {
        let mut rng = ShakeRng::from_seed(b"refill-seed");
        let mut out = [0u8; BUFFER_SIZE + 1000];
        rng.fill_bytes(&mut out);
        // No panics and a non-trivial stream is the only property we can
        // check without a toolchain-verified reference vector.
        assert!(out.iter().any(|&b| b != 0));
    }
}
