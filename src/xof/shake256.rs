//! SHAKE-256, an extendable-output function built on Keccak-f[1600]
//! (FIPS 202, section 6.2).
//!
//! SHAKE-256 uses a 256-bit capacity and a 1088-bit (136-byte) rate, with
//! the `1111` domain-separation suffix appended to the message before
//! padding, giving the padding byte `0x1f`. BDAP uses it for two purposes:
//! deriving per-recipient wrap keys and the bulk key/nonce from shared
//! secrets ([`crate::envelope`]), and as a deterministic test RNG
//! ([`crate::rng::ShakeRng`]).

use super::keccak::keccak_f1600;

/// Rate of the SHAKE-256 sponge, in bytes (1088 bits).
pub(crate) const RATE: usize = 136;

/// Domain-separation + padding byte for SHAKE (suffix `1111`, pad10*1).
const DOMAIN_PAD: u8 = 0x1f;

/// Absorbs `input` and squeezes `out.len()` bytes of SHAKE-256 output.
///
/// `out` may be any length; output longer than one rate's worth of bytes is
/// produced by repeatedly applying the permutation and re-squeezing
/// (squeeze-then-permute), as specified by the sponge construction.
pub fn shake256(input: &[u8], out: &mut [u8]) {
    let mut state = [0u64; 25];
    let mut state_bytes = [0u8; 200];

    // Absorbing phase: XOR the message into the state rate-sized block at a
    // time, permuting between blocks.
    let mut offset = 0;
    while offset + RATE <= input.len() {
        lanes_to_bytes(&state, &mut state_bytes);
        for i in 0..RATE {
            state_bytes[i] ^= input[offset + i];
        }
        bytes_to_lanes(&state_bytes, &mut state);
        keccak_f1600(&mut state);
        offset += RATE;
    }

    // Final (possibly empty) partial block, padded with the domain byte and
    // the final rate-boundary bit.
    lanes_to_bytes(&state, &mut state_bytes);
    let remaining = input.len() - offset;
    for i in 0..remaining {
        state_bytes[i] ^= input[offset + i];
    }
    state_bytes[remaining] ^= DOMAIN_PAD;
    state_bytes[RATE - 1] ^= 0x80;
    bytes_to_lanes(&state_bytes, &mut state);
    keccak_f1600(&mut state);

    // Squeezing phase.
    let mut produced = 0;
    while produced < out.len() {
        lanes_to_bytes(&state, &mut state_bytes);
        let take = (out.len() - produced).min(RATE);
        out[produced..produced + take].copy_from_slice(&state_bytes[..take]);
        produced += take;
        if produced < out.len() {
            keccak_f1600(&mut state);
        }
    }
}

fn lanes_to_bytes(lanes: &[u64; 25], out: &mut [u8; 200]) {
    for (i, lane) in lanes.iter().enumerate() {
        out[i * 8..i * 8 + 8].copy_from_slice(&lane.to_le_bytes());
    }
}

fn bytes_to_lanes(bytes: &[u8; 200], out: &mut [u64; 25]) {
    for (i, lane) in out.iter_mut().enumerate() {
        *lane = u64::from_le_bytes(bytes[i * 8..i * 8 + 8].try_into().unwrap());
    }
}

/// Convenience wrapper returning a fixed-size output array.
pub fn shake256_fixed<const N: usize>(input: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    shake256(input, &mut out);
    out
}
