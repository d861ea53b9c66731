//! The Keccak-f[1600] permutation (FIPS 202).
//!
//! Operates on a 5x5 array of 64-bit lanes, addressed as `state[x + 5*y]`.
//! This is the permutation underlying every SHA-3/SHAKE instance; the
//! sponge construction and domain-separation byte live in [`super::shake256`].

/// Round constants for the ι step, one per of the 24 rounds.
const ROUND_CONSTANTS: [u64; 24] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Rotation offsets for the ρ step, indexed the same way as the state
/// (`x + 5*y`).
const RHO_OFFSETS: [u32; 25] = [
    0, 1, 62, 28, 27, 36, 44, 6, 55, 20, 3, 10, 43, 25, 39, 41, 45, 15, 21, 8, 18, 2, 61, 56, 14,
];

/// Applies the full 24-round Keccak-f[1600] permutation in place.
///
/// `state` holds the 25 lanes of the sponge in row-major `(x, y)` order.
pub(crate) fn keccak_f1600(state: &mut [u64; 25]) {
    for round in 0..24 {
        // θ (theta): column parity mixing.
        let mut c = [0u64; 5];
        for x in 0..5 {
            c[x] = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
        }
        let mut d = [0u64; 5];
        for x in 0..5 {
            d[x] = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
        }
        for x in 0..5 {
            for y in 0..5 {
                state[x + 5 * y] ^= d[x];
            }
        }

        // ρ (rho) and π (pi): rotate each lane, then permute lane positions.
        let mut b = [0u64; 25];
        for x in 0..5 {
            for y in 0..5 {
                let new_x = y;
                let new_y = (2 * x + 3 * y) % 5;
                b[new_x + 5 * new_y] = state[x + 5 * y].rotate_left(RHO_OFFSETS[x + 5 * y]);
            }
        }

        // χ (chi): non-linear mixing within each row.
        for x in 0..5 {
            for y in 0..5 {
                state[x + 5 * y] =
                    b[x + 5 * y] ^ ((!b[(x + 1) % 5 + 5 * y]) & b[(x + 2) % 5 + 5 * y]);
            }
        }

        // ι (iota): inject the round constant into lane (0, 0).
        state[0] ^= ROUND_CONSTANTS[round];
    }
}
