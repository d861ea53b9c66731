//! SHA-512 internal computations
//!
//! Low-level bitwise functions and the compression round logic used by the
//! SHA-512 hash function, as defined in FIPS 180-4. Mirrors the structure of
//! the SHA-256 computations module, with 64-bit words, 64-bit rotation
//! amounts, and 80 rounds instead of 64.

use crate::hash::sha512::K512;

/// SHA-512 small sigma function σ₀.
///
/// Defined as:
/// σ₀(x) = ROTR¹(x) ⊕ ROTR⁸(x) ⊕ SHR⁷(x)
#[inline(always)]
pub fn small_sigma0(x: u64) -> u64 {
    x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
}

/// SHA-512 small sigma function σ₁.
///
/// Defined as:
/// σ₁(x) = ROTR¹⁹(x) ⊕ ROTR⁶¹(x) ⊕ SHR⁶(x)
#[inline(always)]
pub fn small_sigma1(x: u64) -> u64 {
    x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
}

/// SHA-512 big sigma function Σ₀.
///
/// Defined as:
/// Σ₀(x) = ROTR²⁸(x) ⊕ ROTR³⁴(x) ⊕ ROTR³⁹(x)
#[inline(always)]
pub fn big_sigma0(x: u64) -> u64 {
    x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
}

/// SHA-512 big sigma function Σ₁.
///
/// Defined as:
/// Σ₁(x) = ROTR¹⁴(x) ⊕ ROTR¹⁸(x) ⊕ ROTR⁴¹(x)
#[inline(always)]
pub fn big_sigma1(x: u64) -> u64 {
    x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
}

/// SHA-512 choice function `Ch`.
#[inline(always)]
pub fn ch(e: u64, f: u64, g: u64) -> u64 {
    (e & f) ^ ((!e) & g)
}

/// SHA-512 majority function `Maj`.
#[inline(always)]
pub fn maj(a: u64, b: u64, c: u64) -> u64 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Executes all 80 rounds of the SHA-512 compression function.
///
/// # Parameters
/// - `state`: the current hash state (8 × 64-bit words)
/// - `w`: the first 16 words of the message schedule (big-endian)
pub fn all_rounds(state: &mut [u64; 8], mut w: [u64; 16]) {
    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];
    let mut f = state[5];
    let mut g = state[6];
    let mut h = state[7];

    for i in 0..80 {
        if i >= 16 {
            let w16 = w[(i - 16) & 15];
            let w15 = w[(i - 15) & 15];
            let w7 = w[(i - 7) & 15];
            let w2 = w[(i - 2) & 15];

            let s0 = small_sigma0(w15);
            let s1 = small_sigma1(w2);

            w[i & 15] = w16.wrapping_add(s0).wrapping_add(w7).wrapping_add(s1);
        }

        let wi = w[i & 15];
        let ki = K512[i];

        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(wi)
            .wrapping_add(ki);

        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    state[5] = state[5].wrapping_add(f);
    state[6] = state[6].wrapping_add(g);
    state[7] = state[7].wrapping_add(h);
}
