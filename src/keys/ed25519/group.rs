//! Edwards25519 group operations.
//!
//! Implements group arithmetic for the Edwards25519 elliptic curve:
//!
//! ```text
//! p = 2²⁵⁵ − 19
//! −x² + y² = 1 + d·x²·y²
//! ```
//!
//! ## Coordinate systems
//!
//! - **GeP3** — Extended coordinates `(X : Y : Z : T)`, the primary
//!   working representation; supports complete addition formulas without
//!   inversions.
//! - **GeP1** — Extended intermediate coordinates, produced by an addition
//!   or doubling and immediately converted into `GeP2`/`GeP3`.
//! - **GeP2** — Projective coordinates `(X : Y : Z)`, used for doubling.
//! - **GeCached** — `(Y+X, Y-X, Z, 2dT)`, the form used as the second
//!   operand of an addition.
//!
//! Unlike the reference ed25519 implementations this does not carry a
//! precomputed fixed-base table: every scalar multiplication here,
//! including against the base point, goes through the same generic
//! constant-time double-and-add ladder in [`scalar_mult_point`]. BDAP
//! needs scalar multiplication against arbitrary recipient points (for
//! main-subgroup validation) as much as against the base point, so a
//! single generic routine is the simpler and more auditable choice.

use super::field::FieldElement;

/// `D = -121665/121666`, the Edwards25519 curve constant.
const D: FieldElement = FieldElement([
    -10913610, 13857413, -15372611, 6949391, 114729, -8787816, -6275908, -3247719, -18696448,
    -12055116,
]);

/// `2*D`, precomputed for the addition formulas.
const D2: FieldElement = FieldElement([
    -21827239, -5839606, -30745221, 13898782, 229458, 15978800, -12551817, -6495438, 29715968,
    9444199,
]);

/// A square root of `-1` in the field, used during point decompression.
const SQRTM1: FieldElement = FieldElement([
    -32595792, -7943725, 9377950, 3500415, 12389472, -272473, -25146209, -2005654, 326686,
    11406482,
]);

/// Compressed encoding of the standard Ed25519 base point `B`.
const BASE_POINT_BYTES: [u8; 32] = [
    0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66,
];

/// Order of the main subgroup generated by `B`, little-endian.
///
/// `ℓ = 2^252 + 27742317777372353535851937790883648493`.
const GROUP_ORDER_BYTES: [u8; 32] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde,
    0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x10,
];

/// Compressed encoding of the curve identity (the neutral point `(0, 1)`).
const IDENTITY_BYTES: [u8; 32] = {
    let mut b = [0u8; 32];
    b[0] = 1;
    b
};

/// Canonical byte encodings of every point of order 1, 2, 4, or 8,
/// including their `p`-offset aliases. Any one of these accepted as a
/// recipient key would make the derived shared point trivially
/// predictable.
const SMALL_ORDER_BLACKLIST: [[u8; 32]; 7] = [
    // 0 (order 4)
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00,
    ],
    // 1 (order 1)
    [
        0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00,
    ],
    // 2707385501144840649318225287225658788936804267575313519463743609750303402022 (order 8)
    [
        0x26, 0xe8, 0x95, 0x8f, 0xc2, 0xb2, 0x27, 0xb0, 0x45, 0xc3, 0xf4, 0x89, 0xf2, 0xef, 0x98,
        0xf0, 0xd5, 0xdf, 0xac, 0x05, 0xd3, 0xc6, 0x33, 0x39, 0xb1, 0x38, 0x02, 0x88, 0x6d, 0x53,
        0xfc, 0x05,
    ],
    // 55188659117513257062467267217118295137698188065244968500265048394206261417927 (order 8)
    [
        0xc7, 0x17, 0x6a, 0x70, 0x3d, 0x4d, 0xd8, 0x4f, 0xba, 0x3c, 0x0b, 0x76, 0x0d, 0x10, 0x67,
        0x0f, 0x2a, 0x20, 0x53, 0xfa, 0x2c, 0x39, 0xcc, 0xc6, 0x4e, 0xc7, 0xfd, 0x77, 0x92, 0xac,
        0x03, 0x7a,
    ],
    // p-1 (order 2)
    [
        0xec, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0x7f,
    ],
    // p (=0, order 4)
    [
        0xed, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0x7f,
    ],
    // p+1 (=1, order 1)
    [
        0xee, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0x7f,
    ],
];

/// Byte-level, constant-time check of a compressed point encoding against
/// [`SMALL_ORDER_BLACKLIST`]. The last byte's sign bit (bit 7) is masked
/// out of the comparison, since it encodes `x`'s sign, not `y`.
pub(crate) fn has_small_order(bytes: &[u8; 32]) -> bool {
    let mut acc = [0u8; SMALL_ORDER_BLACKLIST.len()];

    for j in 0..31 {
        for (i, candidate) in SMALL_ORDER_BLACKLIST.iter().enumerate() {
            acc[i] |= bytes[j] ^ candidate[j];
        }
    }
    for (i, candidate) in SMALL_ORDER_BLACKLIST.iter().enumerate() {
        acc[i] |= (bytes[31] & 0x7f) ^ candidate[31];
    }

    let mut hit = 0u32;
    for a in acc {
        hit |= (a as u32).wrapping_sub(1) >> 8;
    }
    (hit & 1) == 1
}

/// Group element in extended intermediate coordinates.
///
/// Produced by an addition or doubling formula and immediately converted
/// into `GeP2` or `GeP3`; never stored long-term.
pub(crate) struct GeP1 {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

impl GeP1 {
    /// Computes `a + b` where `a` is in extended coordinates and `b` is a
    /// cached point.
    pub(crate) fn from_sum(a: &GeP3, b: &GeCached) -> Self {
        let mut x = a.y + a.x;
        let mut y = a.y - a.x;
        let mut z = x * b.yplusx;
        let mut t = b.t2d * a.t;

        y = y * b.yminusx;
        x = a.z * b.z;

        let sumx = x + x;

        x = z - y;
        y = z + y;
        z = sumx + t;
        t = sumx - t;

        Self { x, y, z, t }
    }

    /// Computes `a - b` where `a` is in extended coordinates and `b` is a
    /// cached point.
    pub(crate) fn from_difference(a: &GeP3, b: &GeCached) -> Self {
        let mut x = a.y + a.x;
        let mut y = a.y - a.x;
        let mut z = x * b.yminusx;
        let mut t = b.t2d * a.t;

        y = y * b.yplusx;
        x = a.z * b.z;

        let sumx = x + x;

        x = z - y;
        y = z + y;
        z = sumx - t;
        t = sumx + t;

        Self { x, y, z, t }
    }
}

/// A point on the Edwards curve in projective coordinates `(X : Y : Z)`,
/// used mainly as a doubling intermediate.
pub(crate) struct GeP2 {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
}

impl GeP2 {
    /// The neutral element `(0, 1)`.
    pub(crate) const ONE: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
    };

    pub(crate) fn from_gep1(g: &GeP1) -> Self {
        let x = g.x * g.t;
        let y = g.y * g.z;
        let z = g.z * g.t;

        GeP2 { x, y, z }
    }

    pub(crate) fn from_gep3(g: &GeP3) -> Self {
        GeP2 {
            x: g.x,
            y: g.y,
            z: g.z,
        }
    }

    /// Doubles the point, returning the result in `GeP1` form.
    pub(crate) fn double(self) -> GeP1 {
        let mut x = self.x.square();
        let mut z = self.y.square();
        let mut t = self.z.double_square();
        let mut y = self.x + self.y;
        let ysquare = y.square();

        y = z + x;
        z = z - x;
        x = ysquare - y;
        t = t - z;

        GeP1 { x, y, z, t }
    }
}

/// A point on the Edwards25519 curve in extended coordinates `(X:Y:Z:T)`,
/// the primary working representation for group operations.
pub(crate) struct GeP3 {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

impl GeP3 {
    /// The identity element `(0, 1)`.
    pub(crate) const ONE: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
        t: FieldElement::ZERO,
    };

    #[inline(always)]
    pub(crate) fn double(&self) -> GeP1 {
        GeP2::from_gep3(self).double()
    }

    pub(crate) fn from_gep1(g: &GeP1) -> Self {
        let x = g.x * g.t;
        let y = g.y * g.z;
        let z = g.z * g.t;
        let t = g.x * g.y;

        Self { x, y, z, t }
    }

    /// Replaces `self` with `rhs` when `choice == 1`, leaves it unchanged
    /// when `choice == 0`. Constant-time with respect to `choice`.
    pub(crate) fn conditional_move(&mut self, rhs: &Self, choice: u8) {
        self.x.conditional_move(&rhs.x, choice as u32);
        self.y.conditional_move(&rhs.y, choice as u32);
        self.z.conditional_move(&rhs.z, choice as u32);
        self.t.conditional_move(&rhs.t, choice as u32);
    }

    /// Encodes the point into its compressed 32-byte representation: the
    /// `y` coordinate little-endian, with the sign of `x` folded into the
    /// top bit.
    pub(crate) fn to_bytes(&self) -> [u8; 32] {
        let recip = self.z.invert();
        let x = self.x * recip;
        let y = self.y * recip;

        let mut output = y.to_bytes();
        output[31] ^= (x.is_negative() as u8) << 7;

        output
    }

    /// Decompresses a point from its 32-byte encoding.
    ///
    /// Reconstructs `x` from `x² ≡ (y²−1)·(d·y²+1)⁻¹ (mod p)` via
    /// exponentiation by `(p-5)/8`, trying the `SQRTM1`-scaled alternative
    /// root if the first candidate fails, and finally enforcing the sign
    /// bit carried in `s[31]`.
    ///
    /// Returns `(point, status)` with `status == 0` on success and `-1` if
    /// `s` is not a valid point encoding.
    pub(crate) fn decompress(s: &[u8; 32]) -> (Self, i32) {
        let mut h = Self {
            x: FieldElement::ZERO,
            y: FieldElement::from_bytes(s),
            z: FieldElement::ONE,
            t: FieldElement::ZERO,
        };

        let mut u = h.y.square();
        let mut v = u * D;
        u = u - h.z;
        v = v + h.z;

        let v3 = v.square() * v;

        h.x = v3.square();
        h.x = h.x * v;
        h.x = h.x * u;
        h.x = h.x.pow22523();
        h.x = h.x * v3;
        h.x = h.x * u;

        let vxx = h.x.square() * v;
        let mut check = vxx - u;

        if check.is_non_zero() == 1 {
            check = vxx + u;

            if check.is_non_zero() == 1 {
                return (h, -1);
            }

            h.x = h.x * SQRTM1;
        }

        let sign = (s[31] >> 7) as i32;
        if h.x.is_negative() == sign {
            h.x = -h.x;
        }

        h.t = h.x * h.y;

        (h, 0)
    }
}

/// Cached form of a point, `(Y+X, Y-X, Z, 2dT)`, used as the second
/// operand of an addition or subtraction.
pub(crate) struct GeCached {
    pub(crate) yplusx: FieldElement,
    pub(crate) yminusx: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t2d: FieldElement,
}

impl GeCached {
    pub(crate) const ZERO: Self = Self {
        yplusx: FieldElement::ZERO,
        yminusx: FieldElement::ZERO,
        z: FieldElement::ZERO,
        t2d: FieldElement::ZERO,
    };

    pub(crate) fn from_p3(g: &GeP3) -> GeCached {
        let yplusx = g.y + g.x;
        let yminusx = g.y - g.x;
        let z = g.z;
        let t2d = g.t * D2;

        GeCached {
            yplusx,
            yminusx,
            z,
            t2d,
        }
    }
}

/// Decompresses the standard Ed25519 base point.
///
/// The encoding is a curve constant known to decompress successfully, so
/// this never returns an error in practice.
pub(crate) fn base_point() -> GeP3 {
    let (point, status) = GeP3::decompress(&BASE_POINT_BYTES);
    debug_assert_eq!(status, 0);
    point
}

/// Computes `[scalar] * point` using a constant-time, fixed-length
/// double-and-add ladder over the bits of `scalar` (big-endian bit order,
/// MSB first).
///
/// This works for any point on the curve, not just the base point, which
/// is what both fixed-base key derivation and main-subgroup validation
/// need.
pub(crate) fn scalar_mult_point(scalar: &[u8; 32], point: &GeP3) -> GeP3 {
    let cached = GeCached::from_p3(point);
    let mut acc = GeP3::ONE;

    for i in (0..256).rev() {
        acc = GeP3::from_gep1(acc.double());

        let byte = scalar[i / 8];
        let bit = (byte >> (i % 8)) & 1;

        let added = GeP3::from_gep1(GeP1::from_sum(&acc, &cached));
        acc.conditional_move(&added, bit);
    }

    acc
}

/// Checks whether `point` lies in the main subgroup generated by `B`
/// (order `ℓ`), by verifying `[ℓ] * point` is the identity.
///
/// Points of small order (dividing the curve's cofactor 8) fail this
/// check because `ℓ` is coprime to 8.
pub(crate) fn is_on_main_subgroup(point: &GeP3) -> bool {
    let result = scalar_mult_point(&GROUP_ORDER_BYTES, point);
    result.to_bytes() == IDENTITY_BYTES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_point_decompresses() {
        let b = base_point();
        assert_eq!(b.to_bytes(), BASE_POINT_BYTES);
    }

    #[test]
    fn base_point_is_on_main_subgroup() {
        assert!(is_on_main_subgroup(&base_point()));
    }

    #[test]
    fn scalar_mult_by_zero_is_identity() {
        let zero = [0u8; 32];
        let result = scalar_mult_point(&zero, &base_point());
        assert_eq!(result.to_bytes(), IDENTITY_BYTES);
    }

    #[test]
    fn scalar_mult_by_one_is_identity_operation() {
        let mut one = [0u8; 32];
        one[0] = 1;
        let result = scalar_mult_point(&one, &base_point());
        assert_eq!(result.to_bytes(), BASE_POINT_BYTES);
    }

    #[test]
    fn every_blacklisted_encoding_has_small_order() {
        for candidate in &SMALL_ORDER_BLACKLIST {
            assert!(has_small_order(candidate));
        }
    }

    #[test]
    fn base_point_does_not_have_small_order() {
        assert!(!has_small_order(&BASE_POINT_BYTES));
    }

    #[test]
    fn sign_bit_is_ignored_when_checking_small_order() {
        let mut identity_with_sign_bit = IDENTITY_BYTES;
        identity_with_sign_bit[31] |= 0x80;
        assert!(has_small_order(&identity_with_sign_bit));
    }
}
