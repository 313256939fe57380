//! Points on the twisted Edwards curve -x² + y² = 1 + d·x²·y²

use super::field::FieldElement;
use super::scalar::{ClampedScalar, Scalar};
use edsig_api::{Error, Result};
use edsig_params::traditional::ed25519::{
    BASE_X, BASE_Y, COMPRESSED_Y_LENGTH, EDWARDS_D, EDWARDS_D2,
};
use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Point in extended coordinates (X:Y:Z:T)
///
/// Represents the affine point (X/Z, Y/Z) with the auxiliary coordinate
/// T = XY/Z. The formulas used are complete for this curve, so the identity
/// and points of small order need no special casing.
#[derive(Clone, Copy)]
pub struct EdwardsPoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

// Points such as r·B are secret until compressed
impl core::fmt::Debug for EdwardsPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("EdwardsPoint([REDACTED])")
    }
}

/// Compressed encoding of a point: y in the low 255 bits, the sign of x in
/// bit 255
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CompressedY(pub [u8; COMPRESSED_Y_LENGTH]);

impl CompressedY {
    /// View as bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Copy out the bytes
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Decode without branching on the encoding
    ///
    /// None when y is not canonical, when no x satisfies the curve equation,
    /// or when x = 0 while the sign bit is set.
    pub fn decompress_ct(&self) -> CtOption<EdwardsPoint> {
        let (point, y_is_canonical, is_square, sign_ok) = self.decode_unchecked();
        CtOption::new(point, y_is_canonical & is_square & sign_ok)
    }

    /// Decode, reporting why decoding failed
    ///
    /// A non-canonical y yields [`Error::NonCanonicalFieldElement`]; any
    /// other failure yields [`Error::PublicKeyBytesInvalid`]. Only use on
    /// public data, since the result distinguishes the two causes.
    pub fn decompress(&self) -> Result<EdwardsPoint> {
        let (point, y_is_canonical, is_square, sign_ok) = self.decode_unchecked();
        if !bool::from(y_is_canonical) {
            return Err(Error::NonCanonicalFieldElement);
        }
        if !bool::from(is_square & sign_ok) {
            return Err(Error::PublicKeyBytesInvalid);
        }
        Ok(point)
    }

    /// Recover a candidate point plus the three validity conditions:
    /// canonical y, x² has a root, and the sign bit is usable
    fn decode_unchecked(&self) -> (EdwardsPoint, Choice, Choice, Choice) {
        let sign = Choice::from(self.0[31] >> 7);

        let mut y_bytes = self.0;
        y_bytes[31] &= 0x7f;
        let y = FieldElement::from_bytes(&y_bytes);
        let y_is_canonical = y.is_canonical_encoding_of(&y_bytes);

        // x² = (y² - 1) / (d·y² + 1); the denominator never vanishes as d is
        // not a square
        let d = FieldElement::from_bytes(&EDWARDS_D);
        let yy = y.square();
        let u = yy.sub(&FieldElement::one());
        let v = yy.mul(&d).add(&FieldElement::one());
        let (is_square, mut x) = FieldElement::sqrt_ratio(&u, &v);

        // sqrt_ratio returns the even root; the encoding asks for the odd one
        // when the sign bit is set, which is impossible for x = 0
        let sign_ok = !(x.is_zero() & sign);
        x.conditional_negate(sign);

        let point = EdwardsPoint {
            x,
            y,
            z: FieldElement::one(),
            t: x.mul(&y),
        };
        (point, y_is_canonical, is_square, sign_ok)
    }
}

impl EdwardsPoint {
    /// The neutral element (0, 1)
    pub fn identity() -> Self {
        EdwardsPoint {
            x: FieldElement::zero(),
            y: FieldElement::one(),
            z: FieldElement::one(),
            t: FieldElement::zero(),
        }
    }

    /// The standard generator B of the prime-order subgroup
    pub fn base_point() -> Self {
        let x = FieldElement::from_bytes(&BASE_X);
        let y = FieldElement::from_bytes(&BASE_Y);
        EdwardsPoint {
            x,
            y,
            z: FieldElement::one(),
            t: x.mul(&y),
        }
    }

    /// Point addition (add-2008-hwcd-3 for a = -1)
    pub fn add(&self, other: &EdwardsPoint) -> EdwardsPoint {
        let d2 = FieldElement::from_bytes(&EDWARDS_D2);

        let a = self.y.sub(&self.x).mul(&other.y.sub(&other.x));
        let b = self.y.add(&self.x).mul(&other.y.add(&other.x));
        let c = self.t.mul(&d2).mul(&other.t);
        let d = self.z.double().mul(&other.z);

        let e = b.sub(&a);
        let f = d.sub(&c);
        let g = d.add(&c);
        let h = b.add(&a);

        EdwardsPoint {
            x: e.mul(&f),
            y: g.mul(&h),
            z: f.mul(&g),
            t: e.mul(&h),
        }
    }

    /// Point doubling (dbl-2008-hwcd for a = -1)
    pub fn double(&self) -> EdwardsPoint {
        let a = self.x.square();
        let b = self.y.square();
        let c = self.z.square().double();
        let d = a.neg();

        let e = self.x.add(&self.y).square().sub(&a).sub(&b);
        let g = d.add(&b);
        let f = g.sub(&c);
        let h = d.sub(&b);

        EdwardsPoint {
            x: e.mul(&f),
            y: g.mul(&h),
            z: f.mul(&g),
            t: e.mul(&h),
        }
    }

    /// Negation: (x, y) -> (-x, y)
    pub fn neg(&self) -> EdwardsPoint {
        EdwardsPoint {
            x: self.x.neg(),
            y: self.y,
            z: self.z,
            t: self.t.neg(),
        }
    }

    /// Point subtraction
    pub fn sub(&self, other: &EdwardsPoint) -> EdwardsPoint {
        self.add(&other.neg())
    }

    /// Multiply by the 256-bit little-endian integer in `scalar`
    ///
    /// Double-and-always-add from the top bit down. Both branches are
    /// computed every round and the result picked with a conditional move,
    /// so the sequence of operations does not depend on the scalar.
    pub fn mul_bytes(&self, scalar: &[u8; 32]) -> EdwardsPoint {
        let mut acc = EdwardsPoint::identity();
        for i in (0..256).rev() {
            acc = acc.double();
            let sum = acc.add(self);
            let bit = Choice::from((scalar[i >> 3] >> (i & 7)) & 1);
            acc = EdwardsPoint::conditional_select(&acc, &sum, bit);
        }
        acc
    }

    /// Scalar multiplication
    pub fn mul(&self, scalar: &Scalar) -> EdwardsPoint {
        self.mul_bytes(scalar.as_bytes())
    }

    /// Multiply by a clamped secret scalar without reducing it first
    pub fn mul_clamped(&self, scalar: &ClampedScalar) -> EdwardsPoint {
        self.mul_bytes(scalar.as_bytes())
    }

    /// `scalar · B`
    pub fn mul_base(scalar: &Scalar) -> EdwardsPoint {
        EdwardsPoint::base_point().mul(scalar)
    }

    /// Multiply by the cofactor 8
    pub fn mul_by_cofactor(&self) -> EdwardsPoint {
        self.double().double().double()
    }

    /// Encode as 32 bytes
    pub fn compress(&self) -> CompressedY {
        let recip = self.z.invert();
        let x = self.x.mul(&recip);
        let y = self.y.mul(&recip);
        let mut bytes = y.to_bytes();
        bytes[31] ^= x.is_negative().unwrap_u8() << 7;
        CompressedY(bytes)
    }

    /// Check the projective curve equation and the consistency of T
    pub fn is_on_curve(&self) -> Choice {
        let d = FieldElement::from_bytes(&EDWARDS_D);
        let xx = self.x.square();
        let yy = self.y.square();
        let zz = self.z.square();

        // (-X² + Y²)·Z² = Z⁴ + d·X²·Y²
        let lhs = yy.sub(&xx).mul(&zz);
        let rhs = zz.square().add(&d.mul(&xx).mul(&yy));
        let t_ok = self.x.mul(&self.y).ct_eq(&self.z.mul(&self.t));

        lhs.ct_eq(&rhs) & t_ok
    }

    /// Constant-time identity test
    pub fn is_identity(&self) -> Choice {
        self.ct_eq(&EdwardsPoint::identity())
    }

    /// Whether the point lies in the torsion subgroup of order dividing 8
    pub fn is_small_order(&self) -> Choice {
        self.mul_by_cofactor().is_identity()
    }
}

impl ConstantTimeEq for EdwardsPoint {
    fn ct_eq(&self, other: &EdwardsPoint) -> Choice {
        // X1/Z1 == X2/Z2 and Y1/Z1 == Y2/Z2 without inverting
        let x_eq = self.x.mul(&other.z).ct_eq(&other.x.mul(&self.z));
        let y_eq = self.y.mul(&other.z).ct_eq(&other.y.mul(&self.z));
        x_eq & y_eq
    }
}

impl PartialEq for EdwardsPoint {
    fn eq(&self, other: &EdwardsPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for EdwardsPoint {}

impl ConditionallySelectable for EdwardsPoint {
    fn conditional_select(a: &EdwardsPoint, b: &EdwardsPoint, choice: Choice) -> EdwardsPoint {
        EdwardsPoint {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
            t: FieldElement::conditional_select(&a.t, &b.t, choice),
        }
    }
}

impl Default for EdwardsPoint {
    fn default() -> Self {
        EdwardsPoint::identity()
    }
}
