//! Field arithmetic modulo p = 2^255 - 19
//!
//! Elements are held as five unsigned 51-bit limbs, `value = Σ v[i]·2^(51·i)`.
//! Every operation ends with a weak reduction that brings each limb back
//! below 2^52, which keeps limb products inside `u128` without overflow.
//! Only [`FieldElement::to_bytes`] performs the strong reduction to the unique
//! representative in `[0, p)`.
//!
//! No function here branches on, or indexes memory by, the value of an element.

use core::ops::{Add, Mul, Neg, Sub};

use edsig_api::{Error, Result};
use edsig_internal::constant_time::{ct_eq_choice, ct_is_zero};
use edsig_internal::endian::u64_from_le_bytes;
use edsig_params::traditional::ed25519::SQRT_M1;
use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

const LOW_51_BIT_MASK: u64 = (1u64 << 51) - 1;

/// Field element representing a value modulo p = 2^255 - 19
#[derive(Clone, Copy, Zeroize)]
pub struct FieldElement(pub(crate) [u64; 5]);

impl core::fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("FieldElement([REDACTED])")
    }
}

impl FieldElement {
    /// The additive identity
    pub const fn zero() -> Self {
        FieldElement([0, 0, 0, 0, 0])
    }

    /// The multiplicative identity
    pub const fn one() -> Self {
        FieldElement([1, 0, 0, 0, 0])
    }

    /// Element from a small integer
    pub const fn from_u64(value: u64) -> Self {
        FieldElement([value & LOW_51_BIT_MASK, value >> 51, 0, 0, 0])
    }

    /// Decode 32 little-endian bytes, ignoring bit 255
    ///
    /// Values in `[p, 2^255)` are accepted and reduced. Use
    /// [`from_canonical_bytes`](Self::from_canonical_bytes) where the encoding
    /// must be unique.
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        FieldElement([
            u64_from_le_bytes(&bytes[0..]) & LOW_51_BIT_MASK,
            (u64_from_le_bytes(&bytes[6..]) >> 3) & LOW_51_BIT_MASK,
            (u64_from_le_bytes(&bytes[12..]) >> 6) & LOW_51_BIT_MASK,
            (u64_from_le_bytes(&bytes[19..]) >> 1) & LOW_51_BIT_MASK,
            (u64_from_le_bytes(&bytes[24..]) >> 12) & LOW_51_BIT_MASK,
        ])
    }

    /// Decode 32 little-endian bytes, rejecting anything but the unique
    /// encoding of a value below p
    ///
    /// Bit 255 must be clear; callers that carry a sign bit there strip it
    /// first.
    pub fn from_canonical_bytes(bytes: &[u8; 32]) -> Result<Self> {
        let fe = FieldElement::from_bytes(bytes);
        if bool::from(fe.is_canonical_encoding_of(bytes)) {
            Ok(fe)
        } else {
            Err(Error::NonCanonicalFieldElement)
        }
    }

    /// Constant-time check that `bytes` is the canonical encoding of `self`
    pub(crate) fn is_canonical_encoding_of(&self, bytes: &[u8; 32]) -> Choice {
        ct_eq_choice(self.to_bytes(), bytes)
    }

    /// Encode the unique representative in `[0, p)` as 32 little-endian bytes
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut limbs = FieldElement::reduce(self.0).0;

        // q = 1 exactly when the weakly reduced value is >= p
        let mut q = (limbs[0] + 19) >> 51;
        q = (limbs[1] + q) >> 51;
        q = (limbs[2] + q) >> 51;
        q = (limbs[3] + q) >> 51;
        q = (limbs[4] + q) >> 51;

        // value - q·p = value + 19·q - q·2^255; the 2^255 term drops off the top
        limbs[0] += 19 * q;

        limbs[1] += limbs[0] >> 51;
        limbs[0] &= LOW_51_BIT_MASK;
        limbs[2] += limbs[1] >> 51;
        limbs[1] &= LOW_51_BIT_MASK;
        limbs[3] += limbs[2] >> 51;
        limbs[2] &= LOW_51_BIT_MASK;
        limbs[4] += limbs[3] >> 51;
        limbs[3] &= LOW_51_BIT_MASK;
        limbs[4] &= LOW_51_BIT_MASK;

        // Pack 5 x 51 bits into 255 bits
        let mut out = [0u8; 32];
        let mut acc: u128 = 0;
        let mut acc_bits = 0usize;
        let mut idx = 0usize;
        for limb in limbs.iter() {
            acc |= (*limb as u128) << acc_bits;
            acc_bits += 51;
            while acc_bits >= 8 {
                out[idx] = acc as u8;
                acc >>= 8;
                acc_bits -= 8;
                idx += 1;
            }
        }
        out[idx] = acc as u8;
        out
    }

    /// Weak reduction: carry every limb into the next, folding the top
    /// carry back in as ·19
    #[inline(always)]
    fn reduce(mut limbs: [u64; 5]) -> FieldElement {
        let c0 = limbs[0] >> 51;
        let c1 = limbs[1] >> 51;
        let c2 = limbs[2] >> 51;
        let c3 = limbs[3] >> 51;
        let c4 = limbs[4] >> 51;

        limbs[0] &= LOW_51_BIT_MASK;
        limbs[1] &= LOW_51_BIT_MASK;
        limbs[2] &= LOW_51_BIT_MASK;
        limbs[3] &= LOW_51_BIT_MASK;
        limbs[4] &= LOW_51_BIT_MASK;

        limbs[0] += c4 * 19;
        limbs[1] += c0;
        limbs[2] += c1;
        limbs[3] += c2;
        limbs[4] += c3;

        FieldElement(limbs)
    }

    /// Add two elements
    pub fn add(&self, rhs: &FieldElement) -> FieldElement {
        let mut limbs = [0u64; 5];
        for (i, limb) in limbs.iter_mut().enumerate() {
            *limb = self.0[i] + rhs.0[i];
        }
        FieldElement::reduce(limbs)
    }

    /// Subtract `rhs` from `self`
    pub fn sub(&self, rhs: &FieldElement) -> FieldElement {
        // Add 16·p first so no limb underflows; inputs are weakly reduced
        FieldElement::reduce([
            (self.0[0] + 36028797018963664u64) - rhs.0[0],
            (self.0[1] + 36028797018963952u64) - rhs.0[1],
            (self.0[2] + 36028797018963952u64) - rhs.0[2],
            (self.0[3] + 36028797018963952u64) - rhs.0[3],
            (self.0[4] + 36028797018963952u64) - rhs.0[4],
        ])
    }

    /// Negate
    pub fn neg(&self) -> FieldElement {
        FieldElement::zero().sub(self)
    }

    /// Double
    pub fn double(&self) -> FieldElement {
        self.add(self)
    }

    /// Multiply two elements
    pub fn mul(&self, rhs: &FieldElement) -> FieldElement {
        #[inline(always)]
        fn m(x: u64, y: u64) -> u128 {
            (x as u128) * (y as u128)
        }

        let a = &self.0;
        let b = &rhs.0;

        // 2^255 = 19 mod p, so wrapped-around terms pick up a factor 19
        let b1_19 = b[1] * 19;
        let b2_19 = b[2] * 19;
        let b3_19 = b[3] * 19;
        let b4_19 = b[4] * 19;

        let c0 = m(a[0], b[0]) + m(a[4], b1_19) + m(a[3], b2_19) + m(a[2], b3_19) + m(a[1], b4_19);
        let mut c1 = m(a[1], b[0]) + m(a[0], b[1]) + m(a[4], b2_19) + m(a[3], b3_19) + m(a[2], b4_19);
        let mut c2 = m(a[2], b[0]) + m(a[1], b[1]) + m(a[0], b[2]) + m(a[4], b3_19) + m(a[3], b4_19);
        let mut c3 = m(a[3], b[0]) + m(a[2], b[1]) + m(a[1], b[2]) + m(a[0], b[3]) + m(a[4], b4_19);
        let mut c4 = m(a[4], b[0]) + m(a[3], b[1]) + m(a[2], b[2]) + m(a[1], b[3]) + m(a[0], b[4]);

        let mut out = [0u64; 5];

        c1 += ((c0 >> 51) as u64) as u128;
        out[0] = (c0 as u64) & LOW_51_BIT_MASK;

        c2 += ((c1 >> 51) as u64) as u128;
        out[1] = (c1 as u64) & LOW_51_BIT_MASK;

        c3 += ((c2 >> 51) as u64) as u128;
        out[2] = (c2 as u64) & LOW_51_BIT_MASK;

        c4 += ((c3 >> 51) as u64) as u128;
        out[3] = (c3 as u64) & LOW_51_BIT_MASK;

        let carry = (c4 >> 51) as u64;
        out[4] = (c4 as u64) & LOW_51_BIT_MASK;

        out[0] += carry * 19;
        out[1] += out[0] >> 51;
        out[0] &= LOW_51_BIT_MASK;

        FieldElement(out)
    }

    /// Square
    pub fn square(&self) -> FieldElement {
        self.mul(self)
    }

    /// Square `k` times in a row, k >= 1
    pub fn pow2k(&self, k: u32) -> FieldElement {
        debug_assert!(k > 0);
        let mut z = self.square();
        for _ in 1..k {
            z = z.square();
        }
        z
    }

    /// Returns (self^(2^250 - 1), self^11), shared by inversion and square roots
    fn pow22501(&self) -> (FieldElement, FieldElement) {
        let t0 = self.square(); // 2
        let t1 = t0.square().square(); // 8
        let t2 = self.mul(&t1); // 9
        let t3 = t0.mul(&t2); // 11
        let t4 = t3.square(); // 22
        let t5 = t2.mul(&t4); // 2^5 - 1
        let t6 = t5.pow2k(5); // 2^10 - 2^5
        let t7 = t6.mul(&t5); // 2^10 - 1
        let t8 = t7.pow2k(10); // 2^20 - 2^10
        let t9 = t8.mul(&t7); // 2^20 - 1
        let t10 = t9.pow2k(20); // 2^40 - 2^20
        let t11 = t10.mul(&t9); // 2^40 - 1
        let t12 = t11.pow2k(10); // 2^50 - 2^10
        let t13 = t12.mul(&t7); // 2^50 - 1
        let t14 = t13.pow2k(50); // 2^100 - 2^50
        let t15 = t14.mul(&t13); // 2^100 - 1
        let t16 = t15.pow2k(100); // 2^200 - 2^100
        let t17 = t16.mul(&t15); // 2^200 - 1
        let t18 = t17.pow2k(50); // 2^250 - 2^50
        let t19 = t18.mul(&t13); // 2^250 - 1

        (t19, t3)
    }

    /// Multiplicative inverse via Fermat: self^(p-2)
    ///
    /// The inverse of zero comes back as zero. Callers only invert values
    /// that are nonzero by construction.
    pub fn invert(&self) -> FieldElement {
        let (t19, t3) = self.pow22501();
        let t20 = t19.pow2k(5); // 2^255 - 2^5
        t20.mul(&t3) // 2^255 - 21
    }

    /// self^((p-5)/8) = self^(2^252 - 3)
    fn pow_p58(&self) -> FieldElement {
        let (t19, _) = self.pow22501();
        let t20 = t19.pow2k(2); // 2^252 - 4
        self.mul(&t20) // 2^252 - 3
    }

    /// Square root of the ratio u/v
    ///
    /// Returns `(was_square, r)`. When u/v is a square (including u = 0),
    /// `was_square` is set and `r` is its non-negative root. Otherwise
    /// `was_square` is unset and `r` is meaningless. `v` must be nonzero.
    pub fn sqrt_ratio(u: &FieldElement, v: &FieldElement) -> (Choice, FieldElement) {
        let sqrt_m1 = FieldElement::from_bytes(&SQRT_M1);

        let v3 = v.square().mul(v);
        let v7 = v3.square().mul(v);
        let mut r = u.mul(&v3).mul(&u.mul(&v7).pow_p58());
        let check = v.mul(&r.square());

        let neg_u = u.neg();
        let correct_sign_sqrt = check.ct_eq(u);
        let flipped_sign_sqrt = check.ct_eq(&neg_u);
        let flipped_sign_sqrt_i = check.ct_eq(&neg_u.mul(&sqrt_m1));

        let r_prime = sqrt_m1.mul(&r);
        r.conditional_assign(&r_prime, flipped_sign_sqrt | flipped_sign_sqrt_i);

        // Pick the non-negative root
        let r_is_negative = r.is_negative();
        r.conditional_negate(r_is_negative);

        (correct_sign_sqrt | flipped_sign_sqrt, r)
    }

    /// Low bit of the canonical encoding ("sign" of x in RFC 8032)
    pub fn is_negative(&self) -> Choice {
        Choice::from(self.to_bytes()[0] & 1)
    }

    /// Constant-time zero test
    pub fn is_zero(&self) -> Choice {
        ct_is_zero(&self.to_bytes())
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &FieldElement) -> Choice {
        ct_eq_choice(self.to_bytes(), other.to_bytes())
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &FieldElement) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &FieldElement, b: &FieldElement, choice: Choice) -> FieldElement {
        FieldElement([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
            u64::conditional_select(&a.0[4], &b.0[4], choice),
        ])
    }
}

impl<'a> Add<&'a FieldElement> for &'a FieldElement {
    type Output = FieldElement;
    fn add(self, rhs: &'a FieldElement) -> FieldElement {
        FieldElement::add(self, rhs)
    }
}

impl<'a> Sub<&'a FieldElement> for &'a FieldElement {
    type Output = FieldElement;
    fn sub(self, rhs: &'a FieldElement) -> FieldElement {
        FieldElement::sub(self, rhs)
    }
}

impl<'a> Mul<&'a FieldElement> for &'a FieldElement {
    type Output = FieldElement;
    fn mul(self, rhs: &'a FieldElement) -> FieldElement {
        FieldElement::mul(self, rhs)
    }
}

impl<'a> Neg for &'a FieldElement {
    type Output = FieldElement;
    fn neg(self) -> FieldElement {
        FieldElement::neg(self)
    }
}
