//! Ed25519 scalar arithmetic modulo the group order L

use edsig_internal::constant_time::ct_lt_le;
use edsig_params::traditional::ed25519::{CURVE_ORDER, SCALAR_LENGTH};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::Zeroize;

/// L as signed limbs, as consumed by the reduction below
const L: [i64; 32] = {
    let mut out = [0i64; 32];
    let mut i = 0;
    while i < 32 {
        out[i] = CURVE_ORDER[i] as i64;
        i += 1;
    }
    out
};

/// Reduce a 512-bit little-endian value held one byte per limb
///
/// Limbs may be negative or exceed 255 on entry. The routine has no
/// data-dependent branches.
fn reduce_limbs(x: &mut [i64; 64]) -> [u8; 32] {
    // Fold the top 32 bytes down using 2^252 = -(L - 2^252) mod L
    for i in (32..64).rev() {
        let mut carry = 0i64;
        let mut j = i - 32;
        while j < i - 12 {
            x[j] += carry - 16 * x[i] * L[j - (i - 32)];
            carry = (x[j] + 128) >> 8;
            x[j] -= carry << 8;
            j += 1;
        }
        x[i - 12] += carry;
        x[i] = 0;
    }

    let mut carry = 0i64;
    for j in 0..32 {
        x[j] += carry - (x[31] >> 4) * L[j];
        carry = x[j] >> 8;
        x[j] &= 255;
    }
    for j in 0..32 {
        x[j] -= carry * L[j];
    }

    let mut out = [0u8; 32];
    for i in 0..32 {
        x[i + 1] += x[i] >> 8;
        out[i] = (x[i] & 255) as u8;
    }
    x.zeroize();
    out
}

/// Integer modulo L = 2^252 + 27742317777372353535851937790883648493
///
/// Always holds the canonical representative in `[0, L)`, little-endian.
#[derive(Clone, Copy, Zeroize)]
pub struct Scalar {
    pub(crate) bytes: [u8; SCALAR_LENGTH],
}

impl core::fmt::Debug for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Scalar([REDACTED])")
    }
}

impl Scalar {
    /// The scalar 0
    pub const fn zero() -> Self {
        Scalar { bytes: [0u8; 32] }
    }

    /// The scalar 1
    pub const fn one() -> Self {
        let mut bytes = [0u8; 32];
        bytes[0] = 1;
        Scalar { bytes }
    }

    /// Scalar from a small integer
    pub fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&value.to_le_bytes());
        Scalar { bytes }
    }

    /// Reduce a 64-byte little-endian value (a hash output) modulo L
    pub fn from_bytes_mod_order_wide(input: &[u8; 64]) -> Self {
        let mut x = [0i64; 64];
        for (limb, byte) in x.iter_mut().zip(input.iter()) {
            *limb = *byte as i64;
        }
        Scalar {
            bytes: reduce_limbs(&mut x),
        }
    }

    /// Reduce a 32-byte little-endian value modulo L
    pub fn from_bytes_mod_order(input: &[u8; 32]) -> Self {
        let mut wide = [0u8; 64];
        wide[..32].copy_from_slice(input);
        let s = Scalar::from_bytes_mod_order_wide(&wide);
        wide.zeroize();
        s
    }

    /// Decode a scalar that must already be reduced
    ///
    /// Returns none for values `>= L`; the comparison runs in constant time.
    pub fn from_canonical_bytes(bytes: [u8; 32]) -> CtOption<Self> {
        let is_canonical = ct_lt_le(&bytes, &CURVE_ORDER);
        CtOption::new(Scalar { bytes }, is_canonical)
    }

    /// Canonical little-endian encoding
    pub fn to_bytes(&self) -> [u8; 32] {
        self.bytes
    }

    /// Borrow the canonical little-endian encoding
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// `a · b + c mod L`
    pub fn mul_add(a: &Scalar, b: &Scalar, c: &Scalar) -> Scalar {
        let mut x = [0i64; 64];
        for (i, limb) in x.iter_mut().take(32).enumerate() {
            *limb = c.bytes[i] as i64;
        }
        for i in 0..32 {
            for j in 0..32 {
                x[i + j] += (a.bytes[i] as i64) * (b.bytes[j] as i64);
            }
        }
        Scalar {
            bytes: reduce_limbs(&mut x),
        }
    }

    /// `self + rhs mod L`
    pub fn add(&self, rhs: &Scalar) -> Scalar {
        let mut x = [0i64; 64];
        for (i, limb) in x.iter_mut().take(32).enumerate() {
            *limb = self.bytes[i] as i64 + rhs.bytes[i] as i64;
        }
        Scalar {
            bytes: reduce_limbs(&mut x),
        }
    }

    /// `self · rhs mod L`
    pub fn mul(&self, rhs: &Scalar) -> Scalar {
        Scalar::mul_add(self, rhs, &Scalar::zero())
    }

    /// Constant-time zero test
    pub fn is_zero(&self) -> Choice {
        self.bytes[..].ct_eq(&[0u8; 32][..])
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Scalar) -> Choice {
        self.bytes[..].ct_eq(&other.bytes[..])
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Scalar) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Scalar, b: &Scalar, choice: Choice) -> Scalar {
        let mut bytes = [0u8; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::conditional_select(&a.bytes[i], &b.bytes[i], choice);
        }
        Scalar { bytes }
    }
}

/// The secret scalar produced by key expansion, with the clamping bits applied
///
/// Clamping clears the three low bits (a multiple of the cofactor 8), clears
/// bit 255 and sets bit 254. It happens once, in [`ClampedScalar::clamp`];
/// nothing re-clamps and no arithmetic clamps.
#[derive(Clone, Zeroize)]
pub struct ClampedScalar([u8; 32]);

impl core::fmt::Debug for ClampedScalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("ClampedScalar([REDACTED])")
    }
}

impl ClampedScalar {
    /// Apply the clamping transform to the low half of an expanded key
    pub fn clamp(mut bytes: [u8; 32]) -> Self {
        bytes[0] &= 248;
        bytes[31] &= 127;
        bytes[31] |= 64;
        ClampedScalar(bytes)
    }

    /// The clamped integer as little-endian bytes, not reduced modulo L
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<&ClampedScalar> for Scalar {
    fn from(clamped: &ClampedScalar) -> Scalar {
        Scalar::from_bytes_mod_order(&clamped.0)
    }
}
