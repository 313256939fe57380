//! Edwards25519 Elliptic Curve Primitives
//!
//! This module implements arithmetic on the twisted Edwards curve
//! -x² + y² = 1 + d·x²·y² over the prime field F_p where:
//! - p = 2^255 - 19
//! - d = -121665/121666
//! - the prime subgroup order is L = 2^252 + 27742317777372353535851937790883648493
//! - the cofactor is 8
//!
//! All operations on secret data are constant-time. The implementation uses:
//! - five 51-bit limbs for field elements
//! - extended twisted Edwards coordinates (X:Y:Z:T) for point arithmetic
//! - double-and-always-add scalar multiplication with conditional selection

mod field;
mod point;
mod scalar;

pub use field::FieldElement;
pub use point::{CompressedY, EdwardsPoint};
pub use scalar::{ClampedScalar, Scalar};

/// `scalar · B` for a clamped secret scalar, compressed
///
/// This is the public key computation; it never fails.
pub fn clamped_base_mul(scalar: &ClampedScalar) -> CompressedY {
    EdwardsPoint::base_point().mul_clamped(scalar).compress()
}
