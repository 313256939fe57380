//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConstantTimeEq};

/// Constant-time equality check that returns a Choice (0 or 1)
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Constant-time "less than" on little-endian byte strings
///
/// Returns a set `Choice` when the integer encoded by `a` is strictly smaller
/// than the one encoded by `b`. The full width is always processed.
pub fn ct_lt_le<const N: usize>(a: &[u8; N], b: &[u8; N]) -> Choice {
    // a - b with borrow propagation; a final borrow means a < b
    let mut borrow: i32 = 0;
    for i in 0..N {
        let diff = a[i] as i32 - b[i] as i32 - borrow;
        borrow = (diff >> 8) & 1;
    }
    Choice::from(borrow as u8)
}

/// Constant-time check that every byte is zero
pub fn ct_is_zero(bytes: &[u8]) -> Choice {
    let mut acc = 0u8;
    for &b in bytes {
        acc |= b;
    }
    acc.ct_eq(&0)
}
