//! Endianness utility functions

/// Read a little-endian u64 from the first eight bytes of `bytes`
///
/// Panics if fewer than eight bytes are supplied; callers index fixed-size
/// arrays with constant offsets.
pub fn u64_from_le_bytes(bytes: &[u8]) -> u64 {
    u64::from_le_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}
