//! Constants for Ed25519 and Ed25519ph (RFC 8032)

use crate::utils::hash::SHA512_OUTPUT_SIZE;

/// Size of the secret seed in bytes
pub const SECRETKEY_SEED_LENGTH: usize = 32;

/// Size of the clamped scalar half of an expanded secret key
pub const SECRETKEY_SCALAR_LENGTH: usize = 32;

/// Size of the nonce-derivation half of an expanded secret key
pub const SECRETKEY_NONCE_LENGTH: usize = 32;

/// Size of a serialized public key (a compressed point)
pub const PUBLICKEY_SERIALIZED_LENGTH: usize = 32;

/// Size of a serialized signature (R || S)
pub const SIGNATURE_SERIALIZED_LENGTH: usize = 64;

/// Size of a compressed Edwards y-coordinate with sign bit
pub const COMPRESSED_Y_LENGTH: usize = 32;

/// Size of a serialized scalar
pub const SCALAR_LENGTH: usize = 32;

/// Size of a prehashed message digest accepted by Ed25519ph
pub const PREHASHED_LENGTH: usize = SHA512_OUTPUT_SIZE;

/// Longest context accepted by the prehashed variant
pub const MAX_CONTEXT_LENGTH: usize = 255;

/// Domain separator prefixed to every Ed25519ph hash input (`dom2`)
pub const ED25519PH_DOMAIN_SEPARATOR: &[u8; 32] = b"SigEd25519 no Ed25519 collisions";

/// Prehash flag byte following the domain separator
pub const ED25519PH_FLAG: u8 = 1;

/// Field prime p = 2^255 - 19, little-endian
pub const FIELD_PRIME: [u8; 32] = [
    0xed, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7f,
];

/// Group order L = 2^252 + 27742317777372353535851937790883648493, little-endian
pub const CURVE_ORDER: [u8; 32] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58,
    0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
];

/// Edwards curve constant d = -121665/121666 mod p
pub const EDWARDS_D: [u8; 32] = [
    0xa3, 0x78, 0x59, 0x13, 0xca, 0x4d, 0xeb, 0x75,
    0xab, 0xd8, 0x41, 0x41, 0x4d, 0x0a, 0x70, 0x00,
    0x98, 0xe8, 0x79, 0x77, 0x79, 0x40, 0xc7, 0x8c,
    0x73, 0xfe, 0x6f, 0x2b, 0xee, 0x6c, 0x03, 0x52,
];

/// 2·d mod p, used by the extended-coordinate addition formula
pub const EDWARDS_D2: [u8; 32] = [
    0x59, 0xf1, 0xb2, 0x26, 0x94, 0x9b, 0xd6, 0xeb,
    0x56, 0xb1, 0x83, 0x82, 0x9a, 0x14, 0xe0, 0x00,
    0x30, 0xd1, 0xf3, 0xee, 0xf2, 0x80, 0x8e, 0x19,
    0xe7, 0xfc, 0xdf, 0x56, 0xdc, 0xd9, 0x06, 0x24,
];

/// A square root of -1 mod p, namely 2^((p-1)/4)
pub const SQRT_M1: [u8; 32] = [
    0xb0, 0xa0, 0x0e, 0x4a, 0x27, 0x1b, 0xee, 0xc4,
    0x78, 0xe4, 0x2f, 0xad, 0x06, 0x18, 0x43, 0x2f,
    0xa7, 0xd7, 0xfb, 0x3d, 0x99, 0x00, 0x4d, 0x2b,
    0x0b, 0xdf, 0xc1, 0x4f, 0x80, 0x24, 0x83, 0x2b,
];

/// Compressed encoding of the base point B (y = 4/5, x even)
pub const BASEPOINT_COMPRESSED: [u8; 32] = [
    0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
];

/// Affine x-coordinate of the base point, little-endian
pub const BASE_X: [u8; 32] = [
    0x1a, 0xd5, 0x25, 0x8f, 0x60, 0x2d, 0x56, 0xc9,
    0xb2, 0xa7, 0x25, 0x95, 0x60, 0xc7, 0x2c, 0x69,
    0x5c, 0xdc, 0xd6, 0xfd, 0x31, 0xe2, 0xa4, 0xc0,
    0xfe, 0x53, 0x6e, 0xcd, 0xd3, 0x36, 0x69, 0x21,
];

/// Affine y-coordinate of the base point (4/5 mod p), little-endian
pub const BASE_Y: [u8; 32] = [
    0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
];
