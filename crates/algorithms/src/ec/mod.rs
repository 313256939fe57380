//! Elliptic Curve Primitives
//!
//! Constant-time arithmetic on the twisted Edwards form of Curve25519,
//! the foundation for the Ed25519 and Ed25519ph signature schemes.

pub mod ed25519;

pub use ed25519::{
    ClampedScalar as Ed25519ClampedScalar, CompressedY as Ed25519CompressedY,
    EdwardsPoint as Ed25519Point, Scalar as Ed25519Scalar,
};
