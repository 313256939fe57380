//! Curve25519 primitives with constant-time implementation
//!
//! This crate provides the arithmetic underneath the edsig signature engine:
//! the prime field GF(2^255 - 19), scalars modulo the group order L, points
//! on the twisted Edwards curve, and the 512-bit hash collaborator used for
//! key expansion, nonce derivation and challenges.
//!
//! Everything that can see secret data is written without secret-dependent
//! branches or table lookups; selection happens through `subtle`.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Hash collaborator
pub mod hash;
pub use hash::{HashFunction, Sha512};

// Elliptic Curve primitives
pub mod ec;
pub use ec::ed25519::{ClampedScalar, CompressedY, EdwardsPoint, FieldElement, Scalar};
