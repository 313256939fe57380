//! EdDSA (Edwards-curve Digital Signature Algorithm) implementations
//!
//! This module provides Ed25519 and its prehashed variant Ed25519ph as
//! specified in RFC 8032.
//!
//! # Features
//!
//! - Stateless: the 32-byte seed is supplied on every call
//! - Deterministic signature generation, no randomness source
//! - Constant-time with respect to the seed and derived secrets
//! - Cofactorless verification that rejects non-canonical S and R
//!
//! # Example
//!
//! ```
//! use edsig_api::{PrehashedSignature, Signature};
//! use edsig_sign::traditional::eddsa::Ed25519;
//!
//! # fn main() -> edsig_api::Result<()> {
//! let seed = [7u8; 32];
//! let public_key = Ed25519::derive_public_key(&seed);
//!
//! let message = b"Hello, Ed25519!";
//! let signature = Ed25519::sign(&seed, message);
//! Ed25519::verify(&public_key, message, &signature)?;
//!
//! let digest = Ed25519::prehash(message);
//! let signature = Ed25519::sign_prehashed(&seed, &digest, b"ctx")?;
//! Ed25519::verify_prehashed(&public_key, &digest, &signature, b"ctx")?;
//! # Ok(())
//! # }
//! ```

mod ed25519;
mod keys;

pub use ed25519::{Ed25519, Eddsa};
pub use keys::{Ed25519PublicKey, Ed25519Signature};
