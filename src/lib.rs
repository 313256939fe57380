//! # edsig
//!
//! A stateless Ed25519 / Ed25519ph signature engine for size- and
//! timing-sensitive targets.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! edsig = "0.3"
//! ```
//!
//! ```
//! let seed = [0x24u8; 32];
//! let public_key = edsig::public_key(&seed);
//! let signature = edsig::sign(&seed, b"attestation");
//! assert!(edsig::verify(&public_key, b"attestation", &signature).is_ok());
//!
//! let digest = edsig::prehash(b"firmware image");
//! let signature = edsig::sign_prehashed(&seed, &digest, b"bootloader").unwrap();
//! assert!(edsig::verify_prehashed(&public_key, &digest, &signature, b"bootloader").is_ok());
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` for the error types
//! - `serde`: serialization of errors, public keys and signatures
//! - `trace`: `tracing` events on rejected inputs (never on secrets)
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`edsig-api`]: Error taxonomy and signature traits
//! - [`edsig-internal`]: Constant-time helpers
//! - [`edsig-params`]: Sizes and curve constants
//! - [`edsig-algorithms`]: Field, scalar and point arithmetic, hash collaborator
//! - [`edsig-sign`]: The Ed25519 engine

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use edsig_algorithms as algorithms;
pub use edsig_api as api;
pub use edsig_internal as internal;
pub use edsig_params as params;
pub use edsig_sign as sign;

pub use edsig_api::{ContextTooLong, Error, Result};
pub use edsig_sign::{Ed25519, Ed25519PublicKey, Ed25519Signature};

use edsig_api::{PrehashedSignature, Signature};
use edsig_params::traditional::ed25519::{PREHASHED_LENGTH, SECRETKEY_SEED_LENGTH};

/// Derive the public key for `seed`
pub fn public_key(seed: &[u8; SECRETKEY_SEED_LENGTH]) -> Ed25519PublicKey {
    Ed25519::derive_public_key(seed)
}

/// Sign `message` with the key derived from `seed`
pub fn sign(seed: &[u8; SECRETKEY_SEED_LENGTH], message: &[u8]) -> Ed25519Signature {
    Ed25519::sign(seed, message)
}

/// Ed25519ph: sign a 64-byte digest under `context` (at most 255 bytes)
pub fn sign_prehashed(
    seed: &[u8; SECRETKEY_SEED_LENGTH],
    prehashed: &[u8; PREHASHED_LENGTH],
    context: &[u8],
) -> core::result::Result<Ed25519Signature, ContextTooLong> {
    Ed25519::sign_prehashed(seed, prehashed, context)
}

/// Verify an Ed25519 signature
pub fn verify(
    public_key: &Ed25519PublicKey,
    message: &[u8],
    signature: &Ed25519Signature,
) -> Result<()> {
    Ed25519::verify(public_key, message, signature)
}

/// Verify an Ed25519ph signature
pub fn verify_prehashed(
    public_key: &Ed25519PublicKey,
    prehashed: &[u8; PREHASHED_LENGTH],
    signature: &Ed25519Signature,
    context: &[u8],
) -> Result<()> {
    Ed25519::verify_prehashed(public_key, prehashed, signature, context)
}

/// The SHA-512 digest Ed25519ph expects as its message
pub fn prehash(message: &[u8]) -> [u8; PREHASHED_LENGTH] {
    Ed25519::prehash(message)
}

/// Common imports for edsig users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{sign_status, ContextTooLong, Error, Result};

    // Re-export core traits
    pub use crate::api::{PrehashedSignature, Signature};

    // Re-export the scheme and its types
    pub use crate::sign::{Ed25519, Ed25519PublicKey, Ed25519Signature};

    // Re-export memory safety utilities
    pub use zeroize::Zeroize;
}
