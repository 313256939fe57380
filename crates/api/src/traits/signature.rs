//! Digital signature traits for edsig
//!
//! Schemes are stateless: every operation receives the secret seed it needs
//! and keeps nothing once it returns, so there is no key object to cache an
//! expansion in and nothing to invalidate.

use crate::error::{ContextTooLong, VerifyResult};

/// Core trait for seed-based deterministic signature algorithms
pub trait Signature {
    /// Secret seed, supplied by the caller on every signing call
    type Seed: ?Sized;

    /// Serialized public key
    type PublicKey: Clone;

    /// Serialized signature
    type SignatureData: Clone;

    /// Returns the name of this signature algorithm
    fn name() -> &'static str;

    /// Derive the public key belonging to `seed`
    ///
    /// Never fails; every seed has exactly one public key.
    fn derive_public_key(seed: &Self::Seed) -> Self::PublicKey;

    /// Sign `message`
    ///
    /// Deterministic: the same seed and message give the same bytes.
    fn sign(seed: &Self::Seed, message: &[u8]) -> Self::SignatureData;

    /// Verify `signature` over `message` against `public_key`
    fn verify(
        public_key: &Self::PublicKey,
        message: &[u8],
        signature: &Self::SignatureData,
    ) -> VerifyResult;
}

/// Signature algorithms with a prehashed, context-separated variant
pub trait PrehashedSignature: Signature {
    /// Digest of the message as produced by the scheme's prehash function
    type Prehashed: ?Sized;

    /// Sign a prehashed message under `context`
    ///
    /// Fails only when `context` is too long, and reports that through the
    /// narrow [`ContextTooLong`] status rather than the general error.
    fn sign_prehashed(
        seed: &Self::Seed,
        prehashed: &Self::Prehashed,
        context: &[u8],
    ) -> Result<Self::SignatureData, ContextTooLong>;

    /// Verify a prehashed signature under `context`
    fn verify_prehashed(
        public_key: &Self::PublicKey,
        prehashed: &Self::Prehashed,
        signature: &Self::SignatureData,
        context: &[u8],
    ) -> VerifyResult;
}
