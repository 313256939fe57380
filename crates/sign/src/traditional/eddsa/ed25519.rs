//! Ed25519 signature scheme implementation
//!
//! RFC 8032 Ed25519 and Ed25519ph over the curve arithmetic in
//! `edsig-algorithms`. Verification is cofactorless: it checks
//! `S·B - k·A == R` exactly, without clearing the cofactor.

use core::marker::PhantomData;

use edsig_algorithms::ec::ed25519::clamped_base_mul;
use edsig_algorithms::{CompressedY, EdwardsPoint, HashFunction, Scalar, Sha512};
use edsig_api::{
    ContextTooLong, Error, PrehashedSignature, Result, Signature as SignatureTrait,
};
use edsig_params::traditional::ed25519::{
    ED25519PH_DOMAIN_SEPARATOR, ED25519PH_FLAG, MAX_CONTEXT_LENGTH, PREHASHED_LENGTH,
    SECRETKEY_SEED_LENGTH,
};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use super::keys::{Ed25519PublicKey, Ed25519Signature, ExpandedSecretKey};

/// EdDSA over edwards25519, generic over the 512-bit hash
///
/// Use the [`Ed25519`] alias; the hash parameter exists so the engine does
/// not hard-wire one digest implementation.
pub struct Eddsa<H: HashFunction = Sha512>(PhantomData<H>);

/// Ed25519 signature scheme
pub type Ed25519 = Eddsa<Sha512>;

impl<H: HashFunction> Eddsa<H> {
    /// Digest a message for Ed25519ph
    pub fn prehash(message: &[u8]) -> [u8; PREHASHED_LENGTH] {
        H::digest(message)
    }

    /// Start a hash with the Ed25519ph `dom2` prefix when a context is given
    fn domain_hasher(context: Option<&[u8]>) -> H {
        let mut hasher = H::new();
        if let Some(context) = context {
            hasher
                .update(ED25519PH_DOMAIN_SEPARATOR)
                .update(&[ED25519PH_FLAG, context.len() as u8])
                .update(context);
        }
        hasher
    }

    /// k = H(dom || R || A || M) mod L
    pub(crate) fn challenge(
        context: Option<&[u8]>,
        r: &CompressedY,
        public_key: &[u8; 32],
        message: &[u8],
    ) -> Scalar {
        let digest = Self::domain_hasher(context)
            .updated(r.as_bytes())
            .updated(public_key)
            .updated(message)
            .finalize();
        Scalar::from_bytes_mod_order_wide(&digest)
    }

    /// Shared signing path; `context` is `Some` only for Ed25519ph and has
    /// already been length-checked
    fn sign_inner(
        seed: &[u8; SECRETKEY_SEED_LENGTH],
        message: &[u8],
        context: Option<&[u8]>,
    ) -> Ed25519Signature {
        let expanded = ExpandedSecretKey::from_seed::<H>(seed);
        let public_key = clamped_base_mul(&expanded.scalar);
        let mut a = Scalar::from(&expanded.scalar);

        // r = H(dom || prefix || M) mod L
        let mut r_digest = Self::domain_hasher(context)
            .updated(&expanded.nonce)
            .updated(message)
            .finalize();
        let mut r = Scalar::from_bytes_mod_order_wide(&r_digest);
        r_digest.zeroize();

        let big_r = EdwardsPoint::mul_base(&r).compress();
        let k = Self::challenge(context, &big_r, public_key.as_bytes(), message);

        // S = r + k·a mod L
        let s = Scalar::mul_add(&k, &a, &r);
        r.zeroize();
        a.zeroize();

        Ed25519Signature::from_parts(&big_r, &s.to_bytes())
    }

    /// Shared verification path
    fn verify_inner(
        public_key: &Ed25519PublicKey,
        message: &[u8],
        signature: &Ed25519Signature,
        context: Option<&[u8]>,
    ) -> Result<()> {
        let a = match public_key.compressed().decompress() {
            Ok(point) => point,
            Err(_) => {
                trace_event!("public key rejected");
                return Err(Error::PublicKeyBytesInvalid);
            }
        };

        // R, the canonical check on S and the group equation all run to
        // completion and are combined into one verdict
        let r_encoding = CompressedY(signature.r_bytes());
        let r_point = r_encoding.decompress_ct();
        let s = Scalar::from_canonical_bytes(signature.s_bytes());

        let k = Self::challenge(context, &r_encoding, public_key.as_bytes(), message);

        let s_value = s.unwrap_or(Scalar::zero());
        let r_value = r_point.unwrap_or(EdwardsPoint::identity());
        let check = EdwardsPoint::mul_base(&s_value).sub(&a.mul(&k));

        let valid = r_point.is_some() & s.is_some() & check.ct_eq(&r_value);
        if bool::from(valid) {
            Ok(())
        } else {
            trace_event!("signature rejected");
            Err(Error::SignatureInvalid)
        }
    }

    fn check_context(context: &[u8]) -> core::result::Result<(), ContextTooLong> {
        if context.len() > MAX_CONTEXT_LENGTH {
            trace_event!(
                context_len = context.len(),
                max = MAX_CONTEXT_LENGTH,
                "prehash context too long"
            );
            return Err(ContextTooLong);
        }
        Ok(())
    }
}

impl<H: HashFunction> SignatureTrait for Eddsa<H> {
    type Seed = [u8; SECRETKEY_SEED_LENGTH];
    type PublicKey = Ed25519PublicKey;
    type SignatureData = Ed25519Signature;

    fn name() -> &'static str {
        "Ed25519"
    }

    /// A = a·B for the clamped scalar a of the expanded seed
    fn derive_public_key(seed: &Self::Seed) -> Self::PublicKey {
        let expanded = ExpandedSecretKey::from_seed::<H>(seed);
        Ed25519PublicKey(clamped_base_mul(&expanded.scalar).to_bytes())
    }

    /// Sign a message using Ed25519
    ///
    /// The signing process follows RFC 8032:
    /// 1. r = H(prefix || message) mod L
    /// 2. R = r·B
    /// 3. k = H(R || A || message) mod L
    /// 4. S = (r + k·a) mod L
    /// 5. Return (R, S)
    fn sign(seed: &Self::Seed, message: &[u8]) -> Self::SignatureData {
        Self::sign_inner(seed, message, None)
    }

    /// Verify an Ed25519 signature
    ///
    /// Fails with [`Error::PublicKeyBytesInvalid`] when the key does not
    /// decode, and with [`Error::SignatureInvalid`] for everything else.
    fn verify(
        public_key: &Self::PublicKey,
        message: &[u8],
        signature: &Self::SignatureData,
    ) -> Result<()> {
        Self::verify_inner(public_key, message, signature, None)
    }
}

impl<H: HashFunction> PrehashedSignature for Eddsa<H> {
    type Prehashed = [u8; PREHASHED_LENGTH];

    fn sign_prehashed(
        seed: &Self::Seed,
        prehashed: &Self::Prehashed,
        context: &[u8],
    ) -> core::result::Result<Self::SignatureData, ContextTooLong> {
        Self::check_context(context)?;
        Ok(Self::sign_inner(seed, prehashed, Some(context)))
    }

    fn verify_prehashed(
        public_key: &Self::PublicKey,
        prehashed: &Self::Prehashed,
        signature: &Self::SignatureData,
        context: &[u8],
    ) -> Result<()> {
        Self::check_context(context)?;
        Self::verify_inner(public_key, prehashed, signature, Some(context))
    }
}
