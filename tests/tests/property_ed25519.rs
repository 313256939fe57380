//! Property-based tests for Ed25519 and Ed25519ph

use edsig::prelude::{
    sign_status, ContextTooLong, Ed25519, Ed25519Signature, Error, PrehashedSignature, Signature,
};
use edsig::params::traditional::ed25519::MAX_CONTEXT_LENGTH;
use proptest::prelude::*;

fn message() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=512)
}

fn context() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=MAX_CONTEXT_LENGTH)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn sign_verify_roundtrip(seed in any::<[u8; 32]>(), msg in message()) {
        let public_key = Ed25519::derive_public_key(&seed);
        let signature = Ed25519::sign(&seed, &msg);
        prop_assert!(public_key.is_valid());
        prop_assert_eq!(Ed25519::verify(&public_key, &msg, &signature), Ok(()));
    }

    #[test]
    fn signing_is_deterministic(seed in any::<[u8; 32]>(), msg in message()) {
        prop_assert_eq!(Ed25519::sign(&seed, &msg), Ed25519::sign(&seed, &msg));
    }

    #[test]
    fn flipped_signature_bit_is_rejected(
        seed in any::<[u8; 32]>(),
        msg in message(),
        bit in 0usize..512,
    ) {
        let public_key = Ed25519::derive_public_key(&seed);
        let mut bytes = Ed25519::sign(&seed, &msg).to_bytes();
        bytes[bit / 8] ^= 1 << (bit % 8);
        prop_assert_eq!(
            Ed25519::verify(&public_key, &msg, &Ed25519Signature::from(bytes)),
            Err(Error::SignatureInvalid)
        );
    }

    #[test]
    fn flipped_message_bit_is_rejected(
        seed in any::<[u8; 32]>(),
        msg in prop::collection::vec(any::<u8>(), 1..=256),
        index in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let public_key = Ed25519::derive_public_key(&seed);
        let signature = Ed25519::sign(&seed, &msg);
        let mut tampered = msg.clone();
        tampered[index.index(msg.len())] ^= 1 << bit;
        prop_assert_eq!(
            Ed25519::verify(&public_key, &tampered, &signature),
            Err(Error::SignatureInvalid)
        );
    }

    #[test]
    fn prehashed_roundtrip(seed in any::<[u8; 32]>(), msg in message(), ctx in context()) {
        let public_key = Ed25519::derive_public_key(&seed);
        let digest = Ed25519::prehash(&msg);
        let signature = Ed25519::sign_prehashed(&seed, &digest, &ctx).unwrap();
        prop_assert_eq!(
            Ed25519::verify_prehashed(&public_key, &digest, &signature, &ctx),
            Ok(())
        );
    }

    #[test]
    fn oversized_context_is_refused(
        seed in any::<[u8; 32]>(),
        extra in 1usize..64,
    ) {
        let public_key = Ed25519::derive_public_key(&seed);
        let digest = Ed25519::prehash(b"");
        let ctx = vec![0xa5u8; MAX_CONTEXT_LENGTH + extra];
        let result = Ed25519::sign_prehashed(&seed, &digest, &ctx);
        prop_assert_eq!(sign_status(&result), ContextTooLong::STATUS);

        let signature = Ed25519::sign(&seed, &digest);
        prop_assert_eq!(
            Ed25519::verify_prehashed(&public_key, &digest, &signature, &ctx),
            Err(Error::ContextTooLong)
        );
    }

    #[test]
    fn signature_does_not_transfer_between_keys(
        seed_a in any::<[u8; 32]>(),
        seed_b in any::<[u8; 32]>(),
        msg in message(),
    ) {
        prop_assume!(seed_a != seed_b);
        let signature = Ed25519::sign(&seed_a, &msg);
        let other = Ed25519::derive_public_key(&seed_b);
        prop_assert_eq!(
            Ed25519::verify(&other, &msg, &signature),
            Err(Error::SignatureInvalid)
        );
    }
}
