//! Tests of the top-level `edsig` functions and prelude

use edsig::prelude::*;
use edsig::params::traditional::ed25519::{
    CURVE_ORDER, FIELD_PRIME, MAX_CONTEXT_LENGTH, PUBLICKEY_SERIALIZED_LENGTH, SIGNATURE_SERIALIZED_LENGTH,
};

const SEED: [u8; 32] = [0x42; 32];

#[test]
fn test_free_functions_roundtrip() {
    let public_key = edsig::public_key(&SEED);
    let signature = edsig::sign(&SEED, b"boot stage 2");

    assert_eq!(public_key.as_bytes().len(), PUBLICKEY_SERIALIZED_LENGTH);
    assert_eq!(signature.as_bytes().len(), SIGNATURE_SERIALIZED_LENGTH);
    assert!(edsig::verify(&public_key, b"boot stage 2", &signature).is_ok());
    assert_eq!(
        edsig::verify(&public_key, b"boot stage 3", &signature),
        Err(Error::SignatureInvalid)
    );
}

#[test]
fn test_prehashed_free_functions() {
    let public_key = edsig::public_key(&SEED);
    let digest = edsig::prehash(b"payload");

    let result = edsig::sign_prehashed(&SEED, &digest, b"ctx");
    assert_eq!(sign_status(&result), 0);
    let signature = result.unwrap();
    assert!(edsig::verify_prehashed(&public_key, &digest, &signature, b"ctx").is_ok());

    let long = vec![0u8; MAX_CONTEXT_LENGTH + 1];
    let result = edsig::sign_prehashed(&SEED, &digest, &long);
    assert_eq!(result, Err(ContextTooLong));
    assert_eq!(sign_status(&result), ContextTooLong::STATUS);
    assert_eq!(
        edsig::verify_prehashed(&public_key, &digest, &signature, &long),
        Err(Error::ContextTooLong)
    );
}

#[test]
fn test_error_codes_through_facade() {
    let public_key = Ed25519PublicKey::from(FIELD_PRIME);
    let signature = edsig::sign(&SEED, b"m");
    let err = edsig::verify(&public_key, b"m", &signature).unwrap_err();
    assert_eq!(err, Error::PublicKeyBytesInvalid);
    assert_eq!(err.code(), 2);
    assert_eq!(Error::from_code(err.code()), err);

    let ok = edsig::verify(&edsig::public_key(&SEED), b"m", &signature);
    assert_eq!(Error::from_result(ok), Error::NoError);
    assert_eq!(Error::NoError.code(), 0);
}

#[test]
fn test_s_equal_to_order_is_rejected() {
    let public_key = edsig::public_key(&SEED);
    let mut bytes = edsig::sign(&SEED, b"m").to_bytes();
    bytes[32..].copy_from_slice(&CURVE_ORDER);
    assert_eq!(
        edsig::verify(&public_key, b"m", &Ed25519Signature::from(bytes)),
        Err(Error::SignatureInvalid)
    );
}

#[test]
fn test_slice_parsing() {
    let public_key = edsig::public_key(&SEED);
    let signature = edsig::sign(&SEED, b"m");

    assert_eq!(Ed25519PublicKey::from_bytes(public_key.as_ref()), Ok(public_key));
    assert_eq!(Ed25519Signature::from_bytes(signature.as_ref()), Ok(signature));
    assert_eq!(
        Ed25519PublicKey::from_bytes(&[0u8; 31]),
        Err(Error::PublicKeyBytesInvalid)
    );
    assert_eq!(
        Ed25519Signature::from_bytes(&[0u8; 65]),
        Err(Error::SignatureInvalid)
    );
}

#[test]
fn test_generic_callers_agree_with_facade() {
    fn sign_with<S: Signature<Seed = [u8; 32]>>(seed: &[u8; 32], message: &[u8]) -> S::SignatureData {
        S::sign(seed, message)
    }

    assert_eq!(sign_with::<Ed25519>(&SEED, b"m"), edsig::sign(&SEED, b"m"));
    assert_eq!(<Ed25519 as Signature>::name(), "Ed25519");
}

#[test]
fn test_zeroize_seed_copy() {
    let mut seed = SEED;
    let _ = edsig::sign(&seed, b"m");
    seed.zeroize();
    assert_eq!(seed, [0u8; 32]);
}
