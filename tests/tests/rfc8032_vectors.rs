//! Known-answer tests for Ed25519 and Ed25519ph

use edsig::prelude::*;
use edsig_tests::vectors::{ed25519_vectors, SignatureVector};

fn vectors() -> Vec<SignatureVector> {
    ed25519_vectors().expect("vector file should load")
}

#[test]
fn test_public_key_derivation() {
    for v in vectors() {
        let public_key = Ed25519::derive_public_key(&v.seed);
        assert_eq!(public_key.to_bytes(), v.public_key, "{}", v.name);
        assert_eq!(edsig::public_key(&v.seed), public_key, "{}", v.name);
    }
}

#[test]
fn test_pure_signatures() {
    for v in vectors().into_iter().filter(|v| v.prehash.is_none()) {
        let signature = Ed25519::sign(&v.seed, &v.message);
        assert_eq!(signature.to_bytes(), v.signature, "{}", v.name);

        let public_key = Ed25519PublicKey::from(v.public_key);
        assert_eq!(
            edsig::verify(&public_key, &v.message, &Ed25519Signature::from(v.signature)),
            Ok(()),
            "{}",
            v.name
        );
    }
}

#[test]
fn test_prehashed_signatures() {
    for v in vectors() {
        let Some(prehash) = &v.prehash else { continue };

        assert_eq!(edsig::prehash(&v.message), prehash.digest, "{}", v.name);

        let signature = Ed25519::sign_prehashed(&v.seed, &prehash.digest, &prehash.context)
            .expect("vector contexts fit");
        assert_eq!(signature.to_bytes(), v.signature, "{}", v.name);

        let public_key = Ed25519PublicKey::from(v.public_key);
        assert_eq!(
            Ed25519::verify_prehashed(&public_key, &prehash.digest, &signature, &prehash.context),
            Ok(()),
            "{}",
            v.name
        );

        // The same bytes are not a pure Ed25519 signature over the digest
        assert_eq!(
            Ed25519::verify(&public_key, &prehash.digest, &signature),
            Err(Error::SignatureInvalid),
            "{}",
            v.name
        );
    }
}

#[test]
fn test_vectors_reject_flipped_message() {
    for v in vectors().into_iter().filter(|v| v.prehash.is_none()) {
        let mut message = v.message.clone();
        message.push(0x00);
        let public_key = Ed25519PublicKey::from(v.public_key);
        let signature = Ed25519Signature::from(v.signature);
        assert_eq!(
            Ed25519::verify(&public_key, &message, &signature),
            Err(Error::SignatureInvalid),
            "{}",
            v.name
        );
    }
}

#[test]
fn test_prehashed_vectors_bind_context() {
    for v in vectors() {
        let Some(prehash) = &v.prehash else { continue };

        let mut other = prehash.context.clone();
        if other.is_empty() {
            other.push(b'x');
        } else {
            other[0] ^= 1;
        }

        let public_key = Ed25519PublicKey::from(v.public_key);
        let signature = Ed25519Signature::from(v.signature);
        assert_eq!(
            Ed25519::verify_prehashed(&public_key, &prehash.digest, &signature, &other),
            Err(Error::SignatureInvalid),
            "{}",
            v.name
        );
    }
}
