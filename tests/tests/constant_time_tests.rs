//! Statistical timing checks for secret-dependent operations
//!
//! Wall-clock timing is noisy on shared machines, so these run only on
//! request: `cargo test -p edsig-tests --release -- --ignored`.

use edsig::prelude::*;
use edsig_algorithms::{EdwardsPoint, Scalar};
use edsig_tests::constant_time::tester::describe;
use edsig_tests::constant_time::{TestConfig, TimingTester};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::hint::black_box;

fn run(config: &TestConfig, operation: &str, a: impl FnMut(), b: impl FnMut()) {
    let tester = TimingTester::from_config(config);
    let (times_a, times_b) = tester.measure_pair(config.num_warmup, a, b);
    let analysis = TimingTester::analyze(&times_a, &times_b, config)
        .expect("enough samples after outlier removal");
    println!("{}", describe(&analysis, operation));
    assert!(analysis.is_constant_time, "{:?}", analysis);
}

#[test]
#[ignore]
fn test_sign_independent_of_seed() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let mut random_seed = [0u8; 32];
    rng.fill_bytes(&mut random_seed);
    let sparse_seed = [0u8; 32];
    let message = [0x33u8; 64];

    run(
        &TestConfig::for_signing(),
        "Ed25519 sign (zero vs random seed)",
        || {
            black_box(Ed25519::sign(black_box(&sparse_seed), &message));
        },
        || {
            black_box(Ed25519::sign(black_box(&random_seed), &message));
        },
    );
}

#[test]
#[ignore]
fn test_scalar_mul_independent_of_scalar() {
    let low = Scalar::from_u64(1);
    let high = Scalar::from_bytes_mod_order(&[0xff; 32]);

    run(
        &TestConfig::for_scalar_mul(),
        "base point multiplication (1 vs dense scalar)",
        || {
            black_box(EdwardsPoint::mul_base(black_box(&low)));
        },
        || {
            black_box(EdwardsPoint::mul_base(black_box(&high)));
        },
    );
}

#[test]
#[ignore]
fn test_verify_failure_position_independent() {
    let seed = [0x11u8; 32];
    let message = b"timing";
    let public_key = Ed25519::derive_public_key(&seed);
    let signature = Ed25519::sign(&seed, message).to_bytes();

    let mut early = signature;
    early[0] ^= 1;
    let mut late = signature;
    late[63] ^= 0x01;
    let early = Ed25519Signature::from(early);
    let late = Ed25519Signature::from(late);

    run(
        &TestConfig::for_verification(),
        "Ed25519 verify (R vs S corrupted)",
        || {
            let _ = black_box(Ed25519::verify(&public_key, message, black_box(&early)));
        },
        || {
            let _ = black_box(Ed25519::verify(&public_key, message, black_box(&late)));
        },
    );
}
