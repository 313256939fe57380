//! Traditional signature schemes
//!
//! This module contains the EdDSA family over edwards25519.

pub mod eddsa;

// Re-export EdDSA types
pub use eddsa::{Ed25519, Ed25519PublicKey, Ed25519Signature, Eddsa};
