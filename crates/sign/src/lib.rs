//! Digital Signature Schemes
//!
//! This crate implements the Ed25519 signature scheme and its prehashed,
//! context-separated variant Ed25519ph (RFC 8032). Both are stateless: the
//! secret seed is passed to every signing call and nothing outlives the call.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[macro_use]
mod trace;

pub mod traditional;

// Re-exports from traditional schemes
pub use traditional::eddsa::{Ed25519, Ed25519PublicKey, Ed25519Signature, Eddsa};
