//! Trait definitions for the edsig API

pub mod signature;

pub use signature::{PrehashedSignature, Signature};
