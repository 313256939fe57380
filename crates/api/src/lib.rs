//! Public API traits and types for the edsig library
//!
//! This crate provides the public API surface shared by the edsig crates:
//! the error taxonomy, the narrow status used by prehashed signing, and the
//! stateless signature traits implemented by the engine.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{sign_status, ContextTooLong, Error, Result, SIGN_STATUS_SUCCESS};

// Re-export all traits from the traits module
pub use traits::{PrehashedSignature, Signature};

// Re-export trait modules for direct access
pub use traits::signature;
