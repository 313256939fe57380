//! Constant values for edsig cryptographic operations
//!
//! Buffer sizes shared by every layer of the engine, together with the
//! Curve25519 field, group and curve parameters in little-endian byte form.

#![no_std]

pub mod traditional;
pub mod utils;
