//! Internal utilities shared by the edsig crates
//!
//! Nothing in here is part of the stable public API. The helpers exist so the
//! field, scalar and signature layers agree on one constant-time vocabulary
//! and one way of loading little-endian words.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;
pub mod endian;
