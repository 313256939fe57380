//! Constant values shared with collaborating primitives

pub mod hash;
