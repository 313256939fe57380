//! Constants for traditional (pre-quantum) signature algorithms

pub mod ed25519;
