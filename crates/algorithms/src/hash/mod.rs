//! Hash collaborator interface
//!
//! The signature engine needs exactly one thing from a hash: turn an
//! arbitrary, possibly segmented, byte sequence into a 64-byte digest. The
//! [`HashFunction`] trait captures that contract; [`Sha512`] satisfies it by
//! delegating to the `sha2` crate.

mod sha512;

pub use sha512::Sha512;

use edsig_params::utils::hash::SHA512_OUTPUT_SIZE;

/// A 512-bit digest
pub type Digest512 = [u8; SHA512_OUTPUT_SIZE];

/// Incremental 512-bit hash function
///
/// Segments fed through [`update`](HashFunction::update) are hashed as if
/// they had been concatenated.
pub trait HashFunction: Sized {
    /// Human readable algorithm identifier
    const ALGORITHM_ID: &'static str;

    /// Start a fresh hash computation
    fn new() -> Self;

    /// Absorb one segment
    fn update(&mut self, data: &[u8]) -> &mut Self;

    /// Absorb one segment, builder style
    fn updated(mut self, data: &[u8]) -> Self {
        self.update(data);
        self
    }

    /// Finish and return the digest
    fn finalize(self) -> Digest512;

    /// One-shot digest of `data`
    fn digest(data: &[u8]) -> Digest512 {
        Self::new().updated(data).finalize()
    }
}
