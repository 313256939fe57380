//! SHA-512 adapter over the `sha2` crate

use super::{Digest512, HashFunction};
use sha2::Digest;

/// SHA-512 as specified in FIPS PUB 180-4
#[derive(Clone, Default)]
pub struct Sha512 {
    inner: sha2::Sha512,
}

impl HashFunction for Sha512 {
    const ALGORITHM_ID: &'static str = "SHA-512";

    fn new() -> Self {
        Sha512 {
            inner: <sha2::Sha512 as Digest>::new(),
        }
    }

    fn update(&mut self, data: &[u8]) -> &mut Self {
        Digest::update(&mut self.inner, data);
        self
    }

    fn finalize(self) -> Digest512 {
        let out = Digest::finalize(self.inner);
        let mut digest = [0u8; 64];
        digest.copy_from_slice(&out);
        digest
    }
}

impl core::fmt::Debug for Sha512 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sha512").finish_non_exhaustive()
    }
}
