//! Ed25519 key and signature types

use edsig_algorithms::{ClampedScalar, CompressedY, HashFunction};
use edsig_api::{Error, Result};
use edsig_params::traditional::ed25519::{
    PUBLICKEY_SERIALIZED_LENGTH, SECRETKEY_NONCE_LENGTH, SECRETKEY_SCALAR_LENGTH,
    SECRETKEY_SEED_LENGTH, SIGNATURE_SERIALIZED_LENGTH,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret key material derived from a seed for a single operation
///
/// `H(seed)` split in two: the low half clamped into the signing scalar, the
/// high half kept as the nonce seed. Wiped when dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct ExpandedSecretKey {
    pub(crate) scalar: ClampedScalar,
    pub(crate) nonce: [u8; SECRETKEY_NONCE_LENGTH],
}

impl ExpandedSecretKey {
    pub(crate) fn from_seed<H: HashFunction>(seed: &[u8; SECRETKEY_SEED_LENGTH]) -> Self {
        let mut hash = H::digest(seed);

        let mut lower = [0u8; SECRETKEY_SCALAR_LENGTH];
        let mut nonce = [0u8; SECRETKEY_NONCE_LENGTH];
        lower.copy_from_slice(&hash[..SECRETKEY_SCALAR_LENGTH]);
        nonce.copy_from_slice(&hash[SECRETKEY_SCALAR_LENGTH..]);
        hash.zeroize();

        let scalar = ClampedScalar::clamp(lower);
        lower.zeroize();

        ExpandedSecretKey { scalar, nonce }
    }
}

/// Ed25519 public key (32 bytes, a compressed curve point)
///
/// Holds bytes only. Whether they decode to a point is checked by
/// [`is_valid`](Self::is_valid) and, implicitly, by every verification.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ed25519PublicKey(pub [u8; PUBLICKEY_SERIALIZED_LENGTH]);

impl Ed25519PublicKey {
    /// Parse from a slice, which must be exactly 32 bytes long
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let array: [u8; PUBLICKEY_SERIALIZED_LENGTH] = bytes
            .try_into()
            .map_err(|_| Error::PublicKeyBytesInvalid)?;
        Ok(Ed25519PublicKey(array))
    }

    /// Copy out the encoding
    pub fn to_bytes(&self) -> [u8; PUBLICKEY_SERIALIZED_LENGTH] {
        self.0
    }

    /// Borrow the encoding
    pub fn as_bytes(&self) -> &[u8; PUBLICKEY_SERIALIZED_LENGTH] {
        &self.0
    }

    /// Whether the bytes decode to a curve point
    pub fn is_valid(&self) -> bool {
        self.compressed().decompress().is_ok()
    }

    pub(crate) fn compressed(&self) -> CompressedY {
        CompressedY(self.0)
    }
}

impl From<[u8; PUBLICKEY_SERIALIZED_LENGTH]> for Ed25519PublicKey {
    fn from(bytes: [u8; PUBLICKEY_SERIALIZED_LENGTH]) -> Self {
        Ed25519PublicKey(bytes)
    }
}

impl AsRef<[u8]> for Ed25519PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl core::fmt::Debug for Ed25519PublicKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ed25519PublicKey").finish_non_exhaustive()
    }
}

/// Ed25519 signature (64 bytes: R || S)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ed25519Signature(pub [u8; SIGNATURE_SERIALIZED_LENGTH]);

impl Ed25519Signature {
    /// Parse from a slice, which must be exactly 64 bytes long
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let array: [u8; SIGNATURE_SERIALIZED_LENGTH] =
            bytes.try_into().map_err(|_| Error::SignatureInvalid)?;
        Ok(Ed25519Signature(array))
    }

    /// Copy out the encoding
    pub fn to_bytes(&self) -> [u8; SIGNATURE_SERIALIZED_LENGTH] {
        self.0
    }

    /// Borrow the encoding
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_SERIALIZED_LENGTH] {
        &self.0
    }

    /// The compressed commitment point R
    pub fn r_bytes(&self) -> [u8; 32] {
        let mut r = [0u8; 32];
        r.copy_from_slice(&self.0[..32]);
        r
    }

    /// The response scalar S, little-endian
    pub fn s_bytes(&self) -> [u8; 32] {
        let mut s = [0u8; 32];
        s.copy_from_slice(&self.0[32..]);
        s
    }

    pub(crate) fn from_parts(r: &CompressedY, s: &[u8; 32]) -> Self {
        let mut bytes = [0u8; SIGNATURE_SERIALIZED_LENGTH];
        bytes[..32].copy_from_slice(r.as_bytes());
        bytes[32..].copy_from_slice(s);
        Ed25519Signature(bytes)
    }
}

impl From<[u8; SIGNATURE_SERIALIZED_LENGTH]> for Ed25519Signature {
    fn from(bytes: [u8; SIGNATURE_SERIALIZED_LENGTH]) -> Self {
        Ed25519Signature(bytes)
    }
}

impl AsRef<[u8]> for Ed25519Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl core::fmt::Debug for Ed25519Signature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ed25519Signature").finish_non_exhaustive()
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::{Ed25519PublicKey, Ed25519Signature};
    use core::fmt;
    use serde::de::{self, SeqAccess, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    struct ByteArrayVisitor<const N: usize>;

    impl<'de, const N: usize> Visitor<'de> for ByteArrayVisitor<N> {
        type Value = [u8; N];

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{} bytes", N)
        }

        fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
            v.try_into()
                .map_err(|_| E::invalid_length(v.len(), &self))
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut out = [0u8; N];
            for (i, byte) in out.iter_mut().enumerate() {
                *byte = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(i, &self))?;
            }
            if seq.next_element::<u8>()?.is_some() {
                return Err(de::Error::invalid_length(N + 1, &self));
            }
            Ok(out)
        }
    }

    impl Serialize for Ed25519PublicKey {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_bytes(&self.0)
        }
    }

    impl<'de> Deserialize<'de> for Ed25519PublicKey {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer
                .deserialize_bytes(ByteArrayVisitor::<32>)
                .map(Ed25519PublicKey)
        }
    }

    impl Serialize for Ed25519Signature {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_bytes(&self.0)
        }
    }

    impl<'de> Deserialize<'de> for Ed25519Signature {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer
                .deserialize_bytes(ByteArrayVisitor::<64>)
                .map(Ed25519Signature)
        }
    }
}
