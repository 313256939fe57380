//! Known-answer vectors for Ed25519 and Ed25519ph
//!
//! Vectors live as JSON next to this module. Each entry holds hex strings;
//! prehashed entries additionally carry the digest and context.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VectorError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("hex decode error in {field}: {source}")]
    Hex {
        field: &'static str,
        source: hex::FromHexError,
    },

    #[error("{field} has {actual} bytes, expected {expected}")]
    Length {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, VectorError>;

#[derive(Debug, Deserialize)]
struct VectorFile {
    algorithm: String,
    tests: Vec<RawVector>,
}

#[derive(Debug, Deserialize)]
struct RawVector {
    name: String,
    seed: String,
    public_key: String,
    message: String,
    signature: String,
    #[serde(default)]
    context: Option<String>,
    #[serde(default)]
    prehashed: Option<String>,
}

/// Ed25519ph inputs of a vector
#[derive(Debug, Clone)]
pub struct Prehash {
    pub digest: [u8; 64],
    pub context: Vec<u8>,
}

/// A decoded known-answer vector
#[derive(Debug, Clone)]
pub struct SignatureVector {
    pub name: String,
    pub seed: [u8; 32],
    pub public_key: [u8; 32],
    pub message: Vec<u8>,
    pub signature: [u8; 64],
    pub prehash: Option<Prehash>,
}

fn vectors_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("vectors")
}

fn decode(field: &'static str, value: &str) -> Result<Vec<u8>> {
    hex::decode(value).map_err(|source| VectorError::Hex { field, source })
}

fn decode_array<const N: usize>(field: &'static str, value: &str) -> Result<[u8; N]> {
    let bytes = decode(field, value)?;
    bytes.as_slice().try_into().map_err(|_| VectorError::Length {
        field,
        expected: N,
        actual: bytes.len(),
    })
}

impl RawVector {
    fn decode(self) -> Result<SignatureVector> {
        let prehash = match self.prehashed {
            Some(digest) => Some(Prehash {
                digest: decode_array("prehashed", &digest)?,
                context: decode("context", self.context.as_deref().unwrap_or(""))?,
            }),
            None => None,
        };

        Ok(SignatureVector {
            seed: decode_array("seed", &self.seed)?,
            public_key: decode_array("public_key", &self.public_key)?,
            message: decode("message", &self.message)?,
            signature: decode_array("signature", &self.signature)?,
            prehash,
            name: self.name,
        })
    }
}

/// Parse a vector file from its JSON text
pub fn parse_vectors(json: &str) -> Result<Vec<SignatureVector>> {
    let file: VectorFile = serde_json::from_str(json)?;
    debug_assert_eq!(file.algorithm, "Ed25519");
    file.tests.into_iter().map(RawVector::decode).collect()
}

/// All Ed25519 and Ed25519ph known-answer vectors
pub fn ed25519_vectors() -> Result<Vec<SignatureVector>> {
    let json = std::fs::read_to_string(vectors_dir().join("ed25519.json"))?;
    parse_vectors(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vectors_load() {
        let vectors = ed25519_vectors().unwrap();
        assert_eq!(vectors.len(), 8);
        assert_eq!(vectors.iter().filter(|v| v.prehash.is_some()).count(), 3);
        assert!(vectors[0].message.is_empty());
    }

    #[test]
    fn test_bad_lengths_are_reported() {
        let json = r#"{"algorithm":"Ed25519","tests":[{"name":"short","seed":"00",
            "public_key":"","message":"","signature":""}]}"#;
        match parse_vectors(json) {
            Err(VectorError::Length { field, expected, actual }) => {
                assert_eq!(field, "seed");
                assert_eq!(expected, 32);
                assert_eq!(actual, 1);
            }
            other => panic!("unexpected result: {:?}", other.map(|v| v.len())),
        }
    }
}
