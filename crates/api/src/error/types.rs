//! Error type definitions for signature operations

/// Extensible error type for all edsig operations
///
/// The numeric codes are stable (`NoError = 0` through `ContextTooLong = 4`)
/// so the kinds survive a trip through a narrow boundary. The enum is
/// `#[non_exhaustive]` and carries a hidden reserved member: match the named
/// kinds you care about and always keep a wildcard arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Error {
    /// Never a failure; the success sentinel for status codes
    #[cfg_attr(feature = "std", error("no error"))]
    NoError,

    /// Bytes do not correspond to a canonical base field element
    #[cfg_attr(feature = "std", error("bytes do not encode a canonical field element"))]
    NonCanonicalFieldElement,

    /// Public key bytes do not decode to a curve point
    #[cfg_attr(feature = "std", error("public key bytes invalid"))]
    PublicKeyBytesInvalid,

    /// Signature verification failed
    #[cfg_attr(feature = "std", error("signature invalid"))]
    SignatureInvalid,

    /// Context for prehashed signatures too long
    #[cfg_attr(feature = "std", error("context for prehashed signatures too long"))]
    ContextTooLong,

    /// Reserved for kinds this version does not know about
    #[doc(hidden)]
    #[cfg_attr(feature = "std", error("unrecognized error code"))]
    Unrecognized,
}

/// Result type for signature operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Stable numeric code of this kind
    pub const fn code(self) -> u8 {
        match self {
            Error::NoError => 0,
            Error::NonCanonicalFieldElement => 1,
            Error::PublicKeyBytesInvalid => 2,
            Error::SignatureInvalid => 3,
            Error::ContextTooLong => 4,
            Error::Unrecognized => 0xff,
        }
    }

    /// Decode a numeric code; unknown codes land on the reserved kind
    pub const fn from_code(code: u8) -> Self {
        match code {
            0 => Error::NoError,
            1 => Error::NonCanonicalFieldElement,
            2 => Error::PublicKeyBytesInvalid,
            3 => Error::SignatureInvalid,
            4 => Error::ContextTooLong,
            _ => Error::Unrecognized,
        }
    }

    /// Collapse a unit result into a status kind (`Ok` becomes `NoError`)
    pub fn from_result(result: Result<()>) -> Self {
        match result {
            Ok(()) => Error::NoError,
            Err(e) => e,
        }
    }

    /// Turn a status kind back into a result (`NoError` becomes `Ok`)
    pub fn into_result(self) -> Result<()> {
        match self {
            Error::NoError => Ok(()),
            e => Err(e),
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Error::NoError => "no error",
            Error::NonCanonicalFieldElement => "bytes do not encode a canonical field element",
            Error::PublicKeyBytesInvalid => "public key bytes invalid",
            Error::SignatureInvalid => "signature invalid",
            Error::ContextTooLong => "context for prehashed signatures too long",
            Error::Unrecognized => "unrecognized error code",
        };
        f.write_str(msg)
    }
}

/// Status code returned by prehashed signing on success
pub const SIGN_STATUS_SUCCESS: i8 = 0;

/// The single failure of prehashed signing
///
/// Prehashed signing reports through this narrow two-state status instead of
/// the general [`Error`]: a signature or "context too long", nothing else.
/// Prehashed verification, on the other hand, reports the same condition as
/// [`Error::ContextTooLong`]. Both shapes are part of the public surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[cfg_attr(feature = "std", error("context for prehashed signatures too long"))]
pub struct ContextTooLong;

impl ContextTooLong {
    /// Status code carried by this failure
    pub const STATUS: i8 = -1;
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for ContextTooLong {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("context for prehashed signatures too long")
    }
}

impl From<ContextTooLong> for Error {
    fn from(_: ContextTooLong) -> Self {
        Error::ContextTooLong
    }
}

/// 8-bit status of a prehashed signing result
///
/// `0` on success, [`ContextTooLong::STATUS`] otherwise.
pub fn sign_status<T>(result: &core::result::Result<T, ContextTooLong>) -> i8 {
    match result {
        Ok(_) => SIGN_STATUS_SUCCESS,
        Err(_) => ContextTooLong::STATUS,
    }
}
