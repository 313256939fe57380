//! Error handling for the signature engine

pub mod types;

// Re-export the primary error type and result
pub use types::{sign_status, ContextTooLong, Error, Result, SIGN_STATUS_SUCCESS};

/// Result type for verification
pub type VerifyResult = Result<()>;
