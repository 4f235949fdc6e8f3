//! Cryptographic errors

use thiserror::Error;

/// Cryptographic operation error
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Signing failed
    #[error("signing failed: {0}")]
    SigningFailed(String),

    /// Verification could not be performed
    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    /// Invalid private key
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// String cannot be encoded as a Cairo short string
    #[error("invalid short string: {0}")]
    InvalidShortString(String),
}
