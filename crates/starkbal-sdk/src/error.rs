//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Debug, Error)]
pub enum SdkError {
    /// Transport/network error
    #[error("Transport error: {0}")]
    Transport(String),

    /// RPC error from node
    #[error("RPC error: {code} - {message}")]
    Rpc {
        /// Error code
        code: i64,
        /// Error message
        message: String,
    },

    /// Response did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Invalid felt string
    #[error("Invalid felt: {0}")]
    InvalidFelt(String),

    /// Unrecognized block identifier
    #[error("Invalid block id: {0}")]
    InvalidBlockId(String),

    /// Malformed ABI document
    #[error("Invalid ABI: {0}")]
    InvalidAbi(String),

    /// Function not present in the ABI
    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    /// ABI type this SDK cannot encode
    #[error("Unsupported ABI type: {0}")]
    UnsupportedType(String),

    /// ABI encoding error
    #[error("ABI encoding error: {0}")]
    AbiEncode(String),

    /// ABI decoding error
    #[error("ABI decoding error: {0}")]
    AbiDecode(String),

    /// View function invoked, or external function called
    #[error("Wrong function kind: {0}")]
    WrongFunctionKind(String),

    /// Requested output not returned by the function
    #[error("Missing output: {0}")]
    MissingOutput(String),

    /// Missing required field
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Account calldata layout other than Cairo 0 or 1
    #[error("Invalid Cairo version: {0} (expected 0 or 1)")]
    InvalidCairoVersion(u8),

    /// Account has no signing key
    #[error("No signer configured for account")]
    NoSigner,

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Hashing or signing failure
    #[error("Crypto error: {0}")]
    Crypto(#[from] starkbal_crypto::CryptoError),
}

impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        SdkError::Serialization(e.to_string())
    }
}

impl From<hex::FromHexError> for SdkError {
    fn from(e: hex::FromHexError) -> Self {
        SdkError::InvalidFelt(e.to_string())
    }
}
