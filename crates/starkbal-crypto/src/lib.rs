//! # starkbal-crypto
//!
//! Cryptographic primitives for talking to Starknet.
//!
//! - Starknet keccak and entry point selectors
//! - Pedersen hash over element arrays
//! - Cairo short strings
//! - ECDSA signing/verification on the STARK curve

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod hash;
mod signature;

pub use error::CryptoError;
pub use hash::{
    compute_hash_on_elements, encode_short_string, pedersen_hash, selector_from_name,
    starknet_keccak,
};
pub use signature::{verify, Signature, SigningKey};

/// Starknet field element
pub use starknet_types_core::felt::Felt;
