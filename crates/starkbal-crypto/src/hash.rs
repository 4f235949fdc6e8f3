//! Starknet hashing

use sha3::{Digest, Keccak256};
use starknet_types_core::felt::Felt;

use crate::CryptoError;

pub use starknet_crypto::pedersen_hash;

/// Longest string that fits into a single felt
const SHORT_STRING_MAX_LEN: usize = 31;

/// Keccak-256 of the input, truncated to the low 250 bits
pub fn starknet_keccak(data: &[u8]) -> Felt {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let mut bytes: [u8; 32] = hasher.finalize().into();
    bytes[0] &= 0x03;
    Felt::from_bytes_be(&bytes)
}

/// Compute the entry point selector for a function name
pub fn selector_from_name(name: &str) -> Felt {
    match name {
        "__default__" | "__l1_default__" => Felt::ZERO,
        _ => starknet_keccak(name.as_bytes()),
    }
}

/// Pedersen hash chain over `elements`, finalized with the element count
pub fn compute_hash_on_elements(elements: &[Felt]) -> Felt {
    let acc = elements
        .iter()
        .fold(Felt::ZERO, |acc, element| pedersen_hash(&acc, element));
    pedersen_hash(&acc, &Felt::from(elements.len() as u64))
}

/// Encode an ASCII string of at most 31 bytes as a felt
pub fn encode_short_string(s: &str) -> Result<Felt, CryptoError> {
    if !s.is_ascii() {
        return Err(CryptoError::InvalidShortString(format!(
            "non-ASCII characters in {:?}",
            s
        )));
    }
    if s.len() > SHORT_STRING_MAX_LEN {
        return Err(CryptoError::InvalidShortString(format!(
            "{} bytes exceeds the {} byte limit",
            s.len(),
            SHORT_STRING_MAX_LEN
        )));
    }

    let mut buf = [0u8; 32];
    buf[32 - s.len()..].copy_from_slice(s.as_bytes());
    Ok(Felt::from_bytes_be(&buf))
}
