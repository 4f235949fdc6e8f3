//! Felt parsing and formatting
//!
//! Command arguments are plain integers; Starknet speaks field elements.
//! Negative integers map to `P - |n|`, and felts whose negation fits in
//! 128 bits read back as negative.

use starkbal_crypto::Felt;

use crate::SdkError;

/// Format a felt as minimal `0x`-prefixed lowercase hex
pub fn felt_to_hex(value: &Felt) -> String {
    let encoded = hex::encode(value.to_bytes_be());
    let trimmed = encoded.trim_start_matches('0');
    if trimmed.is_empty() {
        "0x0".to_string()
    } else {
        format!("0x{}", trimmed)
    }
}

/// Parse a `0x`-prefixed (or bare) hex string of at most 64 digits
pub fn felt_from_hex(s: &str) -> Result<Felt, SdkError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if digits.is_empty() || digits.len() > 64 {
        return Err(SdkError::InvalidFelt(format!(
            "{:?}: expected 1 to 64 hex digits",
            s
        )));
    }

    let bytes = hex::decode(format!("{:0>64}", digits))?;
    let mut buf = [0u8; 32];
    buf.copy_from_slice(&bytes);

    let value = Felt::from_bytes_be(&buf);
    if value.to_bytes_be() != buf {
        return Err(SdkError::InvalidFelt(format!(
            "{:?} is not below the field prime",
            s
        )));
    }
    Ok(value)
}

/// Map a signed integer into the field
pub fn felt_from_i128(value: i128) -> Felt {
    let magnitude = Felt::from(value.unsigned_abs());
    if value < 0 {
        -magnitude
    } else {
        magnitude
    }
}

/// The felt as an unsigned integer, if it fits in 128 bits
pub fn felt_to_u128(value: &Felt) -> Option<u128> {
    let bytes = value.to_bytes_be();
    if bytes[..16].iter().any(|&b| b != 0) {
        return None;
    }
    let mut low = [0u8; 16];
    low.copy_from_slice(&bytes[16..]);
    Some(u128::from_be_bytes(low))
}

/// Human-readable integer form: decimal when 128-bit signed or unsigned, hex otherwise
pub fn format_felt(value: &Felt) -> String {
    if let Some(positive) = felt_to_u128(value) {
        return positive.to_string();
    }
    match felt_to_u128(&-*value) {
        Some(magnitude) => format!("-{}", magnitude),
        None => felt_to_hex(value),
    }
}
