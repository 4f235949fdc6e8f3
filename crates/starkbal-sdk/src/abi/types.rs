//! ABI type definitions

use starkbal_crypto::Felt;

use crate::felt::felt_from_i128;
use crate::SdkError;

/// Cairo types that serialize to one or two felts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    /// Any single-felt type: felt252, bool, integers up to 128 bits, addresses
    Felt,
    /// 256-bit unsigned integer as `(low, high)` 128-bit halves
    U256,
}

impl ParamType {
    /// Resolve an ABI type name
    pub fn parse(ty: &str) -> Result<Self, SdkError> {
        match ty {
            "felt"
            | "felt252"
            | "core::felt252"
            | "core::bool"
            | "core::starknet::contract_address::ContractAddress"
            | "core::starknet::class_hash::ClassHash" => Ok(ParamType::Felt),
            "Uint256" | "u256" | "core::integer::u256" => Ok(ParamType::U256),
            _ => {
                let short = ty.strip_prefix("core::integer::").unwrap_or(ty);
                if is_small_integer(short) {
                    Ok(ParamType::Felt)
                } else {
                    Err(SdkError::UnsupportedType(ty.to_string()))
                }
            }
        }
    }

    /// Number of felts in the serialized form
    pub fn size(&self) -> usize {
        match self {
            ParamType::Felt => 1,
            ParamType::U256 => 2,
        }
    }
}

fn is_small_integer(name: &str) -> bool {
    matches!(
        name,
        "u8" | "u16" | "u32" | "u64" | "u128" | "usize" | "i8" | "i16" | "i32" | "i64" | "i128"
    )
}

/// ABI value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Single felt
    Felt(Felt),
    /// 256-bit integer halves
    U256 {
        /// Low 128 bits
        low: Felt,
        /// High 128 bits
        high: Felt,
    },
}

impl Token {
    /// Get the type of this token
    pub fn type_of(&self) -> ParamType {
        match self {
            Token::Felt(_) => ParamType::Felt,
            Token::U256 { .. } => ParamType::U256,
        }
    }

    /// The felt, if this is a single-felt token
    pub fn as_felt(&self) -> Option<Felt> {
        match self {
            Token::Felt(value) => Some(*value),
            Token::U256 { .. } => None,
        }
    }
}

impl From<Felt> for Token {
    fn from(value: Felt) -> Self {
        Token::Felt(value)
    }
}

impl From<i128> for Token {
    fn from(value: i128) -> Self {
        Token::Felt(felt_from_i128(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_legacy_types() {
        assert_eq!(ParamType::parse("felt").unwrap(), ParamType::Felt);
        assert_eq!(ParamType::parse("Uint256").unwrap(), ParamType::U256);
    }

    #[test]
    fn test_parse_cairo1_types() {
        assert_eq!(ParamType::parse("core::felt252").unwrap(), ParamType::Felt);
        assert_eq!(ParamType::parse("core::integer::u64").unwrap(), ParamType::Felt);
        assert_eq!(ParamType::parse("core::integer::i128").unwrap(), ParamType::Felt);
        assert_eq!(ParamType::parse("core::integer::u256").unwrap(), ParamType::U256);
        assert_eq!(
            ParamType::parse("core::starknet::contract_address::ContractAddress").unwrap(),
            ParamType::Felt
        );
    }

    #[test]
    fn test_parse_unsupported() {
        assert!(matches!(
            ParamType::parse("core::array::Array::<core::felt252>"),
            Err(SdkError::UnsupportedType(_))
        ));
        assert!(ParamType::parse("felt*").is_err());
    }

    #[test]
    fn test_token_type_of() {
        assert_eq!(Token::from(1i128).type_of(), ParamType::Felt);
        assert_eq!(Token::U256 { low: Felt::ONE, high: Felt::ZERO }.type_of(), ParamType::U256);
        assert_eq!(ParamType::U256.size(), 2);
    }

    #[test]
    fn test_token_from_negative() {
        assert_eq!(Token::from(-1i128).as_felt(), Some(-Felt::ONE));
        assert_eq!(Token::U256 { low: Felt::ONE, high: Felt::ZERO }.as_felt(), None);
    }
}
