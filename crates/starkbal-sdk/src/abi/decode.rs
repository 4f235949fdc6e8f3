//! ABI decoding

use starkbal_crypto::Felt;

use super::document::AbiParam;
use super::types::{ParamType, Token};
use crate::SdkError;

/// Decode a call result into `(output name, value)` pairs
pub fn decode(outputs: &[AbiParam], data: &[Felt]) -> Result<Vec<(String, Token)>, SdkError> {
    let mut values = Vec::with_capacity(outputs.len());
    let mut rest = data;

    for param in outputs {
        let param_type = param.param_type()?;
        let size = param_type.size();
        if rest.len() < size {
            return Err(SdkError::AbiDecode(format!(
                "Output {:?} needs {} felts, {} left",
                param.name,
                size,
                rest.len()
            )));
        }

        let (head, tail) = rest.split_at(size);
        let token = match param_type {
            ParamType::Felt => Token::Felt(head[0]),
            ParamType::U256 => Token::U256 {
                low: head[0],
                high: head[1],
            },
        };
        values.push((param.name.clone(), token));
        rest = tail;
    }

    if !rest.is_empty() {
        return Err(SdkError::AbiDecode(format!(
            "{} unexpected trailing felts",
            rest.len()
        )));
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(name: &str, ty: &str) -> AbiParam {
        AbiParam {
            name: name.to_string(),
            type_name: ty.to_string(),
        }
    }

    #[test]
    fn test_decode_named_outputs() {
        let outputs = [param("balance", "felt"), param("supply", "Uint256")];
        let data = [Felt::from(5u64), Felt::from(9u64), Felt::ZERO];

        let values = decode(&outputs, &data).unwrap();
        assert_eq!(values[0], ("balance".to_string(), Token::Felt(Felt::from(5u64))));
        let supply = Token::U256 {
            low: Felt::from(9u64),
            high: Felt::ZERO,
        };
        assert_eq!(values[1], ("supply".to_string(), supply));
    }

    #[test]
    fn test_decode_underflow() {
        let outputs = [param("supply", "Uint256")];
        let result = decode(&outputs, &[Felt::ONE]);
        assert!(matches!(result, Err(SdkError::AbiDecode(_))));
    }

    #[test]
    fn test_decode_trailing_data() {
        let outputs = [param("balance", "felt")];
        let result = decode(&outputs, &[Felt::ONE, Felt::ONE]);
        assert!(matches!(result, Err(SdkError::AbiDecode(_))));
    }

    #[test]
    fn test_decode_no_outputs() {
        assert!(decode(&[], &[]).unwrap().is_empty());
    }
}
