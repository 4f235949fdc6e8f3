//! ABI encoding

use starkbal_crypto::Felt;

use super::document::AbiParam;
use super::types::{ParamType, Token};
use crate::SdkError;

/// Serialize arguments into calldata, checking them against the inputs
pub fn encode(inputs: &[AbiParam], args: &[Token]) -> Result<Vec<Felt>, SdkError> {
    if args.len() != inputs.len() {
        return Err(SdkError::AbiEncode(format!(
            "Expected {} arguments, got {}",
            inputs.len(),
            args.len()
        )));
    }

    let mut calldata = Vec::with_capacity(inputs.len());
    for (param, token) in inputs.iter().zip(args) {
        let param_type = param.param_type()?;
        match (param_type, token) {
            (ParamType::Felt, Token::Felt(value)) => calldata.push(*value),
            (ParamType::U256, Token::U256 { low, high }) => {
                calldata.push(*low);
                calldata.push(*high);
            }
            (expected, token) => {
                return Err(SdkError::AbiEncode(format!(
                    "Argument {:?} expects {:?}, got {:?}",
                    param.name,
                    expected,
                    token.type_of()
                )))
            }
        }
    }
    Ok(calldata)
}
