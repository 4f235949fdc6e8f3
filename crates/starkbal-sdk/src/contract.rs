//! Contract handle: ABI-driven calls and invokes

use starkbal_crypto::{selector_from_name, Felt};

use crate::abi::{decode, encode, Abi, AbiFunction, StateMutability, Token};
use crate::types::{Call, InvokeResult};
use crate::{AccountClient, SdkError};

/// A deployed contract bound to an account client
pub struct Contract {
    address: Felt,
    abi: Abi,
    account: AccountClient,
}

impl Contract {
    /// Create a new contract handle
    pub fn new(address: Felt, abi: Abi, account: AccountClient) -> Self {
        Self {
            address,
            abi,
            account,
        }
    }

    /// Get the contract address
    pub fn address(&self) -> &Felt {
        &self.address
    }

    /// Get the account client
    pub fn account(&self) -> &AccountClient {
        &self.account
    }

    /// Look up a function by name
    pub fn function(&self, name: &str) -> Result<ContractFunction<'_>, SdkError> {
        let definition = self
            .abi
            .function(name)
            .ok_or_else(|| SdkError::UnknownFunction(name.to_string()))?;
        Ok(ContractFunction {
            contract: self,
            definition,
            selector: selector_from_name(name),
        })
    }
}

/// One function of a [`Contract`]
pub struct ContractFunction<'a> {
    contract: &'a Contract,
    definition: &'a AbiFunction,
    selector: Felt,
}

impl ContractFunction<'_> {
    /// Encode arguments into a call
    pub fn prepare(&self, args: &[Token]) -> Result<Call, SdkError> {
        Ok(Call {
            to: self.contract.address,
            selector: self.selector,
            calldata: encode(&self.definition.inputs, args)?,
        })
    }

    /// Read-only call, decoded against the function's outputs
    ///
    /// Only view functions can be called; external ones must be invoked.
    pub async fn call(&self, args: &[Token]) -> Result<FunctionResult, SdkError> {
        if self.definition.state_mutability != StateMutability::View {
            return Err(SdkError::WrongFunctionKind(format!(
                "{} is an external function, submit it with invoke",
                self.definition.name
            )));
        }
        let call = self.prepare(args)?;
        tracing::debug!(function = %self.definition.name, "calling contract");
        let data = self.contract.account.call(&call).await?;
        Ok(FunctionResult {
            values: decode(&self.definition.outputs, &data)?,
        })
    }

    /// Submit the function as a transaction with a fee ceiling
    pub async fn invoke(&self, args: &[Token], max_fee: u128) -> Result<InvokeResult, SdkError> {
        if self.definition.state_mutability == StateMutability::View {
            return Err(SdkError::WrongFunctionKind(format!(
                "{} is a view function and cannot be invoked",
                self.definition.name
            )));
        }
        let call = self.prepare(args)?;
        tracing::debug!(function = %self.definition.name, max_fee = %max_fee, "invoking contract");
        self.contract.account.execute(&[call], max_fee).await
    }
}

/// Decoded outputs of a call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionResult {
    values: Vec<(String, Token)>,
}

impl FunctionResult {
    /// Output by name
    ///
    /// Cairo 1 outputs are unnamed; a single unnamed output answers to any name.
    pub fn get(&self, name: &str) -> Option<&Token> {
        if let Some((_, token)) = self.values.iter().find(|(n, _)| n == name) {
            return Some(token);
        }
        match self.values.as_slice() {
            [(unnamed, token)] if unnamed.is_empty() => Some(token),
            _ => None,
        }
    }

    /// Single-felt output by name
    pub fn felt(&self, name: &str) -> Result<Felt, SdkError> {
        self.get(name)
            .and_then(Token::as_felt)
            .ok_or_else(|| SdkError::MissingOutput(name.to_string()))
    }

}
