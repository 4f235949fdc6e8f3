//! INVOKE v1 transaction builder

use serde_json::{json, Value};
use starkbal_crypto::{compute_hash_on_elements, encode_short_string, Felt, Signature};

use crate::felt::felt_to_hex;
use crate::types::felts_to_hex;
use crate::{SdkError, Wallet};

/// Fee-based (v1) invoke transactions
const INVOKE_VERSION: u64 = 1;

/// Transaction builder with fluent API
#[derive(Debug, Clone)]
pub struct InvokeBuilder {
    chain_id: Felt,
    sender_address: Option<Felt>,
    calldata: Vec<Felt>,
    max_fee: Option<u128>,
    nonce: Option<Felt>,
}

impl InvokeBuilder {
    /// Create a new transaction builder
    pub fn new(chain_id: Felt) -> Self {
        Self {
            chain_id,
            sender_address: None,
            calldata: Vec::new(),
            max_fee: None,
            nonce: None,
        }
    }

    /// Set the sending account (defaults to the signing wallet's address)
    pub fn sender(mut self, address: Felt) -> Self {
        self.sender_address = Some(address);
        self
    }

    /// Set the `__execute__` calldata
    pub fn calldata(mut self, calldata: Vec<Felt>) -> Self {
        self.calldata = calldata;
        self
    }

    /// Set the maximum fee the account will pay
    pub fn max_fee(mut self, max_fee: u128) -> Self {
        self.max_fee = Some(max_fee);
        self
    }

    /// Set the account nonce
    pub fn nonce(mut self, nonce: Felt) -> Self {
        self.nonce = Some(nonce);
        self
    }

    /// Compute the transaction hash
    pub fn transaction_hash(&self) -> Result<Felt, SdkError> {
        let sender = self
            .sender_address
            .ok_or_else(|| SdkError::MissingField("sender_address".to_string()))?;
        let max_fee = self
            .max_fee
            .ok_or_else(|| SdkError::MissingField("max_fee".to_string()))?;
        let nonce = self
            .nonce
            .ok_or_else(|| SdkError::MissingField("nonce".to_string()))?;

        Ok(compute_hash_on_elements(&[
            encode_short_string("invoke")?,
            Felt::from(INVOKE_VERSION),
            sender,
            Felt::ZERO, // entry point selector, always zero for v1
            compute_hash_on_elements(&self.calldata),
            Felt::from(max_fee),
            self.chain_id,
            nonce,
        ]))
    }

    /// Build and sign the transaction
    pub fn sign(self, wallet: &Wallet) -> Result<SignedInvoke, SdkError> {
        let sender = self.sender_address.unwrap_or(*wallet.address());
        let builder = self.sender(sender);
        let hash = builder.transaction_hash()?;
        let signature = wallet.sign_hash(&hash)?;

        Ok(SignedInvoke {
            sender_address: sender,
            calldata: builder.calldata,
            max_fee: builder.max_fee.unwrap_or_default(),
            nonce: builder.nonce.unwrap_or(Felt::ZERO),
            signature,
            hash,
        })
    }
}

/// Signed invoke transaction, ready for submission
#[derive(Debug, Clone)]
pub struct SignedInvoke {
    /// Sending account
    pub sender_address: Felt,
    /// `__execute__` calldata
    pub calldata: Vec<Felt>,
    /// Fee ceiling
    pub max_fee: u128,
    /// Account nonce
    pub nonce: Felt,
    /// Signature over `hash`
    pub signature: Signature,
    /// Transaction hash
    pub hash: Felt,
}

impl SignedInvoke {
    /// Request body for `starknet_addInvokeTransaction`
    pub fn to_rpc_json(&self) -> Value {
        json!({
            "type": "INVOKE",
            "version": felt_to_hex(&Felt::from(INVOKE_VERSION)),
            "sender_address": felt_to_hex(&self.sender_address),
            "calldata": felts_to_hex(&self.calldata),
            "max_fee": felt_to_hex(&Felt::from(self.max_fee)),
            "signature": felts_to_hex(&self.signature.to_vec()),
            "nonce": felt_to_hex(&self.nonce),
        })
    }
}
