//! SDK types

use serde::Serialize;
use serde_json::{json, Value};
use starkbal_crypto::Felt;
use std::str::FromStr;

use crate::felt::{felt_from_hex, felt_to_hex};
use crate::SdkError;

/// Block identifier for RPC queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockId {
    /// Latest accepted block
    #[default]
    Latest,
    /// Pending block (includes pending transactions)
    Pending,
    /// Block number
    Number(u64),
    /// Block hash
    Hash(Felt),
}

impl Serialize for BlockId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            BlockId::Latest => serializer.serialize_str("latest"),
            BlockId::Pending => serializer.serialize_str("pending"),
            BlockId::Number(n) => json!({ "block_number": n }).serialize(serializer),
            BlockId::Hash(h) => json!({ "block_hash": felt_to_hex(h) }).serialize(serializer),
        }
    }
}

impl FromStr for BlockId {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latest" => Ok(BlockId::Latest),
            "pending" => Ok(BlockId::Pending),
            _ if s.starts_with("0x") => Ok(BlockId::Hash(felt_from_hex(s)?)),
            _ => s
                .parse::<u64>()
                .map(BlockId::Number)
                .map_err(|_| SdkError::InvalidBlockId(s.to_string())),
        }
    }
}

/// A call to a contract entry point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    /// Contract address
    pub to: Felt,
    /// Entry point selector
    pub selector: Felt,
    /// Serialized arguments
    pub calldata: Vec<Felt>,
}

impl Call {
    /// Request body for `starknet_call`
    pub fn to_rpc_json(&self) -> Value {
        json!({
            "contract_address": felt_to_hex(&self.to),
            "entry_point_selector": felt_to_hex(&self.selector),
            "calldata": felts_to_hex(&self.calldata),
        })
    }
}

/// Result of a submitted invoke transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvokeResult {
    /// Transaction hash
    pub transaction_hash: Felt,
}

pub(crate) fn felts_to_hex(values: &[Felt]) -> Vec<String> {
    values.iter().map(felt_to_hex).collect()
}
