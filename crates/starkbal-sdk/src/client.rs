//! StarknetClient - main RPC client

use serde::Deserialize;
use serde_json::Value;
use starkbal_crypto::Felt;
use tokio::sync::OnceCell;

use crate::felt::{felt_from_hex, felt_to_hex};
use crate::invoke::SignedInvoke;
use crate::transport::{deserialize_response, MockTransport, Transport};
use crate::types::{BlockId, Call};
use crate::SdkError;

#[cfg(feature = "http")]
use crate::transport::HttpTransport;

/// Starknet client for RPC communication
pub struct StarknetClient {
    transport: Box<dyn Transport>,
    chain_id: OnceCell<Felt>,
}

impl StarknetClient {
    /// Create a new client with HTTP transport
    ///
    /// No request is made until the first call.
    #[cfg(feature = "http")]
    pub fn http(url: &str) -> Self {
        Self::with_transport(HttpTransport::new(url))
    }

    /// Create a new client with mock transport (for testing)
    pub fn new_mock() -> Self {
        Self::with_transport(MockTransport::new())
    }

    /// Create a client with a custom transport
    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
            chain_id: OnceCell::new(),
        }
    }

    /// Use a fixed chain ID instead of asking the node
    pub fn with_chain_id(mut self, chain_id: Felt) -> Self {
        self.chain_id = OnceCell::new_with(Some(chain_id));
        self
    }

    /// Helper method to make RPC request and deserialize
    async fn request<T: serde::de::DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<T, SdkError> {
        tracing::debug!(method, "rpc request");
        let value = self.transport.request_json(method, params).await?;
        deserialize_response(value)
    }

    // ==================== Chain Info ====================

    /// Get the chain ID, fetched once per client
    pub async fn chain_id(&self) -> Result<Felt, SdkError> {
        self.chain_id
            .get_or_try_init(|| self.fetch_chain_id())
            .await
            .copied()
    }

    async fn fetch_chain_id(&self) -> Result<Felt, SdkError> {
        let result: String = self.request("starknet_chainId", vec![]).await?;
        felt_from_hex(&result)
    }

    // ==================== Account Queries ====================

    /// Get the nonce of a contract (account)
    pub async fn get_nonce(&self, address: &Felt, block: BlockId) -> Result<Felt, SdkError> {
        let result: String = self
            .request(
                "starknet_getNonce",
                vec![
                    serde_json::to_value(block)?,
                    Value::String(felt_to_hex(address)),
                ],
            )
            .await?;
        felt_from_hex(&result)
    }

    // ==================== Call ====================

    /// Execute a call (read-only, does not create transaction)
    pub async fn call(&self, call: &Call, block: BlockId) -> Result<Vec<Felt>, SdkError> {
        let result: Vec<String> = self
            .request(
                "starknet_call",
                vec![call.to_rpc_json(), serde_json::to_value(block)?],
            )
            .await?;
        result.iter().map(|s| felt_from_hex(s)).collect()
    }

    // ==================== Transaction Submission ====================

    /// Submit a signed invoke transaction, returning its hash
    pub async fn add_invoke_transaction(&self, tx: &SignedInvoke) -> Result<Felt, SdkError> {
        let result: AddInvokeResponse = self
            .request("starknet_addInvokeTransaction", vec![tx.to_rpc_json()])
            .await?;
        felt_from_hex(&result.transaction_hash)
    }
}

#[derive(Deserialize)]
struct AddInvokeResponse {
    transaction_hash: String,
}
