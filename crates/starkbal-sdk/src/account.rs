//! Account client: the signer side of contract interaction

use starkbal_crypto::Felt;

use crate::felt::felt_to_hex;
use crate::invoke::InvokeBuilder;
use crate::types::{BlockId, Call, InvokeResult};
use crate::{SdkError, StarknetClient, Wallet};

/// Calldata layout expected by the account's `__execute__`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CairoVersion {
    /// Legacy accounts: call array followed by flattened calldata
    Zero,
    /// `[len, (to, selector, calldata_len, calldata...)...]`
    #[default]
    One,
}

impl TryFrom<u8> for CairoVersion {
    type Error = SdkError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CairoVersion::Zero),
            1 => Ok(CairoVersion::One),
            other => Err(SdkError::InvalidCairoVersion(other)),
        }
    }
}

impl CairoVersion {
    /// Encode a multicall as `__execute__` calldata
    pub fn encode_calls(&self, calls: &[Call]) -> Vec<Felt> {
        let mut out = vec![Felt::from(calls.len() as u64)];
        match self {
            CairoVersion::One => {
                for call in calls {
                    out.push(call.to);
                    out.push(call.selector);
                    out.push(Felt::from(call.calldata.len() as u64));
                    out.extend_from_slice(&call.calldata);
                }
            }
            CairoVersion::Zero => {
                let mut offset = 0u64;
                for call in calls {
                    let len = call.calldata.len() as u64;
                    out.push(call.to);
                    out.push(call.selector);
                    out.push(Felt::from(offset));
                    out.push(Felt::from(len));
                    offset += len;
                }
                out.push(Felt::from(offset));
                for call in calls {
                    out.extend_from_slice(&call.calldata);
                }
            }
        }
        out
    }
}

/// Client bound to an account, able to sign and submit transactions
pub struct AccountClient {
    client: StarknetClient,
    wallet: Option<Wallet>,
    cairo_version: CairoVersion,
    block: BlockId,
}

impl AccountClient {
    /// Create an account client that can sign
    pub fn new(client: StarknetClient, wallet: Wallet) -> Self {
        Self {
            client,
            wallet: Some(wallet),
            cairo_version: CairoVersion::default(),
            block: BlockId::default(),
        }
    }

    /// Create an account client without a signer; only reads will work
    pub fn read_only(client: StarknetClient) -> Self {
        Self {
            client,
            wallet: None,
            cairo_version: CairoVersion::default(),
            block: BlockId::default(),
        }
    }

    /// Set the account calldata layout
    pub fn with_cairo_version(mut self, cairo_version: CairoVersion) -> Self {
        self.cairo_version = cairo_version;
        self
    }

    /// Set the block used for reads and nonce lookups
    pub fn with_block(mut self, block: BlockId) -> Self {
        self.block = block;
        self
    }

    /// Signing wallet, if any
    pub fn wallet(&self) -> Option<&Wallet> {
        self.wallet.as_ref()
    }

    /// Read-only call through the underlying client
    pub async fn call(&self, call: &Call) -> Result<Vec<Felt>, SdkError> {
        self.client.call(call, self.block).await
    }

    /// Sign and submit a multicall with the given fee ceiling
    pub async fn execute(&self, calls: &[Call], max_fee: u128) -> Result<InvokeResult, SdkError> {
        let wallet = self.wallet.as_ref().ok_or(SdkError::NoSigner)?;

        let calldata = self.cairo_version.encode_calls(calls);
        let nonce = self.client.get_nonce(wallet.address(), self.block).await?;
        let chain_id = self.client.chain_id().await?;

        let tx = InvokeBuilder::new(chain_id)
            .sender(*wallet.address())
            .calldata(calldata)
            .max_fee(max_fee)
            .nonce(nonce)
            .sign(wallet)?;

        let transaction_hash = self.client.add_invoke_transaction(&tx).await?;
        if transaction_hash != tx.hash {
            tracing::warn!(
                local = %felt_to_hex(&tx.hash),
                node = %felt_to_hex(&transaction_hash),
                "node reported a different transaction hash"
            );
        }
        tracing::info!(
            sender = %felt_to_hex(wallet.address()),
            nonce = %felt_to_hex(&nonce),
            max_fee = %max_fee,
            hash = %felt_to_hex(&transaction_hash),
            "invoke transaction submitted"
        );

        Ok(InvokeResult { transaction_hash })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::felt::felt_from_hex;
    use crate::MockTransport;
    use serde_json::json;

    const TEST_KEY: &str = "0x0139fe4d6f02e666e86a6f58e65060f115cd3c185bd9e98bd829636931458f79";

    fn call(to: u64, calldata: &[u64]) -> Call {
        Call {
            to: Felt::from(to),
            selector: Felt::from(0x5e1u64),
            calldata: calldata.iter().map(|&v| Felt::from(v)).collect(),
        }
    }

    fn felts(values: &[u64]) -> Vec<Felt> {
        values.iter().map(|&v| Felt::from(v)).collect()
    }

    #[test]
    fn test_encode_calls_cairo_one() {
        let encoded = CairoVersion::One.encode_calls(&[call(0xa, &[7]), call(0xb, &[8, 9])]);
        assert_eq!(
            encoded,
            felts(&[2, 0xa, 0x5e1, 1, 7, 0xb, 0x5e1, 2, 8, 9])
        );
    }

    #[test]
    fn test_encode_calls_cairo_zero() {
        let encoded = CairoVersion::Zero.encode_calls(&[call(0xa, &[7]), call(0xb, &[8, 9])]);
        assert_eq!(
            encoded,
            felts(&[2, 0xa, 0x5e1, 0, 1, 0xb, 0x5e1, 1, 2, 3, 7, 8, 9])
        );
    }

    #[test]
    fn test_cairo_version_from_u8() {
        assert_eq!(CairoVersion::try_from(0).unwrap(), CairoVersion::Zero);
        assert_eq!(CairoVersion::try_from(1).unwrap(), CairoVersion::One);
        assert!(CairoVersion::try_from(2).is_err());
    }

    #[tokio::test]
    async fn test_execute_without_signer() {
        let transport = MockTransport::new();
        let account = AccountClient::read_only(StarknetClient::with_transport(transport.clone()));

        let result = account.execute(&[call(1, &[])], 1).await;
        assert!(matches!(result, Err(SdkError::NoSigner)));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_execute_submits_signed_transaction() {
        let transport = MockTransport::new();
        transport.set_response("starknet_getNonce", json!("0x4"));
        let client = StarknetClient::with_transport(transport.clone());
        let wallet = Wallet::from_private_key_hex(Felt::from(0xacc0u64), TEST_KEY).unwrap();
        let public_key = wallet.public_key();
        let account = AccountClient::new(client, wallet).with_block(BlockId::Pending);

        let result = account.execute(&[call(0xa, &[5])], 12345).await.unwrap();
        assert_ne!(result.transaction_hash, Felt::ZERO);

        let nonce_requests = transport.requests_for("starknet_getNonce");
        assert_eq!(nonce_requests[0].params, vec![json!("pending"), json!("0xacc0")]);

        let submitted = transport.requests_for("starknet_addInvokeTransaction");
        assert_eq!(submitted.len(), 1);
        let body = &submitted[0].params[0];
        assert_eq!(body["nonce"], "0x4");
        assert_eq!(body["max_fee"], "0x3039");
        assert_eq!(body["calldata"], json!(["0x1", "0xa", "0x5e1", "0x1", "0x5"]));

        let expected_hash = InvokeBuilder::new(Felt::from(0x534e5f5345504f4c4941u128))
            .sender(Felt::from(0xacc0u64))
            .calldata(felts(&[1, 0xa, 0x5e1, 1, 5]))
            .max_fee(12345)
            .nonce(Felt::from(4u64))
            .transaction_hash()
            .unwrap();
        let signature = body["signature"].as_array().unwrap();
        let signature = starkbal_crypto::Signature {
            r: felt_from_hex(signature[0].as_str().unwrap()).unwrap(),
            s: felt_from_hex(signature[1].as_str().unwrap()).unwrap(),
        };
        assert!(starkbal_crypto::verify(&public_key, &expected_hash, &signature).unwrap());
    }
}
