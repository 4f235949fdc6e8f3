//! # starkbal-sdk
//!
//! Rust SDK for calling and invoking Starknet contracts over JSON-RPC.
//!
//! ## Features
//!
//! - **StarknetClient**: RPC client for communicating with Starknet nodes
//! - **Wallet**: Account address and STARK-curve signing key
//! - **InvokeBuilder**: Fluent API for building and signing INVOKE v1 transactions
//! - **AccountClient**: Multicall encoding, nonce lookup and submission
//! - **Contract**: ABI-driven `call` and `invoke` on a deployed contract
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use starkbal_sdk::{abi::Abi, felt, AccountClient, Contract, StarknetClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let abi = Abi::from_json(r#"[{
//!         "type": "function", "name": "get_balance", "inputs": [],
//!         "outputs": [{"name": "balance", "type": "felt"}], "stateMutability": "view"
//!     }]"#)?;
//!
//!     let client = StarknetClient::http("http://127.0.0.1:5050/rpc");
//!     let account = AccountClient::read_only(client);
//!     let address = felt::felt_from_hex("0x1234")?;
//!     let contract = Contract::new(address, abi, account);
//!
//!     let result = contract.function("get_balance")?.call(&[]).await?;
//!     println!("Balance: {}", felt::format_felt(&result.felt("balance")?));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Invoking
//!
//! ```rust,no_run
//! use starkbal_sdk::{abi::{Abi, Token}, felt, AccountClient, Contract, StarknetClient, Wallet};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let abi = Abi::from_json(&std::fs::read_to_string("contracts/balance_abi.json")?)?;
//!     let wallet = Wallet::from_private_key_hex(felt::felt_from_hex("0xabc")?, "0x1")?;
//!
//!     let client = StarknetClient::http("http://127.0.0.1:5050/rpc");
//!     let account = AccountClient::new(client, wallet);
//!     let contract = Contract::new(felt::felt_from_hex("0x1234")?, abi, account);
//!
//!     let result = contract
//!         .function("increase_balance")?
//!         .invoke(&[Token::from(5i128)], 100_000_000_000_000)
//!         .await?;
//!     println!("Submitted {}", felt::felt_to_hex(&result.transaction_hash));
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod abi;
mod account;
mod client;
mod contract;
mod error;
pub mod felt;
mod invoke;
mod transport;
pub mod types;
mod wallet;

// Re-export main types
pub use account::{AccountClient, CairoVersion};
pub use client::StarknetClient;
pub use contract::{Contract, ContractFunction, FunctionResult};
pub use error::SdkError;
pub use invoke::{InvokeBuilder, SignedInvoke};
pub use transport::{MockHandler, MockTransport, RecordedRequest};

/// Re-export Transport trait for custom implementations
pub use transport::Transport;
pub use wallet::Wallet;

#[cfg(feature = "http")]
pub use transport::HttpTransport;

// Re-export crypto types for convenience
pub use starkbal_crypto::{Felt, Signature};
