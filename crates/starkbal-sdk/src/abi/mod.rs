//! ABI handling for Cairo contracts
//!
//! This module provides functionality for:
//! - Parsing contract ABI documents (legacy and Cairo 1 formats)
//! - Encoding function arguments into calldata
//! - Decoding function return values
//!
//! # Example
//!
//! ```rust
//! use starkbal_sdk::abi::{decode, encode, Abi, Token};
//! use starkbal_sdk::Felt;
//!
//! let abi = Abi::from_json(r#"[{
//!     "type": "function", "name": "sum",
//!     "inputs": [{"name": "a", "type": "felt"}, {"name": "b", "type": "felt"}],
//!     "outputs": [{"name": "sum", "type": "felt"}],
//!     "stateMutability": "view"
//! }]"#).unwrap();
//!
//! let sum = abi.function("sum").unwrap();
//! let calldata = encode(&sum.inputs, &[Token::from(1i128), Token::from(2i128)]).unwrap();
//! assert_eq!(calldata, vec![Felt::from(1u64), Felt::from(2u64)]);
//!
//! let outputs = decode(&sum.outputs, &[Felt::from(3u64)]).unwrap();
//! assert_eq!(outputs[0].0, "sum");
//! ```

mod decode;
mod document;
mod encode;
mod types;

pub use decode::decode;
pub use document::{Abi, AbiFunction, AbiParam, StateMutability};
pub use encode::encode;
pub use types::{ParamType, Token};
