//! CLI configuration management

use serde::Deserialize;
use starkbal_crypto::encode_short_string;
use starkbal_sdk::felt::felt_from_hex;
use starkbal_sdk::types::BlockId;
use starkbal_sdk::{CairoVersion, Felt};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::CliError;

/// CLI configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Directory holding `<contract_name>_abi.json`
    #[serde(default = "default_compiled_contracts_path")]
    pub compiled_contracts_path: PathBuf,
    /// Default fee ceiling for transactions
    #[serde(default = "default_max_fee")]
    pub max_fee: u64,
    /// Deployed balance contract
    #[serde(default = "default_contract_address")]
    pub contract_address: String,
    /// Contract name used to locate the ABI file
    #[serde(default = "default_contract_name")]
    pub contract_name: String,
    /// Network settings by environment name
    #[serde(default = "default_environments")]
    pub environments: BTreeMap<String, Environment>,
}

/// Settings for one network
#[derive(Debug, Clone, Deserialize)]
pub struct Environment {
    /// RPC endpoint URL
    pub rpc_url: String,
    /// Account contract address
    #[serde(default)]
    pub account_address: Option<String>,
    /// Account private key (hex)
    #[serde(default)]
    pub private_key: Option<String>,
    /// Chain ID as hex felt or short string; asked from the node when unset
    #[serde(default)]
    pub chain_id: Option<String>,
    /// Account calldata layout, 0 or 1
    #[serde(default = "default_cairo_version")]
    pub cairo_version: u8,
    /// Block tag for reads and nonces
    #[serde(default = "default_block")]
    pub block: String,
}

fn default_compiled_contracts_path() -> PathBuf {
    PathBuf::from("contracts")
}

fn default_max_fee() -> u64 {
    100_000_000_000_000 // 0.0001 ETH
}

fn default_contract_address() -> String {
    "0x795595609782473a2836b4bf554431c84593935fddd9d15b4ba552063d82f21".to_string()
}

fn default_contract_name() -> String {
    "balance".to_string()
}

/// First predeployed account of `starknet-devnet --seed 0`
const DEVNET_ACCOUNT_ADDRESS: &str =
    "0x64b48806902a367c8598f4f95c305e8c1a1acba5f082d294a43793113115691";
const DEVNET_PRIVATE_KEY: &str = "0x71d7bb07b9a64f6f78ac4c816aff4da9";

fn default_environments() -> BTreeMap<String, Environment> {
    let mut environments = BTreeMap::new();
    environments.insert(
        "local".to_string(),
        Environment {
            rpc_url: "http://127.0.0.1:5050/rpc".to_string(),
            account_address: Some(DEVNET_ACCOUNT_ADDRESS.to_string()),
            private_key: Some(DEVNET_PRIVATE_KEY.to_string()),
            chain_id: None,
            cairo_version: default_cairo_version(),
            block: default_block(),
        },
    );
    environments
}

fn default_cairo_version() -> u8 {
    1
}

fn default_block() -> String {
    "latest".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compiled_contracts_path: default_compiled_contracts_path(),
            max_fee: default_max_fee(),
            contract_address: default_contract_address(),
            contract_name: default_contract_name(),
            environments: default_environments(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".starkbal"))
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    /// Load config from an explicit path, or from the default path if present
    ///
    /// An explicit path must exist. Without one, a missing default file
    /// yields the built-in configuration.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::config_path() {
                Some(path) if path.exists() => path,
                _ => {
                    tracing::debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        tracing::debug!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&content)
            .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Parse config from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Resolve an environment by name
    pub fn environment(&self, name: &str) -> Result<&Environment, CliError> {
        self.environments
            .get(name)
            .ok_or_else(|| CliError::UnknownEnvironment {
                name: name.to_string(),
                available: self
                    .environments
                    .keys()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    /// Path of the contract's ABI file
    pub fn abi_path(&self) -> PathBuf {
        self.compiled_contracts_path
            .join(format!("{}_abi.json", self.contract_name))
    }
}

impl Environment {
    /// Chain ID override, if configured
    pub fn chain_id(&self) -> Result<Option<Felt>, CliError> {
        let Some(raw) = self.chain_id.as_deref() else {
            return Ok(None);
        };
        let chain_id = if raw.starts_with("0x") {
            felt_from_hex(raw)?
        } else {
            encode_short_string(raw)
                .map_err(|e| CliError::Config(format!("chain_id: {}", e)))?
        };
        Ok(Some(chain_id))
    }

    /// Account calldata layout
    pub fn cairo_version(&self) -> Result<CairoVersion, CliError> {
        Ok(CairoVersion::try_from(self.cairo_version)?)
    }

    /// Block used for reads
    pub fn block(&self) -> Result<BlockId, CliError> {
        Ok(self.block.parse::<BlockId>()?)
    }
}
