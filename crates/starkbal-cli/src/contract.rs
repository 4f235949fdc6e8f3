//! Balance contract construction

use std::path::Path;

use starkbal_sdk::abi::Abi;
use starkbal_sdk::felt::felt_from_hex;
use starkbal_sdk::{AccountClient, Contract, StarknetClient, Wallet};

use crate::config::{Config, Environment};
use crate::CliError;

/// Read and parse an ABI file
pub fn load_abi(path: &Path) -> Result<Abi, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::AbiRead {
        path: path.to_path_buf(),
        source,
    })?;
    Abi::from_json(&content).map_err(|source| CliError::AbiParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Build the account client for an environment on top of `client`
pub fn account_client(env: &Environment, client: StarknetClient) -> Result<AccountClient, CliError> {
    let client = match env.chain_id()? {
        Some(chain_id) => client.with_chain_id(chain_id),
        None => client,
    };

    let account = match (&env.account_address, &env.private_key) {
        (Some(address), Some(key)) => {
            let wallet = Wallet::from_private_key_hex(felt_from_hex(address)?, key)?;
            AccountClient::new(client, wallet)
        }
        (None, None) => AccountClient::read_only(client),
        _ => {
            return Err(CliError::Config(
                "account_address and private_key must be set together".to_string(),
            ))
        }
    };

    Ok(account
        .with_cairo_version(env.cairo_version()?)
        .with_block(env.block()?))
}

/// Build the balance contract handle for `env_name` over HTTP
pub fn balance_contract(
    config: &Config,
    env_name: &str,
    address: Option<&str>,
) -> Result<Contract, CliError> {
    balance_contract_with(config, env_name, address, |env| {
        StarknetClient::http(&env.rpc_url)
    })
}

/// Build the balance contract handle, letting the caller supply the RPC client
///
/// The ABI is loaded before the client is created, so a missing or broken
/// ABI file never reaches the network.
pub fn balance_contract_with<F>(
    config: &Config,
    env_name: &str,
    address: Option<&str>,
    connect: F,
) -> Result<Contract, CliError>
where
    F: FnOnce(&Environment) -> StarknetClient,
{
    let env = config.environment(env_name)?;
    let address = felt_from_hex(address.unwrap_or(&config.contract_address))?;
    let abi = load_abi(&config.abi_path())?;

    tracing::debug!(env = env_name, rpc_url = %env.rpc_url, "building balance contract");
    let account = account_client(env, connect(env))?;
    Ok(Contract::new(address, abi, account))
}
