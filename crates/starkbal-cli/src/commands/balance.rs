//! Balance contract commands

use clap::Subcommand;
use starkbal_sdk::abi::Token;
use starkbal_sdk::felt::{felt_to_hex, format_felt};
use starkbal_sdk::types::InvokeResult;
use starkbal_sdk::{Contract, Felt};

use crate::{config::Config, contract::balance_contract, output::Output, CliError};

/// Balance contract subcommands
#[derive(Debug, Subcommand)]
pub enum BalanceCommand {
    /// Read the stored balance
    #[command(name = "get_balance", visible_alias = "get-balance")]
    GetBalance {
        /// Environment to use
        #[arg(long, default_value = "local")]
        env: String,
    },
    /// Read the contract's answer
    #[command(name = "get_answer", visible_alias = "get-answer")]
    GetAnswer {
        /// Environment to use
        #[arg(long, default_value = "local")]
        env: String,
    },
    /// Increase the balance, then read it back
    #[command(name = "increase_balance", visible_alias = "increase-balance")]
    IncreaseBalance {
        /// Amount to add
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        amount: i128,
        /// Fee ceiling in wei (defaults to the configured max_fee)
        #[arg(long)]
        max_fee: Option<u128>,
        /// Environment to use
        #[arg(long, default_value = "local")]
        env: String,
    },
    /// Add two numbers on chain
    Sum {
        /// First operand
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        a: i128,
        /// Second operand
        #[arg(short, long, default_value_t = 2, allow_negative_numbers = true)]
        b: i128,
        /// Environment to use
        #[arg(long, default_value = "local")]
        env: String,
    },
}

impl BalanceCommand {
    /// Environment the command runs against
    pub fn env(&self) -> &str {
        match self {
            BalanceCommand::GetBalance { env }
            | BalanceCommand::GetAnswer { env }
            | BalanceCommand::IncreaseBalance { env, .. }
            | BalanceCommand::Sum { env, .. } => env,
        }
    }

    pub async fn execute(
        self,
        config: &Config,
        address: Option<&str>,
        json: bool,
    ) -> Result<(), CliError> {
        let contract = balance_contract(config, self.env(), address)?;
        self.run(&contract, config.max_fee, json).await?.print();
        Ok(())
    }

    /// Run against an already built contract handle
    pub async fn run(
        self,
        contract: &Contract,
        default_max_fee: u64,
        json: bool,
    ) -> Result<Output, CliError> {
        let output = match self {
            BalanceCommand::GetBalance { .. } => {
                let balance = format_felt(&get_balance(contract).await?);
                Output::new(json).field("balance", &balance).message(&balance)
            }
            BalanceCommand::GetAnswer { .. } => {
                let answer = format_felt(&get_answer(contract).await?);
                Output::new(json).field("answer", &answer).message(&answer)
            }
            BalanceCommand::IncreaseBalance {
                amount,
                max_fee,
                env,
            } => {
                if contract.account().wallet().is_none() {
                    return Err(CliError::NoAccount(env));
                }
                let max_fee = max_fee.unwrap_or(u128::from(default_max_fee));
                let (result, balance) = increase_balance(contract, amount, max_fee).await?;
                let balance = format_felt(&balance);
                Output::new(json)
                    .field("transaction_hash", &felt_to_hex(&result.transaction_hash))
                    .field("balance", &balance)
                    .message(&balance)
            }
            BalanceCommand::Sum { a, b, .. } => {
                let sum = format_felt(&sum(contract, a, b).await?);
                Output::new(json).field("sum", &sum).message(&sum)
            }
        };
        Ok(output)
    }
}

/// Current balance
pub async fn get_balance(contract: &Contract) -> Result<Felt, CliError> {
    let result = contract.function("get_balance")?.call(&[]).await?;
    Ok(result.felt("balance")?)
}

/// The contract's answer
pub async fn get_answer(contract: &Contract) -> Result<Felt, CliError> {
    let result = contract.function("get_answer")?.call(&[]).await?;
    Ok(result.felt("answer")?)
}

/// Submit `increase_balance(amount)` and read the balance back
///
/// The read does not wait for inclusion and may return the old balance.
pub async fn increase_balance(
    contract: &Contract,
    amount: i128,
    max_fee: u128,
) -> Result<(InvokeResult, Felt), CliError> {
    let result = contract
        .function("increase_balance")?
        .invoke(&[Token::from(amount)], max_fee)
        .await?;
    tracing::info!(
        contract = %felt_to_hex(contract.address()),
        tx_hash = %felt_to_hex(&result.transaction_hash),
        amount = %amount,
        "increase_balance submitted"
    );
    let balance = get_balance(contract).await?;
    Ok((result, balance))
}

/// `a + b` computed by the contract
pub async fn sum(contract: &Contract, a: i128, b: i128) -> Result<Felt, CliError> {
    let result = contract
        .function("sum")?
        .call(&[Token::from(a), Token::from(b)])
        .await?;
    Ok(result.felt("sum")?)
}
