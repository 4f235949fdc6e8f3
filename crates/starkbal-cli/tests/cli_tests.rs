//! CLI integration tests for starkbal
//!
//! Tests command parsing, config handling and error reporting. Every case
//! fails before the RPC client is built, so no node is needed.

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Helper to run the CLI with arguments
fn run_starkbal(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_starkbal"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

/// Write a config file whose ABI directory is `contracts_dir`
fn write_config(dir: &Path, contracts_dir: &Path) -> String {
    let path = dir.join("config.toml");
    let content = format!(
        r#"
compiled_contracts_path = "{}"

[environments.local]
rpc_url = "http://127.0.0.1:5050/rpc"
"#,
        contracts_dir.display()
    );
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

// ==================== Help & Version Tests ====================

#[test]
fn test_cli_help() {
    let output = run_starkbal(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("starkbal"));
    assert!(stdout.contains("get_balance"));
    assert!(stdout.contains("get_answer"));
    assert!(stdout.contains("increase_balance"));
    assert!(stdout.contains("sum"));
}

#[test]
fn test_cli_version() {
    let output = run_starkbal(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("starkbal"));
}

#[test]
fn test_sum_help() {
    let output = run_starkbal(&["sum", "--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("-a"));
    assert!(stdout.contains("-b"));
    assert!(stdout.contains("--env"));
}

#[test]
fn test_increase_balance_help() {
    let output = run_starkbal(&["increase_balance", "--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--amount"));
    assert!(stdout.contains("--max-fee"));
}

#[test]
fn test_kebab_case_alias() {
    let output = run_starkbal(&["get-balance", "--help"]);
    assert!(output.status.success());
}

#[test]
fn test_unknown_command() {
    let output = run_starkbal(&["transfer"]);
    assert!(!output.status.success());
}

#[test]
fn test_invalid_amount() {
    let output = run_starkbal(&["increase_balance", "--amount", "lots"]);
    assert!(!output.status.success());
}

// ==================== Config & Environment Tests ====================

#[test]
fn test_unknown_environment() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), dir.path());

    let output = run_starkbal(&["--config", &config, "get_balance", "--env", "mainnet"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("Unknown environment 'mainnet'"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_config_file() {
    let output = run_starkbal(&["--config", "/nonexistent/starkbal.toml", "get_answer"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Config error"));
}

#[test]
fn test_malformed_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "max_fee = \"a lot\"").unwrap();

    let output = run_starkbal(&["--config", path.to_str().unwrap(), "get_answer"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Config error"));
}

// ==================== ABI Tests ====================

#[test]
fn test_missing_abi() {
    let dir = TempDir::new().unwrap();
    let contracts = dir.path().join("missing");
    let config = write_config(dir.path(), &contracts);

    let output = run_starkbal(&["--config", &config, "sum", "-a", "1", "-b", "2"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Cannot read ABI file"));
    assert!(stderr.contains("balance_abi.json"));
}

#[test]
fn test_malformed_abi() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("balance_abi.json"), "[{\"type\": ").unwrap();
    let config = write_config(dir.path(), dir.path());

    let output = run_starkbal(&["--config", &config, "get_balance"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid ABI file"));
}

// ==================== JSON Output Tests ====================

#[test]
fn test_json_error_output() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), dir.path());

    let output = run_starkbal(&[
        "--json",
        "--config",
        &config,
        "increase_balance",
        "--amount",
        "-3",
        "--env",
        "mainnet",
    ]);
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["success"], false);
    assert!(value["error"]
        .as_str()
        .unwrap()
        .contains("Unknown environment"));
}
