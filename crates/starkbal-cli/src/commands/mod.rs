//! CLI commands

pub mod balance;
