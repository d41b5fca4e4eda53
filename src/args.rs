use crate::config::{constants::LIST_SEPARATOR, errors::ConfigError};
use alloy::primitives::Address;
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug, Clone)]
#[command(about = "Batch ERC-20 reads through an on-chain multicall aggregator")]
pub struct Args {
    #[arg(long, env = "RPC_URL", default_value = "")]
    pub rpc_url: String,

    #[arg(long, env = "CHAIN_ID", default_value = "")]
    pub chain_id: String,

    #[arg(long, env = "MULTICALL_ADDRESS", default_value = "")]
    pub multicall_address: String,

    #[arg(long, env = "AGGREGATOR_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long = "tokens", env = "TOKENS", default_value = "")]
    tokens_from_env: String,

    #[arg(long, env = "OWNER", default_value = "")]
    pub owner: String,
}

impl Args {
    pub fn from_env() -> Self {
        Self::parse()
    }

    pub fn tokens(&self) -> Result<Vec<Address>, ConfigError> {
        self.tokens_from_env
            .split(LIST_SEPARATOR)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(parse_address)
            .collect()
    }

    pub fn owner(&self) -> Result<Option<Address>, ConfigError> {
        let owner = self.owner.trim();
        if owner.is_empty() {
            return Ok(None);
        }
        parse_address(owner).map(Some)
    }
}

pub(crate) fn parse_address(value: &str) -> Result<Address, ConfigError> {
    Address::from_str(value).map_err(|_| ConfigError::InvalidAddress(value.to_string()))
}
