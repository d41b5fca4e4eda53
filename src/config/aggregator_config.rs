use crate::args::{parse_address, Args};
use crate::config::errors::ConfigError;
use alloy::primitives::Address;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Everything needed to build an `AggregatorClient`.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AggregatorConfig {
    #[serde(default)]
    pub chain_id: Option<u64>,
    #[serde(default)]
    pub rpc_url: String,
    #[serde(default)]
    pub multicall_address: Option<Address>,
}

impl AggregatorConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|err| ConfigError::Read(path.display().to_string(), err.to_string()))?;

        serde_json::from_str(&content).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Starts from the config file when one is given; non-empty flags and
    /// env values override it.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if !args.rpc_url.trim().is_empty() {
            config.rpc_url = args.rpc_url.trim().to_string();
        }

        let chain_id = args.chain_id.trim();
        if !chain_id.is_empty() {
            let id = chain_id
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidChainId(chain_id.to_string()))?;
            config.chain_id = Some(id);
        }

        let multicall_address = args.multicall_address.trim();
        if !multicall_address.is_empty() {
            config.multicall_address = Some(parse_address(multicall_address)?);
        }

        if config.rpc_url.is_empty() {
            return Err(ConfigError::MissingRpcUrl);
        }

        Ok(config)
    }
}
