use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Unable to read config file {0}: {1}")]
    Read(String, String),

    #[error("Unable to parse config file: {0}")]
    Parse(String),

    #[error("Invalid chain_id: {0}")]
    InvalidChainId(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("RPC url is not defined, set --rpc-url or RPC_URL")]
    MissingRpcUrl,
}
