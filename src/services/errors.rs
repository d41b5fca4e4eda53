use thiserror::Error;

#[derive(Debug, Error)]
pub enum AggregatorError {
    #[error("No address found via chainId. Please specify multicallAddress.")]
    NoAddress,

    #[error("Multicall request failed: {0}")]
    Transport(#[from] alloy::contract::Error),

    #[error("Unable to connect provider: {0}")]
    Connect(#[from] alloy::transports::TransportError),

    #[error("Aggregator returned {actual} results for {expected} calls")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Aggregator returned {flags} success flags for {data} return data entries")]
    MalformedResponse { flags: usize, data: usize },
}
