use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum EvmError {
    #[error("Network with id {0} is not supported")]
    UnsupportedNetwork(u64),
}

#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("Function {0} is not declared in the contract ABI")]
    UnknownFunction(String),

    #[error("Unable to resolve output type {0}")]
    UnresolvedOutputType(String),

    #[error("ABI error: {0}")]
    Abi(#[from] alloy::dyn_abi::Error),
}
