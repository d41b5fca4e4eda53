//! Batches read-only contract calls into one round trip through an on-chain
//! multicall aggregator, then splits the aggregated response back into one
//! decoded result per call.

pub mod args;
pub mod config;
pub mod domain;
pub mod evm;
pub mod services;

pub use config::aggregator_config::AggregatorConfig;
pub use domain::{CallDescriptor, CallError, CallResult, DecodedOutput, EvmNetwork};
pub use services::abi_selector::{AbiVersion, Deployment};
pub use services::aggregator::AggregatorClient;
pub use services::errors::AggregatorError;
