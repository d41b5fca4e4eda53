pub mod abi_selector;
pub mod aggregator;
pub mod decoder;
pub mod errors;
