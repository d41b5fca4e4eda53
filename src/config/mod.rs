pub mod aggregator_config;
pub mod constants;
pub mod errors;
