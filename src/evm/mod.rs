pub mod erc20;
pub mod helpers;
pub mod multicall;
pub mod multicall_v2;
