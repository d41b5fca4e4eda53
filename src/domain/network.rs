use crate::domain::errors::EvmError;
use alloy::primitives::{address, Address};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u64)]
pub enum EvmNetwork {
    Eth = 1,
    Optimism = 10,
    Bsc = 56,
    Gnosis = 100,
    Polygon = 137,
    Arbitrum = 42161,
}

impl EvmNetwork {
    pub fn chain_id(self) -> u64 {
        self as u64
    }

    /// Canonical aggregator deployment for the network.
    pub fn multicall_address(self) -> Address {
        match self {
            EvmNetwork::Eth => address!("0xeefba1e63905ef1d7acba5a8513c70307c1ce441"),
            EvmNetwork::Optimism => address!("0x2dc0e2aa608532da689e89e237df582b783e552c"),
            EvmNetwork::Bsc => address!("0x41263cba59eb80dc200f3e2544eda4ed6a90e76c"),
            EvmNetwork::Gnosis => address!("0xb5b692a88bdfc81ca69dcb1d924f59f0413a602a"),
            EvmNetwork::Polygon => address!("0x11ce4b23bd875d7f5c6a31084f55fde1e9a87507"),
            EvmNetwork::Arbitrum => address!("0x842ec2c7d803033edf55e478f461fc547bc54eb2"),
        }
    }
}

/// Looks up the canonical aggregator address for a chain id.
pub fn known_deployment(chain_id: u64) -> Option<Address> {
    EvmNetwork::try_from(chain_id)
        .ok()
        .map(EvmNetwork::multicall_address)
}

impl TryFrom<u64> for EvmNetwork {
    type Error = EvmError;

    fn try_from(id: u64) -> Result<Self, EvmError> {
        match id {
            1 => Ok(EvmNetwork::Eth),
            10 => Ok(EvmNetwork::Optimism),
            56 => Ok(EvmNetwork::Bsc),
            100 => Ok(EvmNetwork::Gnosis),
            137 => Ok(EvmNetwork::Polygon),
            42161 => Ok(EvmNetwork::Arbitrum),
            _ => Err(EvmError::UnsupportedNetwork(id)),
        }
    }
}
