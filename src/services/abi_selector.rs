use crate::domain::{known_deployment, EvmNetwork};
use crate::evm::{multicall::Multicall, multicall_v2::MulticallV2};
use crate::services::errors::AggregatorError;
use alloy::primitives::Address;
use alloy::sol_types::SolCall;
use std::fmt::{Display, Formatter};

/// Deployments that speak the V2 interface.
const V2_DEPLOYMENTS: [EvmNetwork; 2] = [EvmNetwork::Optimism, EvmNetwork::Arbitrum];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbiVersion {
    V1,
    V2,
}

impl AbiVersion {
    /// V2 only when the chain id and address match a known V2 deployment.
    /// Custom addresses always fall back to V1.
    pub fn select(chain_id: Option<u64>, address: Address) -> Self {
        let Some(chain_id) = chain_id else {
            return AbiVersion::V1;
        };

        let is_v2 = V2_DEPLOYMENTS
            .iter()
            .any(|network| network.chain_id() == chain_id && network.multicall_address() == address);

        if is_v2 {
            AbiVersion::V2
        } else {
            AbiVersion::V1
        }
    }

    pub fn aggregate_method(self) -> &'static str {
        match self {
            AbiVersion::V1 => "aggregate",
            AbiVersion::V2 => "aggregateViewCalls",
        }
    }

    pub fn aggregate_selector(self) -> [u8; 4] {
        match self {
            AbiVersion::V1 => Multicall::aggregateCall::SELECTOR,
            AbiVersion::V2 => MulticallV2::aggregateViewCallsCall::SELECTOR,
        }
    }
}

impl Display for AbiVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AbiVersion::V1 => f.write_str("v1"),
            AbiVersion::V2 => f.write_str("v2"),
        }
    }
}

/// Aggregator address and interface version resolved for one client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deployment {
    pub address: Address,
    pub version: AbiVersion,
}

impl Deployment {
    /// An explicit address wins over the chain id lookup.
    pub fn resolve(chain_id: Option<u64>, explicit: Option<Address>) -> Result<Self, AggregatorError> {
        let address = explicit
            .or_else(|| chain_id.and_then(known_deployment))
            .ok_or(AggregatorError::NoAddress)?;

        Ok(Self {
            address,
            version: AbiVersion::select(chain_id, address),
        })
    }
}
