use crate::config::aggregator_config::AggregatorConfig;
use crate::domain::{CallDescriptor, CallError, CallResult};
use crate::evm::{helpers::MulticallHelpers, multicall::Multicall, multicall_v2::MulticallV2};
use crate::services::abi_selector::{AbiVersion, Deployment};
use crate::services::decoder::decode_position;
use crate::services::errors::AggregatorError;
use alloy::contract::SolCallBuilder;
use alloy::primitives::{Address, Bytes, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use std::time::Instant;
use tracing::{debug, info, warn};

#[derive(Clone)]
enum BoundAggregator<P> {
    V1(Multicall::MulticallInstance<P>),
    V2(MulticallV2::MulticallV2Instance<P>),
}

/// Batches read-only calls into a single `eth_call` against an aggregator
/// contract and splits the response back into one result per call.
///
/// The resolved deployment is fixed at construction, so a client can be
/// cloned and shared between tasks.
#[derive(Clone)]
pub struct AggregatorClient<P> {
    chain_id: Option<u64>,
    deployment: Deployment,
    contract: BoundAggregator<P>,
    helpers: MulticallHelpers::MulticallHelpersInstance<P>,
}

impl AggregatorClient<DynProvider> {
    /// Resolves the aggregator deployment, then connects an HTTP provider.
    pub async fn connect(config: &AggregatorConfig) -> Result<Self, AggregatorError> {
        let deployment = Deployment::resolve(config.chain_id, config.multicall_address)?;

        let provider = ProviderBuilder::new()
            .connect(&config.rpc_url)
            .await?
            .erased();

        Ok(Self::bind(provider, config.chain_id, deployment))
    }
}

impl<P: Provider + Clone> AggregatorClient<P> {
    pub fn new(
        provider: P,
        chain_id: Option<u64>,
        multicall_address: Option<Address>,
    ) -> Result<Self, AggregatorError> {
        let deployment = Deployment::resolve(chain_id, multicall_address)?;
        Ok(Self::bind(provider, chain_id, deployment))
    }

    fn bind(provider: P, chain_id: Option<u64>, deployment: Deployment) -> Self {
        let contract = match deployment.version {
            AbiVersion::V1 => BoundAggregator::V1(Multicall::new(deployment.address, provider.clone())),
            AbiVersion::V2 => {
                BoundAggregator::V2(MulticallV2::new(deployment.address, provider.clone()))
            }
        };

        debug!(
            aggregator = %deployment.address,
            version = %deployment.version,
            chain_id = ?chain_id,
            "aggregator client bound"
        );

        Self {
            chain_id,
            deployment,
            contract,
            helpers: MulticallHelpers::new(deployment.address, provider),
        }
    }

    pub fn address(&self) -> Address {
        self.deployment.address
    }

    pub fn version(&self) -> AbiVersion {
        self.deployment.version
    }

    pub fn chain_id(&self) -> Option<u64> {
        self.chain_id
    }

    /// Executes all `calls` in one round trip. `result[i]` always belongs to
    /// `calls[i]`.
    ///
    /// A failing or undecodable call only affects its own position. Transport
    /// and aggregator level failures reject the whole batch. On V1 a single
    /// reverting call reverts the batch on-chain, which surfaces here as
    /// [`AggregatorError::Transport`].
    pub async fn aggregate(&self, calls: &[CallDescriptor]) -> Result<Vec<CallResult>, AggregatorError> {
        if calls.is_empty() {
            return Ok(Vec::new());
        }

        let version = self.deployment.version;
        debug!(
            aggregator = %self.deployment.address,
            %version,
            method = version.aggregate_method(),
            calls = calls.len(),
            "sending aggregate request"
        );

        let t0 = Instant::now();
        let responses = self.execute(calls).await?;

        info!(
            time = t0.elapsed().as_millis(),
            calls = calls.len(),
            "aggregate complete"
        );

        if responses.len() != calls.len() {
            return Err(AggregatorError::LengthMismatch {
                expected: calls.len(),
                actual: responses.len(),
            });
        }

        let results = calls
            .iter()
            .zip(responses)
            .enumerate()
            .map(|(index, (call, (success, data)))| {
                let result = decode_position(&call.output_types, success, data);
                if let Err(CallError::Decode(message)) = &result {
                    warn!(index, target = %call.target, error = %message, "unable to decode call result");
                }
                result
            })
            .collect();

        Ok(results)
    }

    async fn execute(&self, calls: &[CallDescriptor]) -> Result<Vec<(bool, Bytes)>, AggregatorError> {
        match &self.contract {
            BoundAggregator::V1(contract) => {
                let requests = calls
                    .iter()
                    .map(|call| Multicall::Call {
                        target: call.target,
                        callData: call.call_data.clone(),
                    })
                    .collect();

                let response = contract.aggregate(requests).call().await?;

                Ok(response
                    .returnData
                    .into_iter()
                    .map(|data| (true, data))
                    .collect())
            }
            BoundAggregator::V2(contract) => {
                let requests = calls
                    .iter()
                    .map(|call| MulticallV2::Call {
                        target: call.target,
                        callData: call.call_data.clone(),
                    })
                    .collect();

                let response = contract.aggregateViewCalls(requests).call().await?;

                if response.results.len() != response.returnData.len() {
                    return Err(AggregatorError::MalformedResponse {
                        flags: response.results.len(),
                        data: response.returnData.len(),
                    });
                }

                Ok(response
                    .results
                    .into_iter()
                    .zip(response.returnData)
                    .collect())
            }
        }
    }

    pub fn get_eth_balance(&self, addr: Address) -> SolCallBuilder<&P, MulticallHelpers::getEthBalanceCall> {
        self.helpers.getEthBalance(addr)
    }

    pub fn get_block_hash(&self, block_number: U256) -> SolCallBuilder<&P, MulticallHelpers::getBlockHashCall> {
        self.helpers.getBlockHash(block_number)
    }

    pub fn get_last_block_hash(&self) -> SolCallBuilder<&P, MulticallHelpers::getLastBlockHashCall> {
        self.helpers.getLastBlockHash()
    }

    pub fn get_current_block_timestamp(
        &self,
    ) -> SolCallBuilder<&P, MulticallHelpers::getCurrentBlockTimestampCall> {
        self.helpers.getCurrentBlockTimestamp()
    }

    pub fn get_current_block_difficulty(
        &self,
    ) -> SolCallBuilder<&P, MulticallHelpers::getCurrentBlockDifficultyCall> {
        self.helpers.getCurrentBlockDifficulty()
    }

    pub fn get_current_block_gas_limit(
        &self,
    ) -> SolCallBuilder<&P, MulticallHelpers::getCurrentBlockGasLimitCall> {
        self.helpers.getCurrentBlockGasLimit()
    }

    pub fn get_current_block_coinbase(
        &self,
    ) -> SolCallBuilder<&P, MulticallHelpers::getCurrentBlockCoinbaseCall> {
        self.helpers.getCurrentBlockCoinbase()
    }
}
