use alloy::dyn_abi::DynSolValue;
use alloy::primitives::Address;
use multicall_aggregator::{
    args::Args,
    config::constants::DEFAULT_LOG_FILTER,
    evm::erc20::ERC20,
    AggregatorClient, AggregatorConfig, CallDescriptor, CallResult, DecodedOutput,
};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    match run(Args::from_env()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "multicall failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = AggregatorConfig::from_args(&args)?;
    let tokens = args.tokens()?;
    let owner = args.owner()?;

    let client = AggregatorClient::connect(&config).await?;
    tracing::info!(
        aggregator = %client.address(),
        version = %client.version(),
        method = client.version().aggregate_method(),
        "aggregator client ready"
    );

    let (labels, calls) = token_calls(&tokens, owner)?;

    let last_block_hash = client.get_last_block_hash();
    let timestamp = client.get_current_block_timestamp();

    let (results, block_hash, block_timestamp) = futures::try_join!(
        async { client.aggregate(&calls).await.map_err(Box::<dyn std::error::Error>::from) },
        async { last_block_hash.call().await.map_err(Box::<dyn std::error::Error>::from) },
        async { timestamp.call().await.map_err(Box::<dyn std::error::Error>::from) },
    )?;

    tracing::info!(%block_hash, %block_timestamp, "chain state");

    for ((token, property), result) in labels.iter().zip(&results) {
        log_result(*token, property, result);
    }

    Ok(())
}

fn token_calls(
    tokens: &[Address],
    owner: Option<Address>,
) -> Result<(Vec<(Address, &'static str)>, Vec<CallDescriptor>), Box<dyn std::error::Error>> {
    let mut labels = Vec::new();
    let mut calls = Vec::new();

    for token in tokens {
        calls.push(CallDescriptor::from_sol_call(*token, &ERC20::symbolCall {})?);
        labels.push((*token, "symbol"));
        calls.push(CallDescriptor::from_sol_call(*token, &ERC20::nameCall {})?);
        labels.push((*token, "name"));
        calls.push(CallDescriptor::from_sol_call(*token, &ERC20::decimalsCall {})?);
        labels.push((*token, "decimals"));

        if let Some(owner) = owner {
            calls.push(CallDescriptor::from_sol_call(*token, &ERC20::balanceOfCall { owner })?);
            labels.push((*token, "balanceOf"));
        }
    }

    Ok((labels, calls))
}

fn log_result(token: Address, property: &str, result: &CallResult) {
    match result {
        Ok(DecodedOutput::Single(value)) => {
            tracing::info!(%token, property, value = %display_value(value), "call succeeded");
        }
        Ok(DecodedOutput::Multiple(values)) => {
            let values: Vec<String> = values.iter().map(display_value).collect();
            tracing::info!(%token, property, ?values, "call succeeded");
        }
        Err(err) => {
            tracing::warn!(
                %token,
                property,
                error = %err,
                reason = ?err.revert_reason(),
                "call failed"
            );
        }
    }
}

fn display_value(value: &DynSolValue) -> String {
    match value {
        DynSolValue::String(s) => s.clone(),
        DynSolValue::Uint(v, _) => v.to_string(),
        DynSolValue::Address(a) => a.to_string(),
        DynSolValue::Bool(b) => b.to_string(),
        other => format!("{other:?}"),
    }
}
