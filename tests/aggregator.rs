//! Aggregator client against alloy's mocked transport.

use alloy::dyn_abi::{DynSolType, DynSolValue};
use alloy::primitives::{address, b256, Address, Bytes, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::sol_types::{Revert, SolError};
use alloy::transports::mock::Asserter;
use multicall_aggregator::{
    evm::erc20::ERC20, AbiVersion, AggregatorClient, AggregatorConfig, AggregatorError,
    CallDescriptor, CallError, DecodedOutput, EvmNetwork,
};

const USDT: Address = address!("0x94b008aa00579c1307b0ef2c499ad98a8ce58e58");
const CUSTOM_AGGREGATOR: Address = address!("0x1111111111111111111111111111111111111111");

fn mocked_provider() -> (Asserter, DynProvider) {
    let asserter = Asserter::new();
    let provider = ProviderBuilder::new()
        .connect_mocked_client(asserter.clone())
        .erased();
    (asserter, provider)
}

fn v1_response(return_data: Vec<Vec<u8>>) -> Bytes {
    DynSolValue::Tuple(vec![
        DynSolValue::Uint(U256::from(1_000_000u64), 256),
        DynSolValue::Array(return_data.into_iter().map(DynSolValue::Bytes).collect()),
    ])
    .abi_encode_params()
    .into()
}

fn v2_response(results: Vec<(bool, Vec<u8>)>) -> Bytes {
    let (flags, data): (Vec<_>, Vec<_>) = results
        .into_iter()
        .map(|(success, data)| (DynSolValue::Bool(success), DynSolValue::Bytes(data)))
        .unzip();

    DynSolValue::Tuple(vec![DynSolValue::Array(flags), DynSolValue::Array(data)])
        .abi_encode_params()
        .into()
}

fn encoded(values: Vec<DynSolValue>) -> Vec<u8> {
    DynSolValue::Tuple(values).abi_encode_params()
}

fn string_output(value: &str) -> Vec<u8> {
    encoded(vec![DynSolValue::String(value.to_string())])
}

fn revert_payload(reason: &str) -> Vec<u8> {
    Revert {
        reason: reason.to_string(),
    }
    .abi_encode()
}

fn symbol_call() -> CallDescriptor {
    CallDescriptor::from_sol_call(USDT, &ERC20::symbolCall {}).unwrap()
}

fn decimals_call() -> CallDescriptor {
    CallDescriptor::from_sol_call(USDT, &ERC20::decimalsCall {}).unwrap()
}

fn missing_property_call() -> CallDescriptor {
    // a selector the token does not implement
    CallDescriptor::new(USDT, vec![0xde, 0xad, 0xbe, 0xef], vec![DynSolType::String])
}

#[tokio::test]
async fn unknown_chain_without_address_fails_construction() {
    let (_, provider) = mocked_provider();

    let err = AggregatorClient::new(provider, Some(1111), None)
        .err()
        .expect("construction must fail");

    assert!(matches!(err, AggregatorError::NoAddress));
    assert_eq!(
        err.to_string(),
        "No address found via chainId. Please specify multicallAddress."
    );
}

#[tokio::test]
async fn connect_resolves_address_before_any_io() {
    let config = AggregatorConfig {
        chain_id: Some(1111),
        rpc_url: "http://127.0.0.1:1".to_string(),
        multicall_address: None,
    };

    let result = AggregatorClient::connect(&config).await;

    assert!(matches!(result, Err(AggregatorError::NoAddress)));
}

#[tokio::test]
async fn version_follows_deployment() {
    let (_, provider) = mocked_provider();

    let optimism = AggregatorClient::new(provider.clone(), Some(10), None).unwrap();
    assert_eq!(optimism.version(), AbiVersion::V2);
    assert_eq!(optimism.version().aggregate_method(), "aggregateViewCalls");
    assert_eq!(optimism.address(), EvmNetwork::Optimism.multicall_address());

    let custom = AggregatorClient::new(provider.clone(), Some(10), Some(CUSTOM_AGGREGATOR)).unwrap();
    assert_eq!(custom.version(), AbiVersion::V1);
    assert_eq!(custom.address(), CUSTOM_AGGREGATOR);

    let no_chain = AggregatorClient::new(provider, None, Some(CUSTOM_AGGREGATOR)).unwrap();
    assert_eq!(no_chain.version(), AbiVersion::V1);
    assert_eq!(no_chain.chain_id(), None);
}

#[tokio::test]
async fn empty_batch_skips_the_network() {
    // Nothing is queued, so any request would fail.
    let (_, provider) = mocked_provider();
    let client = AggregatorClient::new(provider, Some(10), None).unwrap();

    let results = client.aggregate(&[]).await.unwrap();

    assert!(results.is_empty());
}

#[tokio::test]
async fn v2_isolates_reverted_call() {
    let (asserter, provider) = mocked_provider();
    let client = AggregatorClient::new(provider, Some(10), None).unwrap();
    let revert = revert_payload("function does not exist");

    asserter.push_success(&v2_response(vec![
        (true, string_output("USDT")),
        (false, revert.clone()),
    ]));

    let calls = vec![symbol_call(), missing_property_call()];
    let results = client.aggregate(&calls).await.unwrap();

    assert_eq!(results.len(), calls.len());
    assert_eq!(
        results[0],
        Ok(DecodedOutput::Single(DynSolValue::String("USDT".into())))
    );

    let err = results[1].clone().unwrap_err();
    assert_eq!(err, CallError::Reverted(revert.into()));
    assert!(err.revert_reason().unwrap().contains("function does not exist"));
}

#[tokio::test]
async fn v2_keeps_positions_for_mixed_outcomes() {
    let (asserter, provider) = mocked_provider();
    let client = AggregatorClient::new(provider, Some(42161), None).unwrap();
    let owner = address!("0x00000000000000000000000000000000000000aa");

    asserter.push_success(&v2_response(vec![
        (false, vec![]),
        (true, encoded(vec![DynSolValue::Uint(U256::from(6), 8)])),
        (true, vec![0x01]),
        (true, encoded(vec![DynSolValue::Uint(U256::from(500), 256)])),
    ]));

    let calls = vec![
        missing_property_call(),
        decimals_call(),
        symbol_call(),
        CallDescriptor::from_sol_call(USDT, &ERC20::balanceOfCall { owner }).unwrap(),
    ];
    let results = client.aggregate(&calls).await.unwrap();

    assert_eq!(results.len(), 4);
    assert_eq!(results[0], Err(CallError::Reverted(Bytes::new())));
    assert_eq!(
        results[1],
        Ok(DecodedOutput::Single(DynSolValue::Uint(U256::from(6), 8)))
    );
    match &results[2] {
        Err(CallError::Decode(message)) => {
            assert!(CallError::Decode(message.clone())
                .to_string()
                .starts_with("Data handling error: "));
        }
        other => panic!("expected decode error, got {other:?}"),
    }
    assert_eq!(
        results[3],
        Ok(DecodedOutput::Single(DynSolValue::Uint(U256::from(500), 256)))
    );
}

#[tokio::test]
async fn v2_multi_output_call_returns_list() {
    let (asserter, provider) = mocked_provider();
    let client = AggregatorClient::new(provider, Some(10), None).unwrap();

    let values = vec![
        DynSolValue::Uint(U256::from(3), 8),
        DynSolValue::Tuple(vec![
            DynSolValue::Uint(U256::from(9), 256),
            DynSolValue::Bool(true),
        ]),
    ];
    asserter.push_success(&v2_response(vec![(true, encoded(values.clone()))]));

    // An enum and a struct as they travel on the wire.
    let call = CallDescriptor::new(
        USDT,
        vec![0x20, 0x0d, 0x2e, 0xd2],
        vec![
            DynSolType::Uint(8),
            DynSolType::Tuple(vec![DynSolType::Uint(256), DynSolType::Bool]),
        ],
    );
    let results = client.aggregate(&[call]).await.unwrap();

    assert_eq!(results, vec![Ok(DecodedOutput::Multiple(values))]);
}

#[tokio::test]
async fn v1_returns_decoded_values_and_isolates_decode_failures() {
    let (asserter, provider) = mocked_provider();
    let client = AggregatorClient::new(provider, Some(56), None).unwrap();
    assert_eq!(client.version(), AbiVersion::V1);

    asserter.push_success(&v1_response(vec![
        vec![],
        encoded(vec![DynSolValue::Uint(U256::from(18), 8)]),
        string_output("USDT"),
    ]));

    let calls = vec![symbol_call(), decimals_call(), symbol_call()];
    let results = client.aggregate(&calls).await.unwrap();

    assert_eq!(results.len(), 3);
    assert!(matches!(results[0], Err(CallError::Decode(_))));
    assert_eq!(
        results[1],
        Ok(DecodedOutput::Single(DynSolValue::Uint(U256::from(18), 8)))
    );
    assert_eq!(
        results[2],
        Ok(DecodedOutput::Single(DynSolValue::String("USDT".into())))
    );
}

#[tokio::test]
async fn transport_failure_rejects_the_batch() {
    let (asserter, provider) = mocked_provider();
    let client = AggregatorClient::new(provider, Some(1), None).unwrap();

    asserter.push_failure_msg("execution reverted");

    let result = client.aggregate(&[symbol_call(), missing_property_call()]).await;

    assert!(matches!(result, Err(AggregatorError::Transport(_))));
}

#[tokio::test]
async fn short_response_is_a_length_mismatch() {
    let (asserter, provider) = mocked_provider();
    let client = AggregatorClient::new(provider, Some(1), None).unwrap();

    asserter.push_success(&v1_response(vec![string_output("USDT")]));

    let result = client.aggregate(&[symbol_call(), symbol_call()]).await;

    assert!(matches!(
        result,
        Err(AggregatorError::LengthMismatch {
            expected: 2,
            actual: 1
        })
    ));
}

#[tokio::test]
async fn v2_flags_without_matching_data_are_malformed() {
    let (asserter, provider) = mocked_provider();
    let client = AggregatorClient::new(provider, Some(10), None).unwrap();

    let response: Bytes = DynSolValue::Tuple(vec![
        DynSolValue::Array(vec![DynSolValue::Bool(true), DynSolValue::Bool(true)]),
        DynSolValue::Array(vec![DynSolValue::Bytes(string_output("USDT"))]),
    ])
    .abi_encode_params()
    .into();
    asserter.push_success(&response);

    let result = client.aggregate(&[symbol_call(), symbol_call()]).await;

    let err = result.err().expect("batch must be rejected");
    assert!(matches!(
        err,
        AggregatorError::MalformedResponse { flags: 2, data: 1 }
    ));
    assert_eq!(
        err.to_string(),
        "Aggregator returned 2 success flags for 1 return data entries"
    );
}

#[tokio::test]
async fn repeated_and_concurrent_batches_agree() {
    let (asserter, provider) = mocked_provider();
    let client = AggregatorClient::new(provider, Some(10), None).unwrap();
    let response = v2_response(vec![
        (true, string_output("USDT")),
        (false, revert_payload("nope")),
    ]);
    for _ in 0..3 {
        asserter.push_success(&response);
    }

    let calls = vec![symbol_call(), missing_property_call()];
    let first = client.aggregate(&calls).await.unwrap();

    let other = client.clone();
    let (second, third) = tokio::join!(client.aggregate(&calls), other.aggregate(&calls));

    assert_eq!(first, second.unwrap());
    assert_eq!(first, third.unwrap());
}

#[tokio::test]
async fn helper_accessors_are_lazy_pass_throughs() {
    let (asserter, provider) = mocked_provider();
    let client = AggregatorClient::new(provider, Some(10), None).unwrap();

    let timestamp = client.get_current_block_timestamp();
    let hash = client.get_last_block_hash();

    let block_hash = b256!("0x1111111111111111111111111111111111111111111111111111111111111111");
    let coinbase = address!("0x00000000000000000000000000000000000000cb");
    asserter.push_success(&Bytes::from(
        DynSolValue::Uint(U256::from(1_700_000_000u64), 256).abi_encode(),
    ));
    asserter.push_success(&Bytes::from(DynSolValue::FixedBytes(block_hash, 32).abi_encode()));
    asserter.push_success(&Bytes::from(DynSolValue::Address(coinbase).abi_encode()));

    assert_eq!(timestamp.call().await.unwrap(), U256::from(1_700_000_000u64));
    assert_eq!(hash.call().await.unwrap(), block_hash);
    assert_eq!(client.get_current_block_coinbase().call().await.unwrap(), coinbase);
}
