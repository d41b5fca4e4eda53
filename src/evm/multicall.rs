use alloy::sol;

sol! {
    // MakerDAO style aggregator. Any failing sub-call reverts the whole batch.
    #[sol(rpc)]
    contract Multicall {
        struct Call {
            address target;
            bytes callData;
        }

        function aggregate(Call[] calls) public returns (uint256 blockNumber, bytes[] returnData);
    }
}
