use alloy::sol;

sol! {
    // Reports success per sub-call instead of reverting the batch.
    #[sol(rpc)]
    contract MulticallV2 {
        struct Call {
            address target;
            bytes callData;
        }

        function aggregateViewCalls(Call[] calls) public view returns (bool[] results, bytes[] returnData);
    }
}
