use alloy::sol;

sol! {
    // Chain introspection helpers exposed by every aggregator version.
    #[sol(rpc)]
    contract MulticallHelpers {
        function getEthBalance(address addr) public view returns (uint256 balance);
        function getBlockHash(uint256 blockNumber) public view returns (bytes32 blockHash);
        function getLastBlockHash() public view returns (bytes32 blockHash);
        function getCurrentBlockTimestamp() public view returns (uint256 timestamp);
        function getCurrentBlockDifficulty() public view returns (uint256 difficulty);
        function getCurrentBlockGasLimit() public view returns (uint256 gaslimit);
        function getCurrentBlockCoinbase() public view returns (address coinbase);
    }
}
