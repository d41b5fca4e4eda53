use alloy::sol;

sol! {
   #[sol(rpc, abi)]
   contract ERC20 {
        function name() public view returns (string);
        function symbol() public view returns (string);
        function decimals() public view returns (uint8);
        function balanceOf(address owner) public view returns (uint256);
   }
}
