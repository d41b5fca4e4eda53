use crate::domain::errors::DescriptorError;
use alloy::dyn_abi::{DynSolType, DynSolValue, JsonAbiExt, Specifier};
use alloy::json_abi::{Function, JsonAbi};
use alloy::primitives::{Address, Bytes};
use alloy::sol_types::{JsonAbiExt as SolJsonAbi, SolCall};

/// A prepared, not yet submitted contract call together with the types its
/// return data decodes into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallDescriptor {
    pub target: Address,
    pub call_data: Bytes,
    pub output_types: Vec<DynSolType>,
}

impl CallDescriptor {
    pub fn new(target: Address, call_data: impl Into<Bytes>, output_types: Vec<DynSolType>) -> Self {
        Self {
            target,
            call_data: call_data.into(),
            output_types,
        }
    }

    /// Builds a descriptor from a `sol!` generated call. The binding needs
    /// `#[sol(abi)]` so struct outputs resolve to their tuple components.
    pub fn from_sol_call<C>(target: Address, call: &C) -> Result<Self, DescriptorError>
    where
        C: SolCall + SolJsonAbi<Abi = Function>,
    {
        let output_types = resolve_outputs(&C::abi())?;
        Ok(Self::new(target, call.abi_encode(), output_types))
    }

    /// Builds a descriptor from a JSON ABI function.
    ///
    /// Outputs are resolved from their wire `type`, so enums and
    /// user-defined value types decode as the primitive they are encoded as.
    pub fn from_function(
        target: Address,
        function: &Function,
        args: &[DynSolValue],
    ) -> Result<Self, DescriptorError> {
        let call_data = function.abi_encode_input(args)?;
        let output_types = resolve_outputs(function)?;

        Ok(Self::new(target, call_data, output_types))
    }

    /// Looks `name` up in `abi` and builds a descriptor for it. With
    /// overloads, the first one taking `args.len()` inputs wins.
    pub fn from_abi(
        target: Address,
        abi: &JsonAbi,
        name: &str,
        args: &[DynSolValue],
    ) -> Result<Self, DescriptorError> {
        let function = abi
            .function(name)
            .and_then(|overloads| {
                overloads
                    .iter()
                    .find(|f| f.inputs.len() == args.len())
                    .or_else(|| overloads.first())
            })
            .ok_or_else(|| DescriptorError::UnknownFunction(name.to_string()))?;

        Self::from_function(target, function, args)
    }
}

fn resolve_outputs(function: &Function) -> Result<Vec<DynSolType>, DescriptorError> {
    function
        .outputs
        .iter()
        .map(|param| {
            param
                .resolve()
                .map_err(|_| DescriptorError::UnresolvedOutputType(param.ty.clone()))
        })
        .collect()
}
