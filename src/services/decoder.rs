use crate::domain::{CallError, CallResult, DecodedOutput};
use alloy::dyn_abi::{DynSolType, DynSolValue};
use alloy::primitives::Bytes;

/// Decodes the return data of one successful call against its declared
/// output types.
pub fn decode_output(output_types: &[DynSolType], data: &[u8]) -> CallResult {
    let outputs = DynSolType::Tuple(output_types.to_vec());

    match outputs.abi_decode_params(data) {
        Ok(DynSolValue::Tuple(values)) => Ok(DecodedOutput::from_values(values)),
        Ok(value) => Ok(DecodedOutput::Single(value)),
        Err(err) => Err(CallError::Decode(err.to_string())),
    }
}

/// Shapes one position of an aggregated response. Failed calls keep their
/// raw bytes untouched.
pub fn decode_position(output_types: &[DynSolType], success: bool, data: Bytes) -> CallResult {
    if !success {
        return Err(CallError::Reverted(data));
    }

    decode_output(output_types, &data)
}
