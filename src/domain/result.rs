use alloy::dyn_abi::DynSolValue;
use alloy::primitives::Bytes;
use alloy::sol_types::decode_revert_reason;
use thiserror::Error;

/// Outcome of one position in a batch, aligned with the submitted call.
pub type CallResult = Result<DecodedOutput, CallError>;

/// Decoded return values of a successful call.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedOutput {
    /// The call declared exactly one output.
    Single(DynSolValue),
    /// Zero or several outputs, in declaration order.
    Multiple(Vec<DynSolValue>),
}

impl DecodedOutput {
    pub fn from_values(mut values: Vec<DynSolValue>) -> Self {
        if values.len() == 1 {
            if let Some(value) = values.pop() {
                return DecodedOutput::Single(value);
            }
        }
        DecodedOutput::Multiple(values)
    }

    pub fn as_single(&self) -> Option<&DynSolValue> {
        match self {
            DecodedOutput::Single(value) => Some(value),
            DecodedOutput::Multiple(_) => None,
        }
    }

    pub fn into_values(self) -> Vec<DynSolValue> {
        match self {
            DecodedOutput::Single(value) => vec![value],
            DecodedOutput::Multiple(values) => values,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    /// The aggregator reported the sub-call as failed. Holds its raw return data.
    #[error("Call reverted: {0}")]
    Reverted(Bytes),

    #[error("Data handling error: {0}")]
    Decode(String),
}

impl CallError {
    /// Human readable reason for a reverted call, when the payload is a
    /// standard `Error(string)` or `Panic(uint256)`.
    pub fn revert_reason(&self) -> Option<String> {
        match self {
            CallError::Reverted(data) => decode_revert_reason(data),
            CallError::Decode(_) => None,
        }
    }
}
