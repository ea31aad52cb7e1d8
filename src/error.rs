//! Error kinds for delta application.
//!
//! Diffing never fails — `diff` always produces *some* valid delta or `None`.
//! Only `patch`/`unpatch` can reject malformed input, and only for the two
//! reasons the format allows: a delta shape that doesn't match any of the
//! encodings in the wire format, or the reserved-but-unsupported text-diff
//! operation code.

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum DeltaError {
    #[error("invalid delta: {reason}")]
    InvalidDelta { reason: String },

    #[error("text diff (operation code 2) is not supported")]
    UnsupportedOperation,
}

impl DeltaError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        DeltaError::InvalidDelta {
            reason: reason.into(),
        }
    }
}
