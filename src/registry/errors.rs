use alloy_primitives::Address;
use thiserror::Error;

/// Errors returned by signer slot registry operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A slot list would exceed the maximum number of entries
    #[error("Signer slot list has {len} entries, maximum is {max}")]
    CapacityExceeded {
        /// Attempted list length
        len: usize,
        /// Maximum permitted length
        max: usize,
    },

    /// Caller is not allowed to mutate the registry
    #[error("Caller {caller} is not authorized to set signer slots")]
    PrivilegeDenied {
        /// The rejected caller
        caller: Address,
    },

    /// Contract storage holds an invalid word or could not be persisted
    #[error("Signer slot storage error: {0}")]
    Storage(String),
}
