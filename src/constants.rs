use alloy_primitives::{address, Address};

/// Maximum number of entries a signer slot list may hold
pub const SIGNER_SLOTS_MAX_LEN: usize = 4000;
/// StackerDB chunk size in bytes (2 MiB)
pub const STACKERDB_CHUNK_SIZE: u128 = 2 * 1024 * 1024;
/// Minimum interval between writes to a slot (0 = unlimited)
pub const STACKERDB_WRITE_FREQ: u128 = 0;
/// Maximum number of writes per slot
pub const STACKERDB_MAX_WRITES: u128 = u128::MAX;
/// Maximum number of replica neighbors a node keeps for the store
pub const STACKERDB_MAX_NEIGHBORS: u128 = 32;

/// Signer slot registry contract address (deterministic, pre-assigned)
pub const SIGNER_SLOTS_CONTRACT_ADDRESS: Address =
    address!("00000000000000000000000000000000516E5100");

/// Default governance principal allowed to set signer slots.
/// Deployments are expected to override this with `--governance`.
pub const DEFAULT_GOVERNANCE_ADDRESS: Address =
    address!("000000000000000000000000000000006F5AFE00");

/// Default JSON-RPC listen port
pub const DEFAULT_RPC_PORT: u16 = 20445;
