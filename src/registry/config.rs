use serde::{Deserialize, Serialize};

use crate::constants::{
    STACKERDB_CHUNK_SIZE, STACKERDB_MAX_NEIGHBORS, STACKERDB_MAX_WRITES, STACKERDB_WRITE_FREQ,
};

/// StackerDB configuration served by the registry.
///
/// Constant data. It does not depend on, or change with, the stored slot list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Maximum chunk size in bytes
    pub chunk_size: u128,
    /// Minimum write interval (0 = unlimited)
    pub write_freq: u128,
    /// Maximum writes per slot
    pub max_writes: u128,
    /// Maximum number of replica neighbors
    pub max_neighbors: u128,
    /// Replica addresses to contact first (always empty)
    pub hint_replicas: Vec<String>,
}

impl StoreConfig {
    /// The signer StackerDB configuration.
    pub fn stackerdb() -> Self {
        Self {
            chunk_size: STACKERDB_CHUNK_SIZE,
            write_freq: STACKERDB_WRITE_FREQ,
            max_writes: STACKERDB_MAX_WRITES,
            max_neighbors: STACKERDB_MAX_NEIGHBORS,
            hint_replicas: vec![],
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::stackerdb()
    }
}
