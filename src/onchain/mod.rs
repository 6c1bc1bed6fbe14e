//! On-chain Storage Layout for the Signer Slot Registry
//!
//! Mirrors registry state into contract storage words and reads it back, so a
//! registry can be reopened from whatever storage the host keeps.
//!
//! Layout:
//!   slot 0                      → lastSetCycle
//!   slot 1                      → slots.length
//!   keccak256(1) + 2*i          → slots[i].signer
//!   keccak256(1) + 2*i + 1      → slots[i].numSlots
//!
//! Storage layout must match `slots::signer_slots_layout`.

pub mod file;
pub mod helpers;
pub mod readers;
pub mod slots;
pub mod writers;

pub use file::FileStorage;
pub use helpers::{
    decode_address, decode_u128, dynamic_array_base_slot, encode_address, encode_u128,
};
pub use readers::{entry_slot, read_last_set_cycle, read_registry_state, read_slots_length};
pub use slots::signer_slots_layout;
pub use writers::write_registry_state;

use crate::registry::RegistryError;
use alloy_primitives::{Address, B256, U256};
use std::collections::BTreeMap;

/// Trait for reading contract storage slots.
pub trait StorageReader {
    /// Read a storage slot value from a contract address.
    /// Returns None if the contract or slot doesn't exist.
    fn read_storage(&self, address: Address, slot: U256) -> Option<B256>;
}

/// Trait for writing contract storage slots.
pub trait StorageWriter: StorageReader {
    /// Store `value` at `slot` of `address`, replacing any previous word.
    fn write_storage(&mut self, address: Address, slot: U256, value: B256);

    /// Flush written words to durable storage.
    ///
    /// Stores that live only in memory have nothing to flush.
    fn commit(&mut self) -> Result<(), RegistryError> {
        Ok(())
    }
}

/// In-memory contract storage.
///
/// Zero words are kept as explicit entries, so a slot that was written reads
/// back as `Some` even when cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    storage: BTreeMap<(Address, U256), B256>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored words across all contracts
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl StorageReader for MemoryStorage {
    fn read_storage(&self, address: Address, slot: U256) -> Option<B256> {
        self.storage.get(&(address, slot)).copied()
    }
}

impl StorageWriter for MemoryStorage {
    fn write_storage(&mut self, address: Address, slot: U256, value: B256) {
        self.storage.insert((address, slot), value);
    }
}
