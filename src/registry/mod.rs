//! Signer Slot Registry
//!
//! Tracks which signers hold write slots in the signer StackerDB and the reward
//! cycle the current assignment list was set for, and serves the constant store
//! configuration.
//!
//! Writes replace the whole list at once:
//!   set_signer_slots([...], cycle)
//!   ↓
//!   last_set_cycle = cycle, slots = [...]   (both or neither)
//!
//! The registry itself performs no access control and no validation beyond the
//! list capacity. Callers are gated by [`crate::governance::GatedRegistry`].

pub mod config;
pub mod errors;
pub mod types;

pub use config::StoreConfig;
pub use errors::RegistryError;
pub use types::{RegistryState, SignerSlotList, SlotAssignment};

use alloy_primitives::Address;

/// Slot count reported by [`SlotRegistry::get_signer_slots_for`] for every signer.
pub const DEFAULT_SIGNER_SLOTS: u128 = 1;

/// Single-instance registry state plus its operations.
#[derive(Debug, Clone, Default)]
pub struct SlotRegistry {
    state: RegistryState,
}

impl SlotRegistry {
    /// Create a registry in the unset state (cycle 0, no slots).
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a registry from a previously captured state.
    pub fn from_state(state: RegistryState) -> Self {
        Self { state }
    }

    /// Replace the stored slot list and cycle.
    ///
    /// The list length bound is carried by [`SignerSlotList`]. Nothing else is
    /// checked: the cycle may go backwards, signers may repeat and slot counts
    /// may be any value. Validation of those belongs to the caller.
    pub fn set_signer_slots(
        &mut self,
        signer_slots: SignerSlotList,
        reward_cycle: u128,
    ) -> Result<(), RegistryError> {
        self.state = RegistryState {
            last_set_cycle: reward_cycle,
            slots: signer_slots,
        };
        Ok(())
    }

    /// Same as [`Self::set_signer_slots`] for an unchecked vector.
    ///
    /// Fails with [`RegistryError::CapacityExceeded`] before touching state.
    pub fn try_set_signer_slots(
        &mut self,
        signer_slots: Vec<SlotAssignment>,
        reward_cycle: u128,
    ) -> Result<(), RegistryError> {
        let signer_slots = SignerSlotList::try_from(signer_slots)?;
        self.set_signer_slots(signer_slots, reward_cycle)
    }

    /// Currently stored assignments.
    pub fn get_signer_slots(&self) -> Result<SignerSlotList, RegistryError> {
        Ok(self.state.slots.clone())
    }

    /// Slot count for `signer` in `reward_cycle`.
    ///
    /// Always [`DEFAULT_SIGNER_SLOTS`]; the stored list is not consulted.
    pub fn get_signer_slots_for(
        &self,
        _signer: Address,
        _reward_cycle: u128,
    ) -> Result<u128, RegistryError> {
        Ok(DEFAULT_SIGNER_SLOTS)
    }

    /// The StackerDB configuration.
    pub fn get_config(&self) -> Result<StoreConfig, RegistryError> {
        Ok(StoreConfig::stackerdb())
    }

    /// Reward cycle of the most recent successful write (0 if never set).
    pub fn last_set_cycle(&self) -> u128 {
        self.state.last_set_cycle
    }

    /// Snapshot of the full state.
    pub fn state(&self) -> &RegistryState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SIGNER_SLOTS_MAX_LEN;

    fn signer(n: u64) -> Address {
        let mut bytes = [0u8; 20];
        bytes[12..20].copy_from_slice(&n.to_be_bytes());
        Address::from(bytes)
    }

    fn assignments(count: usize) -> Vec<SlotAssignment> {
        (0..count)
            .map(|i| SlotAssignment::new(signer(i as u64 + 1), (i % 13) as u128 + 1))
            .collect()
    }

    fn expected_config() -> StoreConfig {
        StoreConfig {
            chunk_size: 2_097_152,
            write_freq: 0,
            max_writes: u128::MAX,
            max_neighbors: 32,
            hint_replicas: vec![],
        }
    }

    // =========================================================================
    // Initial state
    // =========================================================================

    #[test]
    fn test_new_registry_is_unset() {
        let registry = SlotRegistry::new();
        assert!(registry.get_signer_slots().unwrap().is_empty());
        assert_eq!(registry.last_set_cycle(), 0);
        assert_eq!(registry.state(), &RegistryState::default());
    }

    // =========================================================================
    // set_signer_slots
    // =========================================================================

    #[test]
    fn test_set_then_get_round_trip() {
        let mut registry = SlotRegistry::new();
        let list = SignerSlotList::try_from(assignments(5)).unwrap();

        registry.set_signer_slots(list.clone(), 7).unwrap();

        assert_eq!(registry.get_signer_slots().unwrap(), list);
        assert_eq!(registry.last_set_cycle(), 7);
    }

    #[test]
    fn test_set_preserves_insertion_order() {
        let mut registry = SlotRegistry::new();
        let list = vec![
            SlotAssignment::new(signer(3), 1),
            SlotAssignment::new(signer(1), 2),
            SlotAssignment::new(signer(2), 3),
        ];

        registry.try_set_signer_slots(list.clone(), 1).unwrap();

        let stored: Vec<_> = registry.get_signer_slots().unwrap().into();
        assert_eq!(stored, list);
    }

    #[test]
    fn test_set_accepts_duplicate_signers_and_zero_slots() {
        let mut registry = SlotRegistry::new();
        let list = vec![
            SlotAssignment::new(signer(1), 0),
            SlotAssignment::new(signer(1), u128::MAX),
        ];

        assert!(registry.try_set_signer_slots(list.clone(), 2).is_ok());
        assert_eq!(registry.get_signer_slots().unwrap().len(), 2);
    }

    #[test]
    fn test_set_replaces_whole_list() {
        let mut registry = SlotRegistry::new();
        registry.try_set_signer_slots(assignments(10), 1).unwrap();
        registry.try_set_signer_slots(assignments(2), 2).unwrap();

        assert_eq!(registry.get_signer_slots().unwrap().len(), 2);
        assert_eq!(registry.last_set_cycle(), 2);
    }

    #[test]
    fn test_set_with_earlier_cycle_overwrites() {
        let mut registry = SlotRegistry::new();
        registry.try_set_signer_slots(assignments(3), 100).unwrap();

        let older = assignments(1);
        registry.try_set_signer_slots(older.clone(), 42).unwrap();

        assert_eq!(registry.last_set_cycle(), 42);
        let stored: Vec<_> = registry.get_signer_slots().unwrap().into();
        assert_eq!(stored, older);
    }

    #[test]
    fn test_set_empty_list_after_nonempty() {
        let mut registry = SlotRegistry::new();
        registry.try_set_signer_slots(assignments(3), 5).unwrap();
        registry.set_signer_slots(SignerSlotList::new(), 6).unwrap();

        assert!(registry.get_signer_slots().unwrap().is_empty());
        assert_eq!(registry.last_set_cycle(), 6);
    }

    // =========================================================================
    // Capacity boundary
    // =========================================================================

    #[test]
    fn test_exactly_max_entries_accepted() {
        let mut registry = SlotRegistry::new();
        registry
            .try_set_signer_slots(assignments(SIGNER_SLOTS_MAX_LEN), 3)
            .unwrap();
        assert_eq!(
            registry.get_signer_slots().unwrap().len(),
            SIGNER_SLOTS_MAX_LEN
        );
    }

    #[test]
    fn test_over_capacity_rejected_and_state_unchanged() {
        let mut registry = SlotRegistry::new();
        registry.try_set_signer_slots(assignments(4), 9).unwrap();
        let before = registry.state().clone();

        let err = registry
            .try_set_signer_slots(assignments(SIGNER_SLOTS_MAX_LEN + 1), 10)
            .unwrap_err();

        assert_eq!(
            err,
            RegistryError::CapacityExceeded {
                len: 4001,
                max: 4000
            }
        );
        assert_eq!(registry.state(), &before);
    }

    #[test]
    fn test_try_push_stops_at_capacity() {
        let mut list = SignerSlotList::try_from(assignments(SIGNER_SLOTS_MAX_LEN)).unwrap();
        let err = list
            .try_push(SlotAssignment::new(signer(9999), 1))
            .unwrap_err();
        assert!(matches!(err, RegistryError::CapacityExceeded { len: 4001, .. }));
        assert_eq!(list.len(), SIGNER_SLOTS_MAX_LEN);
    }

    #[test]
    fn test_deserialize_rejects_over_capacity() {
        let raw = serde_json::to_string(&assignments(SIGNER_SLOTS_MAX_LEN + 1)).unwrap();
        assert!(serde_json::from_str::<SignerSlotList>(&raw).is_err());

        let raw = serde_json::to_string(&assignments(3)).unwrap();
        let list: SignerSlotList = serde_json::from_str(&raw).unwrap();
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_total_slots_saturates() {
        let list = SignerSlotList::try_from(vec![
            SlotAssignment::new(signer(1), u128::MAX),
            SlotAssignment::new(signer(2), 5),
        ])
        .unwrap();
        assert_eq!(list.total_slots(), u128::MAX);
    }

    // =========================================================================
    // Read-only queries
    // =========================================================================

    #[test]
    fn test_get_signer_slots_for_is_constant() {
        let mut registry = SlotRegistry::new();
        assert_eq!(registry.get_signer_slots_for(signer(1), 0).unwrap(), 1);

        registry
            .try_set_signer_slots(vec![SlotAssignment::new(signer(1), 17)], 4)
            .unwrap();

        assert_eq!(registry.get_signer_slots_for(signer(1), 4).unwrap(), 1);
        assert_eq!(registry.get_signer_slots_for(signer(2), 4).unwrap(), 1);
        assert_eq!(
            registry.get_signer_slots_for(Address::ZERO, u128::MAX).unwrap(),
            1
        );
    }

    #[test]
    fn test_config_constant_values() {
        let registry = SlotRegistry::new();
        assert_eq!(registry.get_config().unwrap(), expected_config());
    }

    #[test]
    fn test_config_unaffected_by_writes() {
        let mut registry = SlotRegistry::new();
        for cycle in [5u128, 1, 1000, 0] {
            registry
                .try_set_signer_slots(assignments((cycle % 7) as usize), cycle)
                .unwrap();
            assert_eq!(registry.get_config().unwrap(), expected_config());
        }
    }

    #[test]
    fn test_from_state_restores() {
        let state = RegistryState {
            last_set_cycle: 12,
            slots: SignerSlotList::try_from(assignments(2)).unwrap(),
        };
        let registry = SlotRegistry::from_state(state.clone());
        assert_eq!(registry.state(), &state);
        assert_eq!(registry.last_set_cycle(), 12);
    }

    #[test]
    fn test_config_serializes_camel_case() {
        let json = serde_json::to_string(&StoreConfig::stackerdb()).unwrap();
        assert_eq!(
            json,
            r#"{"chunkSize":2097152,"writeFreq":0,"maxWrites":340282366920938463463374607431768211455,"maxNeighbors":32,"hintReplicas":[]}"#
        );
        let parsed: StoreConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, expected_config());
    }
}
