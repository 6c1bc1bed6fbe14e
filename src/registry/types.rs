use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

use super::errors::RegistryError;
use crate::constants::SIGNER_SLOTS_MAX_LEN;

/// One signer's write-slot allotment for the currently stored reward cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotAssignment {
    /// Signer principal
    pub signer: Address,
    /// Number of StackerDB write slots
    pub num_slots: u128,
}

impl SlotAssignment {
    /// Create a new assignment
    pub const fn new(signer: Address, num_slots: u128) -> Self {
        Self { signer, num_slots }
    }
}

/// Ordered list of slot assignments, bounded at [`SIGNER_SLOTS_MAX_LEN`] entries.
///
/// Every constructor checks the bound, so a value of this type never holds more
/// than the maximum. Deserialization goes through the same check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SlotAssignment>", into = "Vec<SlotAssignment>")]
pub struct SignerSlotList(Vec<SlotAssignment>);

impl SignerSlotList {
    /// Maximum number of entries
    pub const MAX_LEN: usize = SIGNER_SLOTS_MAX_LEN;

    /// Create an empty list
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append an assignment, failing if the list is already full.
    pub fn try_push(&mut self, assignment: SlotAssignment) -> Result<(), RegistryError> {
        if self.0.len() >= Self::MAX_LEN {
            return Err(RegistryError::CapacityExceeded {
                len: self.0.len() + 1,
                max: Self::MAX_LEN,
            });
        }
        self.0.push(assignment);
        Ok(())
    }

    /// Sum of all `num_slots` values, saturating at `u128::MAX`.
    pub fn total_slots(&self) -> u128 {
        self.0
            .iter()
            .fold(0u128, |acc, a| acc.saturating_add(a.num_slots))
    }
}

impl Deref for SignerSlotList {
    type Target = [SlotAssignment];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<Vec<SlotAssignment>> for SignerSlotList {
    type Error = RegistryError;

    fn try_from(assignments: Vec<SlotAssignment>) -> Result<Self, Self::Error> {
        if assignments.len() > Self::MAX_LEN {
            return Err(RegistryError::CapacityExceeded {
                len: assignments.len(),
                max: Self::MAX_LEN,
            });
        }
        Ok(Self(assignments))
    }
}

impl From<SignerSlotList> for Vec<SlotAssignment> {
    fn from(list: SignerSlotList) -> Self {
        list.0
    }
}

impl<'a> IntoIterator for &'a SignerSlotList {
    type Item = &'a SlotAssignment;
    type IntoIter = std::slice::Iter<'a, SlotAssignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Registry state: the stored slot list and the cycle it was last set for.
///
/// Starts as `last_set_cycle = 0` with an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryState {
    /// Reward cycle passed to the most recent successful write
    pub last_set_cycle: u128,
    /// Currently stored assignments
    pub slots: SignerSlotList,
}
