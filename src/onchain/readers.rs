use super::helpers::{decode_address, decode_u128, dynamic_array_base_slot};
use super::slots::signer_slots_layout;
use super::StorageReader;
use crate::constants::{SIGNER_SLOTS_CONTRACT_ADDRESS, SIGNER_SLOTS_MAX_LEN};
use crate::registry::{RegistryError, RegistryState, SignerSlotList, SlotAssignment};
use alloy_primitives::{B256, U256};

/// Storage slot of the word at `offset` within list entry `index`.
pub fn entry_slot(index: usize, offset: u64) -> U256 {
    let base = dynamic_array_base_slot(signer_slots_layout::SLOTS_LENGTH);
    base + U256::from(index as u64 * signer_slots_layout::ENTRY_WORDS + offset)
}

/// Decode a uint word, rejecting values wider than 128 bits.
fn checked_u128(slot: U256, value: B256) -> Result<u128, RegistryError> {
    decode_u128(value)
        .ok_or_else(|| RegistryError::Storage(format!("word at slot {slot} exceeds 128 bits")))
}

/// Read just the last set cycle.
pub fn read_last_set_cycle(
    reader: &(impl StorageReader + ?Sized),
) -> Result<Option<u128>, RegistryError> {
    let slot = signer_slots_layout::LAST_SET_CYCLE;
    reader
        .read_storage(SIGNER_SLOTS_CONTRACT_ADDRESS, slot)
        .map(|value| checked_u128(slot, value))
        .transpose()
}

/// Read just the stored list length.
///
/// The full 256-bit word is compared against the list bound, so a length
/// above [`SIGNER_SLOTS_MAX_LEN`] is rejected no matter which bytes are set.
pub fn read_slots_length(
    reader: &(impl StorageReader + ?Sized),
) -> Result<Option<usize>, RegistryError> {
    let Some(value) = reader.read_storage(
        SIGNER_SLOTS_CONTRACT_ADDRESS,
        signer_slots_layout::SLOTS_LENGTH,
    ) else {
        return Ok(None);
    };

    let length = U256::from_be_bytes(value.0);
    if length > U256::from(SIGNER_SLOTS_MAX_LEN) {
        let len = if length.bit_len() > 64 {
            usize::MAX
        } else {
            usize::try_from(length.as_limbs()[0]).unwrap_or(usize::MAX)
        };
        return Err(RegistryError::CapacityExceeded {
            len,
            max: SIGNER_SLOTS_MAX_LEN,
        });
    }
    Ok(Some(length.as_limbs()[0] as usize))
}

/// Read the full registry state from contract storage.
///
/// Returns `Ok(None)` if the contract has never been written (cycle or length
/// word missing). Entry words that are missing read as zero. Cycle and slot
/// count words wider than 128 bits are rejected as a storage error.
pub fn read_registry_state(
    reader: &(impl StorageReader + ?Sized),
) -> Result<Option<RegistryState>, RegistryError> {
    let Some(last_set_cycle) = read_last_set_cycle(reader)? else {
        return Ok(None);
    };
    let Some(length) = read_slots_length(reader)? else {
        return Ok(None);
    };

    let addr = SIGNER_SLOTS_CONTRACT_ADDRESS;
    let mut slots = SignerSlotList::new();
    for i in 0..length {
        let signer = reader
            .read_storage(addr, entry_slot(i, signer_slots_layout::SIGNER_OFFSET))
            .unwrap_or(B256::ZERO);
        let num_slots_slot = entry_slot(i, signer_slots_layout::NUM_SLOTS_OFFSET);
        let num_slots = reader
            .read_storage(addr, num_slots_slot)
            .unwrap_or(B256::ZERO);
        slots.try_push(SlotAssignment::new(
            decode_address(signer),
            checked_u128(num_slots_slot, num_slots)?,
        ))?;
    }

    Ok(Some(RegistryState {
        last_set_cycle,
        slots,
    }))
}
