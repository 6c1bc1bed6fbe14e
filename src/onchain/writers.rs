use super::helpers::{encode_address, encode_u128};
use super::readers::{entry_slot, read_slots_length};
use super::slots::signer_slots_layout;
use super::StorageWriter;
use crate::constants::{SIGNER_SLOTS_CONTRACT_ADDRESS, SIGNER_SLOTS_MAX_LEN};
use crate::registry::RegistryState;
use alloy_primitives::B256;

/// Write the full registry state into contract storage.
///
/// Entries left over from a longer previous list are zeroed, so storage never
/// holds words past the current length.
pub fn write_registry_state(writer: &mut (impl StorageWriter + ?Sized), state: &RegistryState) {
    let addr = SIGNER_SLOTS_CONTRACT_ADDRESS;

    // a corrupt length word may hide entries anywhere up to the bound
    let previous_len = match read_slots_length(&*writer) {
        Ok(len) => len.unwrap_or(0),
        Err(_) => SIGNER_SLOTS_MAX_LEN,
    };

    for (i, entry) in state.slots.iter().enumerate() {
        writer.write_storage(
            addr,
            entry_slot(i, signer_slots_layout::SIGNER_OFFSET),
            encode_address(entry.signer),
        );
        writer.write_storage(
            addr,
            entry_slot(i, signer_slots_layout::NUM_SLOTS_OFFSET),
            encode_u128(entry.num_slots),
        );
    }

    for i in state.slots.len()..previous_len {
        writer.write_storage(
            addr,
            entry_slot(i, signer_slots_layout::SIGNER_OFFSET),
            B256::ZERO,
        );
        writer.write_storage(
            addr,
            entry_slot(i, signer_slots_layout::NUM_SLOTS_OFFSET),
            B256::ZERO,
        );
    }

    writer.write_storage(
        addr,
        signer_slots_layout::SLOTS_LENGTH,
        encode_u128(state.slots.len() as u128),
    );
    writer.write_storage(
        addr,
        signer_slots_layout::LAST_SET_CYCLE,
        encode_u128(state.last_set_cycle),
    );
}
