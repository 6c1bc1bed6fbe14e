/// Signer slot registry contract storage layout.
///
/// Each list entry is two consecutive words starting at
/// `keccak256(abi.encode(SLOTS_LENGTH)) + ENTRY_WORDS * index`.
pub mod signer_slots_layout {
    use alloy_primitives::U256;

    /// slot 0: lastSetCycle (uint)
    pub const LAST_SET_CYCLE: U256 = U256::from_limbs([0, 0, 0, 0]);
    /// slot 1: slots.length (dynamic array length)
    pub const SLOTS_LENGTH: U256 = U256::from_limbs([1, 0, 0, 0]);
    /// Words per entry: signer (address), numSlots (uint)
    pub const ENTRY_WORDS: u64 = 2;
    /// Entry word offset of the signer address
    pub const SIGNER_OFFSET: u64 = 0;
    /// Entry word offset of the slot count
    pub const NUM_SLOTS_OFFSET: u64 = 1;
}
