use alloy_primitives::{Address, Keccak256, B256, U256};

/// Compute the base slot for a dynamic array's data.
///
/// For the slot list whose length lives at slot 1:
///   base = keccak256(abi.encode(1))
///   entry i lives at base + ENTRY_WORDS * i
pub fn dynamic_array_base_slot(array_slot: U256) -> U256 {
    let mut hasher = Keccak256::new();
    hasher.update(B256::from(array_slot.to_be_bytes()).as_slice());
    U256::from_be_bytes(hasher.finalize().0)
}

/// Decode an address from a B256 storage value (left-padded with zeros).
pub fn decode_address(value: B256) -> Address {
    Address::from_slice(&value[12..32])
}

/// Encode an address into a B256 storage value (left-padded).
pub fn encode_address(addr: Address) -> B256 {
    let mut bytes = [0u8; 32];
    bytes[12..32].copy_from_slice(addr.as_slice());
    B256::from(bytes)
}

/// Decode a u128 from a B256 storage value.
/// Returns None if the word does not fit in 128 bits.
pub fn decode_u128(value: B256) -> Option<u128> {
    let word = U256::from_be_bytes(value.0);
    if word > U256::from(u128::MAX) {
        return None;
    }
    let limbs = word.as_limbs();
    Some((u128::from(limbs[1]) << 64) | u128::from(limbs[0]))
}

/// Encode a u128 value into a B256 storage value.
pub fn encode_u128(value: u128) -> B256 {
    B256::from(U256::from(value).to_be_bytes())
}
