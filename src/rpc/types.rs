use alloy_primitives::Address;
use serde::Serialize;

/// Response for `slots_status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryStatusResponse {
    pub last_set_cycle: u128,
    pub signer_count: usize,
    pub total_slots: u128,
    pub registry_contract: Address,
}
