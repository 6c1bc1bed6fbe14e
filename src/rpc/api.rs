use alloy_primitives::Address;
use jsonrpsee::{core::RpcResult, proc_macros::rpc};

use super::types::RegistryStatusResponse;
use crate::registry::{SignerSlotList, SlotAssignment, StoreConfig};

/// The `slots_*` RPC namespace definition.
#[rpc(server, namespace = "slots")]
pub trait SlotsApi {
    /// Replaces the signer slot list for a reward cycle (governance only).
    #[method(name = "setSignerSlots")]
    async fn set_signer_slots(
        &self,
        caller: Address,
        signer_slots: Vec<SlotAssignment>,
        reward_cycle: u128,
    ) -> RpcResult<()>;

    /// Returns the currently stored signer slot list.
    #[method(name = "getSignerSlots")]
    async fn get_signer_slots(&self) -> RpcResult<SignerSlotList>;

    /// Returns the slot count for a signer in a reward cycle.
    #[method(name = "getSignerSlotsFor")]
    async fn get_signer_slots_for(&self, signer: Address, reward_cycle: u128) -> RpcResult<u128>;

    /// Returns the StackerDB configuration.
    #[method(name = "getConfig")]
    async fn get_config(&self) -> RpcResult<StoreConfig>;

    /// Returns the stored cycle and list summary.
    #[method(name = "status")]
    async fn status(&self) -> RpcResult<RegistryStatusResponse>;
}
