//! Slots RPC Namespace
//!
//! JSON-RPC access to the signer slot registry. Registered as the `slots_*`
//! namespace.

pub mod api;
pub mod types;

pub use api::SlotsApiServer;
pub use types::RegistryStatusResponse;

use crate::constants::SIGNER_SLOTS_CONTRACT_ADDRESS;
use crate::registry::{RegistryError, SignerSlotList, SlotAssignment, StoreConfig};
use crate::service::SharedRegistry;
use alloy_primitives::Address;
use jsonrpsee::types::{
    error::{INTERNAL_ERROR_CODE, INVALID_PARAMS_CODE},
    ErrorObject, ErrorObjectOwned,
};

/// JSON-RPC error code for callers outside the governance gate
pub const PRIVILEGE_DENIED_CODE: i32 = -32001;

impl From<RegistryError> for ErrorObjectOwned {
    fn from(err: RegistryError) -> Self {
        let code = match err {
            RegistryError::CapacityExceeded { .. } => INVALID_PARAMS_CODE,
            RegistryError::PrivilegeDenied { .. } => PRIVILEGE_DENIED_CODE,
            RegistryError::Storage(_) => INTERNAL_ERROR_CODE,
        };
        ErrorObject::owned(code, err.to_string(), None::<()>)
    }
}

/// Implementation of the `slots_*` RPC namespace.
pub struct SlotsRpc {
    registry: SharedRegistry,
}

impl SlotsRpc {
    pub fn new(registry: SharedRegistry) -> Self {
        Self { registry }
    }
}

#[async_trait::async_trait]
impl SlotsApiServer for SlotsRpc {
    async fn set_signer_slots(
        &self,
        caller: Address,
        signer_slots: Vec<SlotAssignment>,
        reward_cycle: u128,
    ) -> jsonrpsee::core::RpcResult<()> {
        Ok(self
            .registry
            .set_signer_slots(caller, signer_slots, reward_cycle)
            .await?)
    }

    async fn get_signer_slots(&self) -> jsonrpsee::core::RpcResult<SignerSlotList> {
        Ok(self.registry.get_signer_slots().await?)
    }

    async fn get_signer_slots_for(
        &self,
        signer: Address,
        reward_cycle: u128,
    ) -> jsonrpsee::core::RpcResult<u128> {
        Ok(self.registry.get_signer_slots_for(signer, reward_cycle).await?)
    }

    async fn get_config(&self) -> jsonrpsee::core::RpcResult<StoreConfig> {
        Ok(self.registry.get_config().await?)
    }

    async fn status(&self) -> jsonrpsee::core::RpcResult<RegistryStatusResponse> {
        let state = self.registry.state().await;
        Ok(RegistryStatusResponse {
            last_set_cycle: state.last_set_cycle,
            signer_count: state.slots.len(),
            total_slots: state.slots.total_slots(),
            registry_contract: SIGNER_SLOTS_CONTRACT_ADDRESS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_GOVERNANCE_ADDRESS;
    use crate::governance::GovernanceAuthorizer;
    use alloy_primitives::address;
    use std::sync::Arc;

    const OUTSIDER: Address = address!("00000000000000000000000000000000000BAD00");

    fn test_rpc() -> SlotsRpc {
        let authorizer = Arc::new(GovernanceAuthorizer::new(DEFAULT_GOVERNANCE_ADDRESS));
        SlotsRpc::new(SharedRegistry::new(authorizer))
    }

    fn sample_slots() -> Vec<SlotAssignment> {
        vec![
            SlotAssignment::new(address!("1111111111111111111111111111111111111111"), 1),
            SlotAssignment::new(address!("2222222222222222222222222222222222222222"), 4),
        ]
    }

    #[tokio::test]
    async fn test_slots_set_and_get() {
        let rpc = test_rpc();
        rpc.set_signer_slots(DEFAULT_GOVERNANCE_ADDRESS, sample_slots(), 21)
            .await
            .unwrap();

        let slots: Vec<_> = rpc.get_signer_slots().await.unwrap().into();
        assert_eq!(slots, sample_slots());

        let status = rpc.status().await.unwrap();
        assert_eq!(status.last_set_cycle, 21);
        assert_eq!(status.signer_count, 2);
        assert_eq!(status.total_slots, 5);
        assert_eq!(status.registry_contract, SIGNER_SLOTS_CONTRACT_ADDRESS);
    }

    #[tokio::test]
    async fn test_slots_get_signer_slots_for_stub() {
        let rpc = test_rpc();
        assert_eq!(rpc.get_signer_slots_for(OUTSIDER, 99).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_slots_get_config() {
        let rpc = test_rpc();
        assert_eq!(rpc.get_config().await.unwrap(), StoreConfig::stackerdb());
    }

    #[tokio::test]
    async fn test_slots_privilege_denied_error_code() {
        let rpc = test_rpc();
        let err = rpc
            .set_signer_slots(OUTSIDER, sample_slots(), 1)
            .await
            .unwrap_err();
        assert_eq!(err.code(), PRIVILEGE_DENIED_CODE);
        assert!(err.message().contains("not authorized"));
    }

    #[tokio::test]
    async fn test_slots_capacity_error_code() {
        let rpc = test_rpc();
        let too_many = vec![SlotAssignment::new(OUTSIDER, 1); 4001];
        let err = rpc
            .set_signer_slots(DEFAULT_GOVERNANCE_ADDRESS, too_many, 1)
            .await
            .unwrap_err();
        assert_eq!(err.code(), INVALID_PARAMS_CODE);
        assert_eq!(rpc.status().await.unwrap().signer_count, 0);
    }

    #[test]
    fn test_storage_error_maps_to_internal_error() {
        let err = ErrorObjectOwned::from(RegistryError::Storage("disk full".into()));
        assert_eq!(err.code(), INTERNAL_ERROR_CODE);
        assert!(err.message().contains("disk full"));
    }

    #[tokio::test]
    async fn test_slots_server_round_trip() {
        use jsonrpsee::core::client::ClientT;
        use jsonrpsee::rpc_params;

        let server = jsonrpsee::server::Server::builder()
            .build("127.0.0.1:0")
            .await
            .unwrap();
        let addr = server.local_addr().unwrap();
        let handle = server.start(test_rpc().into_rpc());

        let client = jsonrpsee::http_client::HttpClientBuilder::default()
            .build(format!("http://{addr}"))
            .unwrap();
        let config: StoreConfig = client
            .request("slots_getConfig", rpc_params![])
            .await
            .unwrap();
        assert_eq!(config.max_writes, u128::MAX);

        let slots: u128 = client
            .request("slots_getSignerSlotsFor", rpc_params![OUTSIDER, 5u64])
            .await
            .unwrap();
        assert_eq!(slots, 1);

        handle.stop().unwrap();
    }
}
