//! Shared registry handle.
//!
//! Owns the single registry instance and serializes every call through one
//! `RwLock`: a write holds the lock from the gate check through event dispatch,
//! so no reader observes a half-applied write. A write whose storage commit
//! fails is rolled back in memory and in the mirror before the lock is released.

use alloy_primitives::Address;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::events::{EventDispatcher, RegistryObserver, SlotsUpdated};
use crate::governance::{Authorizer, GatedRegistry};
use crate::onchain::{read_registry_state, write_registry_state, StorageWriter};
use crate::registry::{
    RegistryError, RegistryState, SignerSlotList, SlotAssignment, SlotRegistry, StoreConfig,
};

/// Type-erased authorizer shared with the gate
pub type SharedAuthorizer = Arc<dyn Authorizer>;

/// Contract storage backend the registry state is mirrored into
pub type BoxedStorage = Box<dyn StorageWriter + Send + Sync>;

struct Inner {
    registry: GatedRegistry<SharedAuthorizer>,
    storage: Option<BoxedStorage>,
    events: EventDispatcher,
}

/// Cloneable, thread-safe handle to the signer slot registry.
#[derive(Clone)]
pub struct SharedRegistry {
    inner: Arc<RwLock<Inner>>,
}

impl SharedRegistry {
    /// Create an unset registry with no storage mirror.
    pub fn new(authorizer: SharedAuthorizer) -> Self {
        Self::from_parts(SlotRegistry::new(), authorizer, None)
    }

    /// Open a registry backed by contract storage.
    ///
    /// If the storage already holds registry state it is restored; otherwise the
    /// registry starts unset and the initial state is written out.
    pub fn open(
        authorizer: SharedAuthorizer,
        mut storage: BoxedStorage,
    ) -> Result<Self, RegistryError> {
        let registry = match read_registry_state(&*storage)? {
            Some(state) => {
                info!(
                    target: "slots::registry",
                    last_set_cycle = %state.last_set_cycle,
                    signers = state.slots.len(),
                    "Restored signer slots from storage"
                );
                SlotRegistry::from_state(state)
            }
            None => {
                let registry = SlotRegistry::new();
                write_registry_state(&mut *storage, registry.state());
                storage.commit()?;
                debug!(target: "slots::registry", "Initialized empty signer slot storage");
                registry
            }
        };
        Ok(Self::from_parts(registry, authorizer, Some(storage)))
    }

    fn from_parts(
        registry: SlotRegistry,
        authorizer: SharedAuthorizer,
        storage: Option<BoxedStorage>,
    ) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                registry: GatedRegistry::new(registry, authorizer),
                storage,
                events: EventDispatcher::new(),
            })),
        }
    }

    /// Register an observer for committed writes.
    pub async fn register_observer(&self, observer: Arc<dyn RegistryObserver>) {
        self.inner.write().await.events.register(observer);
    }

    /// Replace the slot list on behalf of `caller`.
    ///
    /// The capacity check runs first, then the authorization gate. Either
    /// failure leaves state, storage and observers untouched. If the storage
    /// commit fails the previous state is restored and no event is sent.
    pub async fn set_signer_slots(
        &self,
        caller: Address,
        signer_slots: Vec<SlotAssignment>,
        reward_cycle: u128,
    ) -> Result<(), RegistryError> {
        let signer_slots = SignerSlotList::try_from(signer_slots).inspect_err(|e| {
            warn!(target: "slots::registry", %caller, %reward_cycle, "Rejected signer slots: {e}");
        })?;

        let mut inner = self.inner.write().await;
        let previous = inner.registry.registry().state().clone();
        let previous_cycle = previous.last_set_cycle;
        let signer_count = signer_slots.len();
        let total_slots = signer_slots.total_slots();

        inner
            .registry
            .set_signer_slots(caller, signer_slots, reward_cycle)
            .inspect_err(|e| {
                warn!(target: "slots::registry", %caller, %reward_cycle, "Rejected signer slots: {e}");
            })?;

        let Inner {
            registry,
            storage,
            events,
        } = &mut *inner;
        if let Some(storage) = storage.as_mut() {
            write_registry_state(&mut **storage, registry.registry().state());
            if let Err(e) = storage.commit() {
                error!(
                    target: "slots::registry",
                    %caller,
                    %reward_cycle,
                    "Failed to persist signer slots: {e}"
                );
                write_registry_state(&mut **storage, &previous);
                registry.set_signer_slots(caller, previous.slots, previous.last_set_cycle)?;
                return Err(e);
            }
        }

        if reward_cycle < previous_cycle {
            debug!(
                target: "slots::registry",
                %previous_cycle,
                %reward_cycle,
                "Signer slots set for an earlier reward cycle"
            );
        }
        info!(
            target: "slots::registry",
            %caller,
            %reward_cycle,
            signers = signer_count,
            %total_slots,
            "Signer slots updated"
        );

        events.dispatch(&SlotsUpdated {
            reward_cycle,
            previous_cycle,
            signer_count,
            total_slots,
        });
        Ok(())
    }

    pub async fn get_signer_slots(&self) -> Result<SignerSlotList, RegistryError> {
        self.inner.read().await.registry.get_signer_slots()
    }

    pub async fn get_signer_slots_for(
        &self,
        signer: Address,
        reward_cycle: u128,
    ) -> Result<u128, RegistryError> {
        self.inner
            .read()
            .await
            .registry
            .get_signer_slots_for(signer, reward_cycle)
    }

    pub async fn get_config(&self) -> Result<StoreConfig, RegistryError> {
        self.inner.read().await.registry.get_config()
    }

    /// Reward cycle of the most recent successful write.
    pub async fn last_set_cycle(&self) -> u128 {
        self.inner.read().await.registry.registry().last_set_cycle()
    }

    /// Snapshot of the in-memory state.
    pub async fn state(&self) -> RegistryState {
        self.inner.read().await.registry.registry().state().clone()
    }

    /// State as currently persisted in the storage mirror, if there is one.
    pub async fn stored_state(&self) -> Result<Option<RegistryState>, RegistryError> {
        match self.inner.read().await.storage.as_ref() {
            Some(storage) => read_registry_state(&**storage),
            None => Ok(None),
        }
    }
}
