//! Governance gate for the signer slot registry.
//!
//! The registry core never checks who is calling. Access control is composed in
//! front of it:
//!
//! ```text
//!   caller → GatedRegistry (Authorizer::authorize) → SlotRegistry::set_signer_slots
//! ```
//!
//! Reads pass straight through.

use alloy_primitives::Address;
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::registry::{RegistryError, SignerSlotList, SlotRegistry, StoreConfig};

/// Decides whether a caller may mutate the registry.
pub trait Authorizer: Send + Sync {
    /// Returns true if `caller` is allowed to set signer slots.
    fn authorize(&self, caller: Address) -> bool;
}

impl<A: Authorizer + ?Sized> Authorizer for Arc<A> {
    fn authorize(&self, caller: Address) -> bool {
        (**self).authorize(caller)
    }
}

/// Only the governance principal may write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GovernanceAuthorizer {
    governance: Address,
}

impl GovernanceAuthorizer {
    pub fn new(governance: Address) -> Self {
        Self { governance }
    }
}

impl Authorizer for GovernanceAuthorizer {
    fn authorize(&self, caller: Address) -> bool {
        caller == self.governance
    }
}

/// Any principal in a fixed set may write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowListAuthorizer {
    allowed: BTreeSet<Address>,
}

impl AllowListAuthorizer {
    pub fn new(allowed: impl IntoIterator<Item = Address>) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
        }
    }
}

impl Authorizer for AllowListAuthorizer {
    fn authorize(&self, caller: Address) -> bool {
        self.allowed.contains(&caller)
    }
}

/// [`SlotRegistry`] with an authorization check in front of the mutator.
#[derive(Debug, Clone)]
pub struct GatedRegistry<A> {
    registry: SlotRegistry,
    authorizer: A,
}

impl<A: Authorizer> GatedRegistry<A> {
    pub fn new(registry: SlotRegistry, authorizer: A) -> Self {
        Self {
            registry,
            authorizer,
        }
    }

    /// Set the slot list on behalf of `caller`.
    ///
    /// Unauthorized callers get [`RegistryError::PrivilegeDenied`] and the
    /// stored state is left untouched.
    pub fn set_signer_slots(
        &mut self,
        caller: Address,
        signer_slots: SignerSlotList,
        reward_cycle: u128,
    ) -> Result<(), RegistryError> {
        if !self.authorizer.authorize(caller) {
            return Err(RegistryError::PrivilegeDenied { caller });
        }
        self.registry.set_signer_slots(signer_slots, reward_cycle)
    }

    pub fn get_signer_slots(&self) -> Result<SignerSlotList, RegistryError> {
        self.registry.get_signer_slots()
    }

    pub fn get_signer_slots_for(
        &self,
        signer: Address,
        reward_cycle: u128,
    ) -> Result<u128, RegistryError> {
        self.registry.get_signer_slots_for(signer, reward_cycle)
    }

    pub fn get_config(&self) -> Result<StoreConfig, RegistryError> {
        self.registry.get_config()
    }

    /// The wrapped registry, read-only
    pub fn registry(&self) -> &SlotRegistry {
        &self.registry
    }
}
