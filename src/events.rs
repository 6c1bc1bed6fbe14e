//! Registry change notifications.
//!
//! Every committed `set_signer_slots` produces one [`SlotsUpdated`] event that is
//! handed to each registered [`RegistryObserver`]. Rejected writes produce nothing.

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Emitted after the slot list has been replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotsUpdated {
    /// Cycle passed to the write
    pub reward_cycle: u128,
    /// Cycle stored before the write
    pub previous_cycle: u128,
    /// Number of entries in the new list
    pub signer_count: usize,
    /// Sum of slots across the new list
    pub total_slots: u128,
}

/// Receives registry change notifications.
pub trait RegistryObserver: Send + Sync {
    fn on_slots_updated(&self, event: &SlotsUpdated);
}

/// Forwards events into a tokio channel.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    sender: mpsc::UnboundedSender<SlotsUpdated>,
}

impl ChannelObserver {
    /// Create an observer and the receiving half of its channel.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<SlotsUpdated>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl RegistryObserver for ChannelObserver {
    fn on_slots_updated(&self, event: &SlotsUpdated) {
        // receiver gone means nobody is listening anymore
        let _ = self.sender.send(event.clone());
    }
}

/// Fans events out to all registered observers in registration order.
#[derive(Default)]
pub struct EventDispatcher {
    observers: Vec<Arc<dyn RegistryObserver>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, observer: Arc<dyn RegistryObserver>) {
        self.observers.push(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn dispatch(&self, event: &SlotsUpdated) {
        for observer in &self.observers {
            observer.on_slots_updated(event);
        }
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("observers", &self.observers.len())
            .finish()
    }
}
