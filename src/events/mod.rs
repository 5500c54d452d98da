//! Trigger event subscriptions.
//!
//! The controller registers interest in named trigger events through an
//! [`EventSource`]. The host delivers each event occurrence to the
//! controller, which asks the source whether its subscription covers it.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::Result;

/// Handle of a registered subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// The raw numeric id.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Host capability for registering interest in trigger events.
pub trait EventSource {
    /// Register interest in `events`.
    fn subscribe(&mut self, events: &[String]) -> Result<SubscriptionId>;

    /// Remove a subscription. Unknown ids are ignored.
    fn unsubscribe(&mut self, id: SubscriptionId);

    /// Whether subscription `id` is registered and covers `event`.
    fn is_subscribed(&self, id: SubscriptionId, event: &str) -> bool;
}

/// In-process event source.
///
/// Used by `autosession attach` and as the test double for the controller.
#[derive(Debug, Default)]
pub struct EventRegistry {
    next_id: u64,
    subscriptions: BTreeMap<SubscriptionId, Vec<String>>,
}

impl EventRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered subscriptions.
    pub fn active_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Subscriptions covering `event`, in registration order.
    pub fn subscribers(&self, event: &str) -> Vec<SubscriptionId> {
        self.subscriptions
            .iter()
            .filter(|(_, events)| events.iter().any(|e| e == event))
            .map(|(id, _)| *id)
            .collect()
    }
}

impl EventSource for EventRegistry {
    fn subscribe(&mut self, events: &[String]) -> Result<SubscriptionId> {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.subscriptions.insert(id, events.to_vec());
        tracing::debug!("Subscribed {} to [{}]", id, events.join(", "));
        Ok(id)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        if self.subscriptions.remove(&id).is_some() {
            tracing::debug!("Unsubscribed {}", id);
        }
    }

    fn is_subscribed(&self, id: SubscriptionId, event: &str) -> bool {
        self.subscriptions
            .get(&id)
            .is_some_and(|events| events.iter().any(|e| e == event))
    }
}
