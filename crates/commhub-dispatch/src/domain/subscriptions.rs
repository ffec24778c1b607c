//! Subscriber registry.
//!
//! Registrations are bookkeeping only: nothing in the dispatcher reads them,
//! and no callback is ever invoked.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use commhub_core::event::EventType;

/// Registry key for a subscriber's event type.
///
/// Known event types fold onto their wire name, so `order-created` and
/// `ORDER_CREATED` share one list. Any other string is kept verbatim.
#[must_use]
pub fn registry_key(event_type: &str) -> String {
    event_type
        .parse::<EventType>()
        .map_or_else(|_| event_type.to_owned(), |t| t.as_str().to_owned())
}

/// Callback addresses registered per event type, in registration order.
#[derive(Debug, Default)]
pub struct SubscriberRegistry {
    callbacks: RwLock<BTreeMap<String, Vec<String>>>,
}

impl SubscriberRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `callback_url` to the list for `event_type`. Duplicates are kept.
    pub fn register(&self, event_type: &str, callback_url: impl Into<String>) {
        self.callbacks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(registry_key(event_type))
            .or_default()
            .push(callback_url.into());
    }

    /// Callback addresses for `event_type`, in registration order.
    #[must_use]
    pub fn subscribers(&self, event_type: &str) -> Vec<String> {
        self.callbacks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&registry_key(event_type))
            .cloned()
            .unwrap_or_default()
    }

    /// Number of event types with at least one registration.
    #[must_use]
    pub fn event_type_count(&self) -> usize {
        self.callbacks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Total number of registrations across all event types.
    #[must_use]
    pub fn registration_count(&self) -> usize {
        self.callbacks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .map(Vec::len)
            .sum()
    }
}
