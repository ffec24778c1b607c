//! Query handlers for the dispatch context.
//!
//! Read-only views over the event log and the subscriber registry.

use commhub_core::event::{Event, OrderId};
use commhub_core::log::EventLog;
use serde::Serialize;

use crate::domain::subscriptions::{SubscriberRegistry, registry_key};

/// Number of events returned by the history view when no limit is given.
pub const DEFAULT_RECENT_EVENTS: usize = 20;

/// The most recent slice of the event log.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventHistoryView {
    /// Number of events recorded since startup.
    pub total_events: usize,
    /// The trailing events, oldest first.
    pub events: Vec<Event>,
}

/// All events recorded for one order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderEventsView {
    /// The order asked about.
    pub order_id: OrderId,
    /// Number of matching events.
    pub event_count: usize,
    /// Matching events, in insertion order.
    pub events: Vec<Event>,
}

/// Callback addresses registered for one event type.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionsView {
    /// Registry key of the event type asked about.
    pub event_type: String,
    /// Registered addresses, in registration order.
    pub callback_urls: Vec<String>,
}

/// Returns the last `limit` events and the overall event count.
pub fn recent_events(log: &dyn EventLog, limit: usize) -> EventHistoryView {
    EventHistoryView {
        total_events: log.len(),
        events: log.recent(limit),
    }
}

/// Returns every event recorded for `order_id`; empty if there are none.
pub fn events_for_order(log: &dyn EventLog, order_id: OrderId) -> OrderEventsView {
    let events = log.by_correlation_id(order_id);
    OrderEventsView {
        order_id,
        event_count: events.len(),
        events,
    }
}

/// Returns the callback addresses registered for `event_type`.
pub fn list_subscribers(registry: &SubscriberRegistry, event_type: &str) -> SubscriptionsView {
    SubscriptionsView {
        event_type: registry_key(event_type),
        callback_urls: registry.subscribers(event_type),
    }
}
