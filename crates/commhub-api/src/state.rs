//! Shared application state.

use std::sync::Arc;

use commhub_core::collaborator::{DeliveryService, OrderService};
use commhub_core::log::EventLog;
use commhub_dispatch::domain::subscriptions::SubscriberRegistry;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Process-wide append-only event log.
    pub event_log: Arc<dyn EventLog>,
    /// Inert subscriber registry.
    pub subscribers: Arc<SubscriberRegistry>,
    /// Order service client.
    pub order_service: Arc<dyn OrderService>,
    /// Delivery service client.
    pub delivery_service: Arc<dyn DeliveryService>,
}

impl AppState {
    /// Create new application state with an empty subscriber registry.
    #[must_use]
    pub fn new(
        event_log: Arc<dyn EventLog>,
        order_service: Arc<dyn OrderService>,
        delivery_service: Arc<dyn DeliveryService>,
    ) -> Self {
        Self {
            event_log,
            subscribers: Arc::new(SubscriberRegistry::new()),
            order_service,
            delivery_service,
        }
    }
}
