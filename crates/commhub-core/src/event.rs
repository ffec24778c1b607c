//! Event model recorded by the event log.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::DomainError;
use crate::field::Field;

/// Order identifier; used as the correlation id that groups related events.
pub type OrderId = i64;

/// Closed set of inbound event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    /// An order was placed with a restaurant.
    OrderCreated,
    /// The Delivery service reported a new delivery status.
    DeliveryStatusUpdated,
    /// A payment attempt finished.
    PaymentCompleted,
}

impl EventType {
    /// All event types, in declaration order.
    pub const ALL: [Self; 3] = [
        Self::OrderCreated,
        Self::DeliveryStatusUpdated,
        Self::PaymentCompleted,
    ];

    /// Wire name of the event type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OrderCreated => "ORDER_CREATED",
            Self::DeliveryStatusUpdated => "DELIVERY_STATUS_UPDATED",
            Self::PaymentCompleted => "PAYMENT_COMPLETED",
        }
    }

    /// Route segment under `/events/` that publishes this event type.
    #[must_use]
    pub const fn route_name(self) -> &'static str {
        match self {
            Self::OrderCreated => "order-created",
            Self::DeliveryStatusUpdated => "delivery-status-updated",
            Self::PaymentCompleted => "payment-completed",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = DomainError;

    /// Accepts either the wire name (`ORDER_CREATED`) or the route name
    /// (`order-created`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s || t.route_name() == s)
            .ok_or_else(|| DomainError::UnknownEventType(s.to_owned()))
    }
}

/// Type-specific fields of an event, kept exactly as they arrived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EventPayload {
    /// Payload of [`EventType::OrderCreated`].
    #[serde(rename_all = "camelCase")]
    OrderCreated {
        /// The new order.
        order_id: OrderId,
        /// Restaurant the order was placed with.
        #[serde(skip_serializing_if = "Field::is_missing")]
        restaurant_id: Field<i64>,
    },
    /// Payload of [`EventType::DeliveryStatusUpdated`].
    #[serde(rename_all = "camelCase")]
    DeliveryStatusUpdated {
        /// The order being delivered.
        order_id: OrderId,
        /// Raw delivery-status code, possibly unrecognized.
        #[serde(skip_serializing_if = "Field::is_missing")]
        status: Field<String>,
    },
    /// Payload of [`EventType::PaymentCompleted`].
    #[serde(rename_all = "camelCase")]
    PaymentCompleted {
        /// The order that was paid for.
        order_id: OrderId,
        /// Payment reference from the payment provider.
        #[serde(skip_serializing_if = "Field::is_missing")]
        payment_id: Field<String>,
        /// Raw payment outcome, `SUCCESS` on success.
        #[serde(skip_serializing_if = "Field::is_missing")]
        status: Field<String>,
    },
}

impl EventPayload {
    /// The event type this payload belongs to.
    #[must_use]
    pub const fn event_type(&self) -> EventType {
        match self {
            Self::OrderCreated { .. } => EventType::OrderCreated,
            Self::DeliveryStatusUpdated { .. } => EventType::DeliveryStatusUpdated,
            Self::PaymentCompleted { .. } => EventType::PaymentCompleted,
        }
    }

    /// The order this payload pertains to.
    #[must_use]
    pub const fn correlation_id(&self) -> OrderId {
        match self {
            Self::OrderCreated { order_id, .. }
            | Self::DeliveryStatusUpdated { order_id, .. }
            | Self::PaymentCompleted { order_id, .. } => *order_id,
        }
    }
}

/// An immutable fact recorded about an order's lifecycle.
///
/// Serializes as `{"type": ..., "data": {...}, "timestamp": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    #[serde(rename = "type")]
    event_type: EventType,
    #[serde(rename = "data")]
    payload: EventPayload,
    #[serde(rename = "timestamp")]
    recorded_at: DateTime<Utc>,
}

impl Event {
    /// Builds an event stamped with `recorded_at`.
    #[must_use]
    pub fn new(payload: EventPayload, recorded_at: DateTime<Utc>) -> Self {
        Self {
            event_type: payload.event_type(),
            payload,
            recorded_at,
        }
    }

    /// Event type.
    #[must_use]
    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    /// Order the event pertains to.
    #[must_use]
    pub fn correlation_id(&self) -> OrderId {
        self.payload.correlation_id()
    }

    /// Type-specific fields.
    #[must_use]
    pub fn payload(&self) -> &EventPayload {
        &self.payload
    }

    /// Time the event was appended to the log.
    #[must_use]
    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}
