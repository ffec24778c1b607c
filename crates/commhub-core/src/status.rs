//! Order and delivery status vocabulary.
//!
//! The only business rule of the service lives here: a delivery-status code
//! reported by the Delivery service maps onto a fixed order status. Nothing
//! checks whether the resulting transition is legal for the order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Status of an order as understood by the Order service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Order received, nothing else known.
    Pending,
    /// A delivery partner has been assigned.
    Confirmed,
    /// The partner picked the order up.
    Preparing,
    /// The order is on its way to the customer.
    OutForDelivery,
    /// Payment succeeded.
    Paid,
    /// The order reached the customer.
    Delivered,
}

impl OrderStatus {
    /// Wire name sent to the Order service.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Preparing => "PREPARING",
            Self::OutForDelivery => "OUT_FOR_DELIVERY",
            Self::Paid => "PAID",
            Self::Delivered => "DELIVERED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status codes reported by the Delivery service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    /// A partner accepted the delivery.
    Assigned,
    /// The partner collected the order from the restaurant.
    PickedUp,
    /// The partner is travelling to the customer.
    OnTheWay,
    /// Handed over to the customer.
    Delivered,
}

impl DeliveryStatus {
    /// Wire name used by the Delivery service.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assigned => "ASSIGNED",
            Self::PickedUp => "PICKED_UP",
            Self::OnTheWay => "ON_THE_WAY",
            Self::Delivered => "DELIVERED",
        }
    }

    /// The order status implied by this delivery status.
    #[must_use]
    pub const fn order_status(self) -> OrderStatus {
        match self {
            Self::Assigned => OrderStatus::Confirmed,
            Self::PickedUp => OrderStatus::Preparing,
            Self::OnTheWay => OrderStatus::OutForDelivery,
            Self::Delivered => OrderStatus::Delivered,
        }
    }
}

/// Returned when a string is not an exact delivery-status code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown delivery status: {0:?}")]
pub struct UnknownDeliveryStatus(pub String);

impl FromStr for DeliveryStatus {
    type Err = UnknownDeliveryStatus;

    /// Matching is exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASSIGNED" => Ok(Self::Assigned),
            "PICKED_UP" => Ok(Self::PickedUp),
            "ON_THE_WAY" => Ok(Self::OnTheWay),
            "DELIVERED" => Ok(Self::Delivered),
            other => Err(UnknownDeliveryStatus(other.to_owned())),
        }
    }
}

/// Translates a raw delivery-status code into the order status to push.
///
/// Total: any string that is not a known delivery status, the empty string
/// included, maps to [`OrderStatus::Pending`].
#[must_use]
pub fn translate(delivery_status: &str) -> OrderStatus {
    delivery_status
        .parse::<DeliveryStatus>()
        .map_or(OrderStatus::Pending, DeliveryStatus::order_status)
}
