//! Downstream collaborator abstractions.
//!
//! The Order and Delivery services are external; the dispatcher only talks to
//! them through these traits.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::CollaboratorError;
use crate::event::OrderId;
use crate::status::OrderStatus;

/// Name under which the Order service appears in errors and logs.
pub const ORDER_SERVICE: &str = "order-service";

/// Name under which the Delivery service appears in errors and logs.
pub const DELIVERY_SERVICE: &str = "delivery-service";

/// Delivery address sent with every assignment request.
pub const PLACEHOLDER_DELIVERY_ADDRESS: &str = "123 Customer Street";

/// Pickup address sent with every assignment request.
pub const PLACEHOLDER_PICKUP_ADDRESS: &str = "Restaurant Location";

/// Body of a delivery-partner assignment request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAssignment {
    /// Order to deliver.
    pub order_id: OrderId,
    /// Where the partner drops the order off.
    pub delivery_address: String,
    /// Where the partner collects the order.
    pub pickup_address: String,
}

impl DeliveryAssignment {
    /// Assignment request for `order_id` with the placeholder addresses.
    #[must_use]
    pub fn placeholder(order_id: OrderId) -> Self {
        Self {
            order_id,
            delivery_address: PLACEHOLDER_DELIVERY_ADDRESS.to_owned(),
            pickup_address: PLACEHOLDER_PICKUP_ADDRESS.to_owned(),
        }
    }
}

/// The Order service.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Sets the status of `order_id`. No transition rules are applied.
    async fn update_status(
        &self,
        order_id: OrderId,
        status: OrderStatus,
    ) -> Result<(), CollaboratorError>;

    /// Probes the service's health endpoint.
    async fn health(&self) -> Result<(), CollaboratorError>;
}

/// The Delivery service.
#[async_trait]
pub trait DeliveryService: Send + Sync {
    /// Requests a delivery partner for an order.
    async fn assign(&self, assignment: &DeliveryAssignment) -> Result<(), CollaboratorError>;

    /// Probes the service's health endpoint.
    async fn health(&self) -> Result<(), CollaboratorError>;
}
