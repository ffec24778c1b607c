//! Test collaborators — mock Order and Delivery services for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use commhub_core::collaborator::{
    DELIVERY_SERVICE, DeliveryAssignment, DeliveryService, ORDER_SERVICE, OrderService,
};
use commhub_core::error::CollaboratorError;
use commhub_core::event::OrderId;
use commhub_core::status::OrderStatus;

/// An order service that records every status update and always succeeds.
#[derive(Debug, Default)]
pub struct RecordingOrderService {
    updates: Mutex<Vec<(OrderId, OrderStatus)>>,
}

impl RecordingOrderService {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all status updates received.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn status_updates(&self) -> Vec<(OrderId, OrderStatus)> {
        self.updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderService for RecordingOrderService {
    async fn update_status(
        &self,
        order_id: OrderId,
        status: OrderStatus,
    ) -> Result<(), CollaboratorError> {
        self.updates.lock().unwrap().push((order_id, status));
        Ok(())
    }

    async fn health(&self) -> Result<(), CollaboratorError> {
        Ok(())
    }
}

/// A delivery service that records every assignment and always succeeds.
#[derive(Debug, Default)]
pub struct RecordingDeliveryService {
    assignments: Mutex<Vec<DeliveryAssignment>>,
}

impl RecordingDeliveryService {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all assignment requests received.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn assignments(&self) -> Vec<DeliveryAssignment> {
        self.assignments.lock().unwrap().clone()
    }
}

#[async_trait]
impl DeliveryService for RecordingDeliveryService {
    async fn assign(&self, assignment: &DeliveryAssignment) -> Result<(), CollaboratorError> {
        self.assignments.lock().unwrap().push(assignment.clone());
        Ok(())
    }

    async fn health(&self) -> Result<(), CollaboratorError> {
        Ok(())
    }
}

fn connection_refused(service: &'static str) -> CollaboratorError {
    CollaboratorError::Unreachable {
        service,
        message: "connection refused".into(),
    }
}

/// An order service whose every call fails as if the host were down.
#[derive(Debug, Default)]
pub struct UnreachableOrderService;

#[async_trait]
impl OrderService for UnreachableOrderService {
    async fn update_status(
        &self,
        _order_id: OrderId,
        _status: OrderStatus,
    ) -> Result<(), CollaboratorError> {
        Err(connection_refused(ORDER_SERVICE))
    }

    async fn health(&self) -> Result<(), CollaboratorError> {
        Err(connection_refused(ORDER_SERVICE))
    }
}

/// A delivery service whose every call fails as if the host were down.
#[derive(Debug, Default)]
pub struct UnreachableDeliveryService;

#[async_trait]
impl DeliveryService for UnreachableDeliveryService {
    async fn assign(&self, _assignment: &DeliveryAssignment) -> Result<(), CollaboratorError> {
        Err(connection_refused(DELIVERY_SERVICE))
    }

    async fn health(&self) -> Result<(), CollaboratorError> {
        Err(connection_refused(DELIVERY_SERVICE))
    }
}
