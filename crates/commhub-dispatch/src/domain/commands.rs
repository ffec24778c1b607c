//! Commands for the dispatch context.
//!
//! Each command carries one inbound event as received; fields other than the
//! order id are optional because the publishers do not validate them.

use commhub_core::event::{EventPayload, OrderId};
use commhub_core::field::Field;

/// Record that an order was created and set up its delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordOrderCreated {
    /// The new order.
    pub order_id: OrderId,
    /// Restaurant the order was placed with.
    pub restaurant_id: Field<i64>,
}

/// Record a delivery-status change and mirror it onto the order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDeliveryStatusUpdate {
    /// The order being delivered.
    pub order_id: OrderId,
    /// Raw delivery-status code.
    pub status: Field<String>,
}

/// Record the outcome of a payment attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPaymentCompleted {
    /// The order that was paid for.
    pub order_id: OrderId,
    /// Payment reference.
    pub payment_id: Field<String>,
    /// Raw payment outcome.
    pub status: Field<String>,
}

impl RecordOrderCreated {
    pub(crate) fn payload(&self) -> EventPayload {
        EventPayload::OrderCreated {
            order_id: self.order_id,
            restaurant_id: self.restaurant_id.clone(),
        }
    }
}

impl RecordDeliveryStatusUpdate {
    pub(crate) fn payload(&self) -> EventPayload {
        EventPayload::DeliveryStatusUpdated {
            order_id: self.order_id,
            status: self.status.clone(),
        }
    }
}

impl RecordPaymentCompleted {
    /// Outcome string that marks an order as paid.
    pub const SUCCESS: &'static str = "SUCCESS";

    /// Whether the payment succeeded. Exact, case-sensitive match.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.status.as_deref() == Some(Self::SUCCESS)
    }

    pub(crate) fn payload(&self) -> EventPayload {
        EventPayload::PaymentCompleted {
            order_id: self.order_id,
            payment_id: self.payment_id.clone(),
            status: self.status.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(status: Option<&str>) -> RecordPaymentCompleted {
        RecordPaymentCompleted {
            order_id: 9,
            payment_id: Field::Value("p1".to_owned()),
            status: status.map_or(Field::Missing, |s| Field::Value(s.to_owned())),
        }
    }

    #[test]
    fn test_payment_succeeded_only_for_exact_success() {
        assert!(payment(Some("SUCCESS")).succeeded());
        assert!(!payment(Some("success")).succeeded());
        assert!(!payment(Some("FAILED")).succeeded());
        assert!(!payment(None).succeeded());
        assert!(
            !RecordPaymentCompleted {
                status: Field::Null,
                ..payment(None)
            }
            .succeeded()
        );
    }
}
