//! Command handlers for the dispatch context.
//!
//! Every handler follows the same shape: append the event to the log, run a
//! short fixed sequence of calls against the collaborators, and hand back a
//! [`DispatchReceipt`]. Handlers never fail. Downstream errors are logged and
//! folded into the receipt's [`Reaction`], and there are no retries: a
//! re-delivered event is appended again and its calls are issued again.

use commhub_core::collaborator::{DeliveryAssignment, DeliveryService, OrderService};
use commhub_core::event::OrderId;
use commhub_core::log::EventLog;
use commhub_core::status::{OrderStatus, translate};
use tracing::{error, info, instrument};

use crate::domain::commands::{
    RecordDeliveryStatusUpdate, RecordOrderCreated, RecordPaymentCompleted,
};
use crate::domain::reaction::{DispatchReceipt, Effect, Reaction};

async fn push_status(
    orders: &dyn OrderService,
    order_id: OrderId,
    status: OrderStatus,
    mut completed: Vec<Effect>,
) -> Reaction {
    match orders.update_status(order_id, status).await {
        Ok(()) => {
            info!(order_id, %status, "order status updated");
            completed.push(Effect::OrderStatusUpdated { order_id, status });
            Reaction::Completed(completed)
        }
        Err(err) => Reaction::Failed {
            completed,
            error: err,
        },
    }
}

fn log_failure(event_type: &'static str, reaction: &Reaction) {
    if let Some(err) = reaction.error() {
        error!(
            event_type,
            service = err.service(),
            error = %err,
            applied_effects = reaction.effects().len(),
            "failed to process event; side effect dropped"
        );
    }
}

/// Handles an order-created event: records it, asks the Delivery service for a
/// partner, and only if that succeeds marks the order `CONFIRMED`.
///
/// A failure of the status update leaves the delivery assignment in place.
#[instrument(skip(command, log, delivery, orders), fields(order_id = command.order_id))]
pub async fn handle_order_created(
    command: &RecordOrderCreated,
    log: &dyn EventLog,
    delivery: &dyn DeliveryService,
    orders: &dyn OrderService,
) -> DispatchReceipt {
    info!(restaurant_id = ?command.restaurant_id, "event: order created");
    let event = log.append(command.payload());

    let assignment = DeliveryAssignment::placeholder(command.order_id);
    let reaction = match delivery.assign(&assignment).await {
        Ok(()) => {
            info!("delivery assigned");
            let assigned = vec![Effect::DeliveryAssigned {
                order_id: command.order_id,
            }];
            push_status(orders, command.order_id, OrderStatus::Confirmed, assigned).await
        }
        Err(err) => Reaction::Failed {
            completed: Vec::new(),
            error: err,
        },
    };

    log_failure(event.event_type().as_str(), &reaction);
    DispatchReceipt { event, reaction }
}

/// Handles a delivery-status event: records it and pushes the translated
/// order status. Unrecognized (or missing) codes push `PENDING`.
#[instrument(skip(command, log, orders), fields(order_id = command.order_id))]
pub async fn handle_delivery_status_updated(
    command: &RecordDeliveryStatusUpdate,
    log: &dyn EventLog,
    orders: &dyn OrderService,
) -> DispatchReceipt {
    info!(status = ?command.status, "event: delivery status updated");
    let event = log.append(command.payload());

    let order_status = translate(command.status.as_deref().unwrap_or_default());
    let reaction = push_status(orders, command.order_id, order_status, Vec::new()).await;

    log_failure(event.event_type().as_str(), &reaction);
    DispatchReceipt { event, reaction }
}

/// Handles a payment-completed event: records it and, for a `SUCCESS`
/// outcome only, marks the order `PAID`.
#[instrument(skip(command, log, orders), fields(order_id = command.order_id))]
pub async fn handle_payment_completed(
    command: &RecordPaymentCompleted,
    log: &dyn EventLog,
    orders: &dyn OrderService,
) -> DispatchReceipt {
    info!(status = ?command.status, "event: payment completed");
    let event = log.append(command.payload());

    let reaction = if command.succeeded() {
        push_status(orders, command.order_id, OrderStatus::Paid, Vec::new()).await
    } else {
        Reaction::Skipped
    };

    log_failure(event.event_type().as_str(), &reaction);
    DispatchReceipt { event, reaction }
}
