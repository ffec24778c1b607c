//! Outcome of the side-effecting step that follows every recorded event.
//!
//! A reaction is informational. The inbound caller is acknowledged whatever
//! it contains; a failed reaction is a lost side effect unless replayed by
//! hand.

use commhub_core::error::CollaboratorError;
use commhub_core::event::{Event, OrderId};
use commhub_core::status::OrderStatus;

/// A downstream call that completed successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// The Delivery service accepted an assignment request.
    DeliveryAssigned {
        /// Order the partner was assigned to.
        order_id: OrderId,
    },
    /// The Order service accepted a status update.
    OrderStatusUpdated {
        /// Order that was updated.
        order_id: OrderId,
        /// Status that was set.
        status: OrderStatus,
    },
}

/// What happened downstream after an event was recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction {
    /// Every downstream call succeeded.
    Completed(Vec<Effect>),
    /// The event required no downstream call.
    Skipped,
    /// A downstream call failed. `completed` lists the calls that went through
    /// before it and were not undone.
    Failed {
        /// Effects already applied.
        completed: Vec<Effect>,
        /// The failure that stopped the sequence.
        error: CollaboratorError,
    },
}

impl Reaction {
    /// Effects that were applied, whether or not the sequence finished.
    #[must_use]
    pub fn effects(&self) -> &[Effect] {
        match self {
            Self::Completed(effects) | Self::Failed { completed: effects, .. } => effects,
            Self::Skipped => &[],
        }
    }

    /// The failure, if the sequence stopped early.
    #[must_use]
    pub fn error(&self) -> Option<&CollaboratorError> {
        match self {
            Self::Failed { error, .. } => Some(error),
            Self::Completed(_) | Self::Skipped => None,
        }
    }
}

/// Result of dispatching one inbound event.
#[derive(Debug, Clone)]
pub struct DispatchReceipt {
    /// The event as appended to the log.
    pub event: Event,
    /// What happened downstream.
    pub reaction: Reaction,
}
