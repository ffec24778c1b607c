//! Shared test doubles and utilities for the internal communication service.

mod clock;
mod collaborators;

pub use clock::{FixedClock, SequenceClock};
pub use collaborators::{
    RecordingDeliveryService, RecordingOrderService, UnreachableDeliveryService,
    UnreachableOrderService,
};
