//! Event log abstraction.

use crate::event::{Event, EventPayload, OrderId};

/// Append-only sequence of recorded events.
///
/// Implementations stamp each event at append time and must keep
/// `recorded_at` non-decreasing along the sequence. Appends are serialized
/// among themselves; nothing is ever rewritten or removed.
pub trait EventLog: Send + Sync {
    /// Records `payload` as a new event and returns the stored event.
    fn append(&self, payload: EventPayload) -> Event;

    /// The last `n` events in insertion order (fewer if the log is shorter).
    fn recent(&self, n: usize) -> Vec<Event>;

    /// Every event for `order_id`, in insertion order.
    fn by_correlation_id(&self, order_id: OrderId) -> Vec<Event>;

    /// Number of events recorded so far.
    fn len(&self) -> usize;

    /// Whether no event has been recorded yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
