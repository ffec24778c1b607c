//! In-memory implementation of the `EventLog` trait.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use commhub_core::clock::Clock;
use commhub_core::event::{Event, EventPayload, OrderId};
use commhub_core::log::EventLog;

/// Unbounded append-only event log guarded by a single writer lock.
pub struct InMemoryEventLog {
    clock: Arc<dyn Clock>,
    events: RwLock<Vec<Event>>,
}

impl std::fmt::Debug for InMemoryEventLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryEventLog")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl InMemoryEventLog {
    /// Creates an empty log that stamps events with `clock`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            events: RwLock::new(Vec::new()),
        }
    }

    // The Vec is only ever pushed to, so a poisoned lock still guards a
    // consistent log.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Event>> {
        self.events.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Event>> {
        self.events.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EventLog for InMemoryEventLog {
    fn append(&self, payload: EventPayload) -> Event {
        let mut events = self.write();

        // Clock is read under the lock so stamps follow append order; a clock
        // that steps backwards is clamped to the previous stamp.
        let now = self.clock.now();
        let recorded_at = events
            .last()
            .map_or(now, |last| now.max(last.recorded_at()));

        let event = Event::new(payload, recorded_at);
        events.push(event.clone());

        tracing::debug!(
            event_type = %event.event_type(),
            order_id = event.correlation_id(),
            total_events = events.len(),
            "event appended"
        );

        event
    }

    fn recent(&self, n: usize) -> Vec<Event> {
        let events = self.read();
        let start = events.len().saturating_sub(n);
        events[start..].to_vec()
    }

    fn by_correlation_id(&self, order_id: OrderId) -> Vec<Event> {
        self.read()
            .iter()
            .filter(|event| event.correlation_id() == order_id)
            .cloned()
            .collect()
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}
