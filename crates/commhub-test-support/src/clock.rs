//! Test clocks — deterministic `Clock` implementations for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};
use commhub_core::clock::Clock;

/// A clock that always returns a fixed point in time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A clock that returns values from a predetermined sequence, then keeps
/// returning the last one. Used to simulate clocks that jump around.
#[derive(Debug)]
pub struct SequenceClock {
    values: Vec<DateTime<Utc>>,
    index: AtomicUsize,
}

impl SequenceClock {
    /// Create a new `SequenceClock` with the given values.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    #[must_use]
    pub fn new(values: Vec<DateTime<Utc>>) -> Self {
        assert!(!values.is_empty(), "SequenceClock needs at least one value");
        Self {
            values,
            index: AtomicUsize::new(0),
        }
    }
}

impl Clock for SequenceClock {
    fn now(&self) -> DateTime<Utc> {
        let i = self.index.fetch_add(1, Ordering::SeqCst);
        self.values[i.min(self.values.len() - 1)]
    }
}
