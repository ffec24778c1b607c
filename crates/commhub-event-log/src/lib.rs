//! Commhub Event Log — process-scoped storage for recorded events.
//!
//! History lives only as long as the process; a restart discards it.

pub mod in_memory_event_log;

pub use in_memory_event_log::InMemoryEventLog;
