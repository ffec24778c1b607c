//! Commhub Core — shared domain abstractions.
//!
//! This crate defines the event model, the order-status vocabulary, and the
//! traits at the seams of the service (clock, event log, downstream
//! collaborators). It contains no infrastructure code.

pub mod clock;
pub mod collaborator;
pub mod error;
pub mod event;
pub mod field;
pub mod log;
pub mod status;
