//! Commhub Dispatch — event dispatch bounded context.
//!
//! Responsible for recording inbound order lifecycle events, propagating
//! the resulting status changes to the Order and Delivery services, serving
//! event history, and keeping the (inert) subscriber registry.

pub mod application;
pub mod domain;
