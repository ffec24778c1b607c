//! Route modules organized by concern.

pub mod events;
pub mod health;
pub mod root;
pub mod subscriptions;
