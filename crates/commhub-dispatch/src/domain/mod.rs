//! Domain layer for the dispatch context.

pub mod commands;
pub mod reaction;
pub mod subscriptions;
