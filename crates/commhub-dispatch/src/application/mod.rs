//! Application layer for the dispatch context.

pub mod command_handlers;
pub mod query_handlers;
