//! CLI command handlers.

pub mod browse;
pub mod config;
pub mod events;
pub mod search;
pub mod validate;
