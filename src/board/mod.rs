//! Kanban board store.
//!
//! Loads a board's tasks through a fetch port, groups them into one column
//! per status type, and keeps the task list and the columns consistent as
//! tasks are added or updated. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
