//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod fetcher;

pub use fetcher::{TaskFetchError, TaskFetchResult, TaskFetcher};
