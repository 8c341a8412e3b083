//! In-memory adapters for tests and offline use.

mod fetcher;

pub use fetcher::InMemoryTaskFetcher;
