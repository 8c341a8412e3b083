//! Application services for the task board.

mod cache;
mod columns;
mod config;
mod controller;
mod events;

pub use cache::TaskCache;
pub use columns::ColumnIndex;
pub use config::BoardConfig;
pub use controller::{BoardController, BoardError, BoardResult, InitOutcome};
pub use events::{BoardEvent, TaskUpdate};
