//! Domain model for the task board.
//!
//! Tasks, their status descriptors and the columns that group them. The
//! domain holds no I/O; fetching lives behind the ports.

mod column;
mod error;
mod ids;
mod task;

pub use column::{BoardColumn, ColumnSnapshot};
pub use error::BoardDomainError;
pub use ids::{BoardId, StatusType, TaskId};
pub use task::{Task, TaskStatus};
