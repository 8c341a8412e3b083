//! Taskboard: client-side state for a kanban-style task board.
//!
//! This crate provides the store behind a board view: it loads a board's
//! tasks from a remote collaborator, groups them into one column per status
//! type, and keeps the task list and the columns consistent as tasks are
//! added and moved. It also provides the headless model of the floating
//! date picker used by task forms.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`board`]: Task cache, column grouping and the board controller
//! - [`datepicker`]: Floating-label date input state

pub mod board;
pub mod datepicker;
