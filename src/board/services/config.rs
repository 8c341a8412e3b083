//! Board controller configuration.

use serde::{Deserialize, Serialize};

/// Configuration for [`super::BoardController`].
///
/// # Examples
///
/// ```
/// use taskboard::board::services::BoardConfig;
///
/// let config = BoardConfig::default();
/// assert!(config.reset_on_board_change);
///
/// let sticky = BoardConfig::retain_on_board_change();
/// assert!(!sticky.reset_on_board_change);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Number of events buffered per subscriber before the slowest one
    /// starts lagging. Values below one are treated as one.
    pub event_capacity: usize,
    /// Whether selecting a different board clears the cached tasks and
    /// columns so the next `init` fetches the new board.
    pub reset_on_board_change: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            event_capacity: 64,
            reset_on_board_change: true,
        }
    }
}

impl BoardConfig {
    /// Keeps the previous board's data on screen after a board switch until
    /// the caller resets the controller.
    #[must_use]
    pub fn retain_on_board_change() -> Self {
        Self {
            reset_on_board_change: false,
            ..Self::default()
        }
    }

    /// Sets the event buffer size.
    #[must_use]
    pub const fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }
}
