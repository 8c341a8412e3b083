//! Board controller keeping the task cache and the column index in step.

use super::{BoardConfig, BoardEvent, ColumnIndex, TaskCache, TaskUpdate};
use crate::board::{
    domain::{BoardDomainError, BoardId, ColumnSnapshot, StatusType, Task, TaskId},
    ports::{TaskFetchError, TaskFetcher},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::collections::HashSet;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use tokio::sync::{Mutex, broadcast};
use tracing::{debug, info, trace, warn};

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// The fetch collaborator failed.
    #[error(transparent)]
    Fetch(#[from] TaskFetchError),
    /// A task identifier is already on the board or repeats in a fetched list.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),
    /// A previous holder of the state lock panicked.
    #[error("board state lock poisoned: {0}")]
    StatePoisoned(String),
}

/// Result type for board controller operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Outcome of [`BoardController::init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// Nothing to do: no board selected or tasks already loaded.
    Skipped,
    /// Tasks were fetched and columns rebuilt.
    Loaded {
        /// Number of tasks loaded.
        tasks: usize,
    },
    /// The board changed while the fetch was in flight; the result was
    /// dropped.
    Discarded {
        /// Board the dropped tasks belonged to.
        board_id: BoardId,
    },
}

#[derive(Debug, Default)]
struct BoardState {
    board_id: Option<BoardId>,
    cache: TaskCache,
    columns: ColumnIndex,
    loaded_at: Option<DateTime<Utc>>,
    generation: u64,
}

impl BoardState {
    fn drop_tasks(&mut self) {
        self.cache.clear();
        self.columns.clear();
        self.loaded_at = None;
    }

    fn snapshot(&self, status_type: &StatusType) -> Option<ColumnSnapshot> {
        let column = self.columns.column(status_type)?;
        let tasks = column
            .task_ids()
            .iter()
            .filter_map(|id| self.cache.find(*id).cloned())
            .collect();
        Some(ColumnSnapshot {
            status_type: column.status_type().clone(),
            tasks,
        })
    }
}

/// Mediates between the task cache and the column index.
///
/// Every mutation updates the cache and the columns under one write lock, so
/// readers never observe a task in the cache that is missing from its column
/// or the reverse. Changes are announced on a broadcast channel obtained from
/// [`BoardController::subscribe`].
pub struct BoardController<F, C>
where
    F: TaskFetcher,
    C: Clock + Send + Sync,
{
    fetcher: Arc<F>,
    clock: Arc<C>,
    config: BoardConfig,
    state: RwLock<BoardState>,
    in_flight: Mutex<()>,
    events: broadcast::Sender<BoardEvent>,
}

impl<F, C> BoardController<F, C>
where
    F: TaskFetcher,
    C: Clock + Send + Sync,
{
    /// Creates a controller with the default configuration.
    #[must_use]
    pub fn new(fetcher: Arc<F>, clock: Arc<C>) -> Self {
        Self::with_config(fetcher, clock, BoardConfig::default())
    }

    /// Creates a controller with an explicit configuration.
    #[must_use]
    pub fn with_config(fetcher: Arc<F>, clock: Arc<C>, config: BoardConfig) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity.max(1));
        Self {
            fetcher,
            clock,
            config,
            state: RwLock::new(BoardState::default()),
            in_flight: Mutex::new(()),
            events,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Subscribes to board change events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<BoardEvent> {
        self.events.subscribe()
    }

    /// Returns the selected board, if any.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StatePoisoned`] when the state lock is poisoned.
    pub fn board_id(&self) -> BoardResult<Option<BoardId>> {
        Ok(self.read_state()?.board_id)
    }

    /// Selects the board whose tasks `init` loads.
    ///
    /// Returns `false` when `board_id` is already selected. With
    /// [`BoardConfig::reset_on_board_change`] set, switching boards drops the
    /// cached tasks and columns. Any fetch still in flight for the previous
    /// board is discarded on completion.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StatePoisoned`] when the state lock is poisoned.
    pub fn set_board_id(&self, board_id: BoardId) -> BoardResult<bool> {
        let mut state = self.write_state()?;
        if state.board_id == Some(board_id) {
            return Ok(false);
        }

        let previous = state.board_id.replace(board_id);
        state.generation = state.generation.wrapping_add(1);
        let reset = self.config.reset_on_board_change;
        if reset {
            state.drop_tasks();
        }
        drop(state);

        info!(%board_id, previous = ?previous, reset, "board selected");
        self.publish(BoardEvent::BoardChanged { board_id, reset });
        Ok(true)
    }

    /// Loads the selected board's tasks and rebuilds the columns.
    ///
    /// Does nothing when no board is selected or tasks are already loaded.
    /// Concurrent calls share one fetch: later callers wait for the first and
    /// then find the cache populated. A fetched list replaces any tasks added
    /// locally before the first load.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Fetch`] when the fetch fails and
    /// [`BoardError::DuplicateTask`] when the fetched list repeats a task
    /// identifier; in both cases the board state is left unchanged. Returns
    /// [`BoardError::StatePoisoned`] when the state lock is poisoned.
    pub async fn init(&self) -> BoardResult<InitOutcome> {
        let _in_flight = self.in_flight.lock().await;

        let (board_id, generation) = {
            let state = self.read_state()?;
            let Some(board_id) = state.board_id else {
                debug!("no board selected, skipping init");
                return Ok(InitOutcome::Skipped);
            };
            if state.cache.is_populated() && !state.cache.is_empty() {
                trace!(%board_id, "tasks already loaded, skipping init");
                return Ok(InitOutcome::Skipped);
            }
            (board_id, state.generation)
        };

        debug!(%board_id, "fetching board tasks");
        let mut staged = TaskCache::new();
        let count = staged
            .set(|| self.fetcher.fetch_tasks(board_id))
            .await
            .inspect_err(|err| warn!(%board_id, error = %err, "task fetch failed"))?;
        if let Some(task_id) = first_repeated_id(staged.data()) {
            warn!(%board_id, %task_id, "fetched tasks repeat an identifier");
            return Err(BoardError::DuplicateTask(task_id));
        }

        let mut state = self.write_state()?;
        if state.generation != generation {
            drop(state);
            warn!(%board_id, "board changed during fetch, discarding tasks");
            return Ok(InitOutcome::Discarded { board_id });
        }

        let loaded_at = self.clock.utc();
        state.columns = ColumnIndex::from_tasks(staged.data());
        state.cache = staged;
        state.loaded_at = Some(loaded_at);
        let columns = state.columns.len();
        drop(state);

        info!(%board_id, tasks = count, columns, "board tasks loaded");
        self.publish(BoardEvent::TasksLoaded {
            board_id,
            tasks: count,
            columns,
            loaded_at,
        });
        Ok(InitOutcome::Loaded { tasks: count })
    }

    /// Returns `true` once tasks have been loaded and the cache is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StatePoisoned`] when the state lock is poisoned.
    pub fn is_loaded(&self) -> BoardResult<bool> {
        let state = self.read_state()?;
        Ok(state.cache.is_populated() && !state.cache.is_empty())
    }

    /// Returns when the current task list was fetched.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StatePoisoned`] when the state lock is poisoned.
    pub fn loaded_at(&self) -> BoardResult<Option<DateTime<Utc>>> {
        Ok(self.read_state()?.loaded_at)
    }

    /// Returns the column of `status_type`, resolved to task values.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StatePoisoned`] when the state lock is poisoned.
    pub fn find_column_by_status(
        &self,
        status_type: &StatusType,
    ) -> BoardResult<Option<ColumnSnapshot>> {
        Ok(self.read_state()?.snapshot(status_type))
    }

    /// Returns the task with identifier `id`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StatePoisoned`] when the state lock is poisoned.
    pub fn find_task_by_id(&self, id: TaskId) -> BoardResult<Option<Task>> {
        Ok(self.read_state()?.cache.find(id).cloned())
    }

    /// Returns every column in display order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StatePoisoned`] when the state lock is poisoned.
    pub fn columns(&self) -> BoardResult<Vec<ColumnSnapshot>> {
        let state = self.read_state()?;
        Ok(state
            .columns
            .columns()
            .iter()
            .filter_map(|column| state.snapshot(column.status_type()))
            .collect())
    }

    /// Returns every known task in cache order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StatePoisoned`] when the state lock is poisoned.
    pub fn tasks(&self) -> BoardResult<Vec<Task>> {
        Ok(self.read_state()?.cache.data().to_vec())
    }

    /// Adds a task to the cache and appends it to the column of its status
    /// type, creating the column when needed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DuplicateTask`] when a task with the same
    /// identifier exists, or [`BoardError::StatePoisoned`] when the state lock
    /// is poisoned.
    pub fn add_new_task(&self, task: Task) -> BoardResult<()> {
        let task_id = task.id();
        let status_type = task.status_type().clone();

        let mut state = self.write_state()?;
        if state.cache.contains(task_id) {
            return Err(BoardError::DuplicateTask(task_id));
        }
        let created = state.columns.append(&task);
        state.cache.push(task);
        drop(state);

        debug!(%task_id, %status_type, new_column = created, "task added");
        self.publish(BoardEvent::TaskAdded {
            task_id,
            status_type,
        });
        Ok(())
    }

    /// Replaces a known task with `updated`, moving it between columns when
    /// its status type changed.
    ///
    /// Unknown identifiers are ignored and reported as
    /// [`TaskUpdate::Ignored`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StatePoisoned`] when the state lock is poisoned.
    pub fn update_task(&self, updated: Task) -> BoardResult<TaskUpdate> {
        let task_id = updated.id();
        let next_type = updated.status_type().clone();

        let mut state = self.write_state()?;
        let known_type = state
            .cache
            .find(task_id)
            .map(|task| task.status_type().clone());
        let Some(previous_type) = known_type else {
            drop(state);
            debug!(%task_id, "update for unknown task ignored");
            return Ok(TaskUpdate::Ignored);
        };

        let change = if previous_type == next_type {
            TaskUpdate::InPlace {
                status_type: next_type,
            }
        } else {
            state.columns.remove(task_id, &previous_type);
            state.columns.append(&updated);
            TaskUpdate::Moved {
                from: previous_type,
                to: next_type,
            }
        };
        if let Some(slot) = state.cache.find_mut(task_id) {
            *slot = updated;
        }
        drop(state);

        debug!(%task_id, change = ?change, "task updated");
        self.publish(BoardEvent::TaskUpdated {
            task_id,
            change: change.clone(),
        });
        Ok(change)
    }

    /// Drops cached tasks and columns; the next `init` fetches again.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StatePoisoned`] when the state lock is poisoned.
    pub fn reset(&self) -> BoardResult<()> {
        let mut state = self.write_state()?;
        state.generation = state.generation.wrapping_add(1);
        state.drop_tasks();
        drop(state);

        info!("board state reset");
        self.publish(BoardEvent::Reset);
        Ok(())
    }

    fn publish(&self, event: BoardEvent) {
        if self.events.send(event).is_err() {
            trace!("no board event subscribers");
        }
    }

    fn read_state(&self) -> BoardResult<RwLockReadGuard<'_, BoardState>> {
        self.state
            .read()
            .map_err(|err| BoardError::StatePoisoned(err.to_string()))
    }

    fn write_state(&self) -> BoardResult<RwLockWriteGuard<'_, BoardState>> {
        self.state
            .write()
            .map_err(|err| BoardError::StatePoisoned(err.to_string()))
    }
}

fn first_repeated_id(tasks: &[Task]) -> Option<TaskId> {
    let mut seen = HashSet::with_capacity(tasks.len());
    tasks.iter().map(Task::id).find(|id| !seen.insert(*id))
}
