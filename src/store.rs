use std::path::Path;
use tracing::warn;

use crate::error::StoreError;
use crate::storage::Storage;
use crate::task::{Priority, Task};
use crate::validation::parse_due_date;

/// Result of [`TaskStore::add`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Added {
    /// The task as it was stored
    pub task: Task,
    /// Set when a due date was given but rejected, so the task was stored without one
    pub due_date_warning: Option<String>,
}

/// Owns the task list and keeps its file in sync
///
/// Tasks are kept in insertion order, which is also the order on disk.
/// Positions taken by [`mark_done`](Self::mark_done) and [`remove`](Self::remove)
/// are 1-based and refer to [`display_order`](Self::display_order).
/// Every successful mutation rewrites the whole file.
pub struct TaskStore {
    tasks: Vec<Task>,
    storage: Storage,
}

impl TaskStore {
    /// Open the store backed by `path`, loading whatever it already holds
    ///
    /// # Example
    /// ```no_run
    /// # use todolist::{Priority, TaskStore};
    /// let mut store = TaskStore::open("tasks.json");
    /// store.add("Buy milk", Priority::High, None)?;
    /// # Ok::<(), todolist::StoreError>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Self {
        let storage = Storage::new(path);
        let tasks = storage.load();
        Self { tasks, storage }
    }

    /// Replace the in-memory list with the file contents
    pub fn load(&mut self) -> &[Task] {
        self.tasks = self.storage.load();
        &self.tasks
    }

    /// Write the full list to disk
    pub fn save(&self) -> Result<(), StoreError> {
        self.storage.save(&self.tasks).map_err(|err| {
            warn!(error = %format!("{err:#}"), "saving tasks failed");
            StoreError::Save(err)
        })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn path(&self) -> &Path {
        self.storage.path()
    }

    /// Tasks sorted by descending priority; equal priorities keep insertion order
    pub fn display_order(&self) -> Vec<&Task> {
        self.display_indices().into_iter().map(|i| &self.tasks[i]).collect()
    }

    fn display_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.tasks.len()).collect();
        // sort_by is stable
        indices.sort_by(|&a, &b| self.tasks[b].priority.cmp(&self.tasks[a].priority));
        indices
    }

    /// Map a 1-based display position to an index into `tasks`
    fn storage_index(&self, position: usize) -> Result<usize, StoreError> {
        let count = self.tasks.len();
        if position == 0 || position > count {
            return Err(StoreError::InvalidTaskNumber { position, count });
        }
        Ok(self.display_indices()[position - 1])
    }

    /// Append a new task and persist
    ///
    /// A blank `due_date` means no due date. A non-blank one that is not a
    /// valid `YYYY-MM-DD` date is dropped and reported in [`Added::due_date_warning`].
    pub fn add(
        &mut self,
        description: impl Into<String>,
        priority: Priority,
        due_date: Option<&str>,
    ) -> Result<Added, StoreError> {
        let (due_date, due_date_warning) = match due_date.map(parse_due_date) {
            None => (None, None),
            Some(Ok(date)) => (date, None),
            Some(Err(err)) => {
                warn!(error = %err, "discarding due date");
                (None, Some(err.to_string()))
            }
        };

        let task = Task::new(description, priority, due_date);
        self.tasks.push(task.clone());
        self.save()?;
        Ok(Added {
            task,
            due_date_warning,
        })
    }

    /// Mark the task at `position` as done and persist
    pub fn mark_done(&mut self, position: usize) -> Result<&Task, StoreError> {
        let index = self.storage_index(position)?;
        self.tasks[index].done = true;
        self.save()?;
        Ok(&self.tasks[index])
    }

    /// Delete the task at `position` and persist
    pub fn remove(&mut self, position: usize) -> Result<Task, StoreError> {
        let index = self.storage_index(position)?;
        let removed = self.tasks.remove(index);
        self.save()?;
        Ok(removed)
    }
}
