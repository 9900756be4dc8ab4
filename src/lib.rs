//! To-do list library
//!
//! A single-user task list persisted to a JSON file. Tasks have a description,
//! a completion flag, a priority and an optional due date.
//!
//! # Architecture
//!
//! - **Domain Layer**: `task` module - `Task` and `Priority`
//! - **Persistence Layer**: `storage` module - whole-file JSON load/save
//! - **Store**: `store` module - `TaskStore`, which owns the list and saves after every change
//! - **Shell**: `shell` module - the interactive numbered menu
//!
//! # Example
//!
//! ```no_run
//! use todolist::{Priority, TaskStore};
//!
//! let mut store = TaskStore::open("tasks.json");
//! store.add("Renew passport", Priority::High, Some("2025-06-01"))?;
//! for (i, task) in store.display_order().iter().enumerate() {
//!     println!("{}", todolist::formatting::format_task_line(i + 1, task));
//! }
//! # Ok::<(), todolist::StoreError>(())
//! ```

pub mod error;
pub mod formatting;
pub mod shell;
pub mod storage;
pub mod store;
pub mod task;
pub mod validation;

// Re-export commonly used types
pub use error::{StoreError, ValidationError};
pub use shell::Shell;
pub use storage::{DEFAULT_FILE, Storage};
pub use store::{Added, TaskStore};
pub use task::{Priority, Task};
