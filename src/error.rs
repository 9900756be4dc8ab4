use thiserror::Error;

/// Rejected user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid priority '{0}'. Please choose from Low, Medium, or High.")]
    InvalidPriority(String),

    #[error("Invalid date format '{0}'. Use YYYY-MM-DD (e.g., '2025-03-15')")]
    InvalidDate(String),

    #[error("'{0}' is not a valid task number")]
    NotANumber(String),
}

/// Failure of a [`TaskStore`](crate::TaskStore) operation
#[derive(Debug, Error)]
pub enum StoreError {
    /// Position outside `1..=count`; the list was not touched
    #[error("Invalid task number {position} (there are {count} task(s))")]
    InvalidTaskNumber { position: usize, count: usize },

    /// The in-memory change was applied but could not be written to disk
    #[error("Failed to save tasks: {0:#}")]
    Save(#[source] anyhow::Error),
}
