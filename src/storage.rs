use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::task::Task;

/// Default storage file, relative to the working directory
pub const DEFAULT_FILE: &str = "tasks.json";

/// JSON file holding the whole task list
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Read the task list
    ///
    /// A missing, unreadable or malformed file yields an empty list instead of an error.
    pub fn load(&self) -> Vec<Task> {
        let content = match fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.file_path.display(), "no task file yet, starting empty");
                return Vec::new();
            }
            Err(err) => {
                warn!(path = %self.file_path.display(), error = %err, "cannot read task file, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Task>>(&content) {
            Ok(tasks) => {
                debug!(path = %self.file_path.display(), count = tasks.len(), "loaded tasks");
                tasks
            }
            Err(err) => {
                warn!(path = %self.file_path.display(), error = %err, "task file is not a valid task list, starting empty");
                Vec::new()
            }
        }
    }

    /// Overwrite the file with the full list, pretty-printed with four-space indentation
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        tasks.serialize(&mut ser).context("failed to serialize tasks")?;

        fs::write(&self.file_path, buf)
            .with_context(|| format!("failed to write {}", self.file_path.display()))?;
        debug!(path = %self.file_path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }
}
