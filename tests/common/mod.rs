//! Common test utilities for integration tests

#![allow(dead_code)]

use std::io::Cursor;
use std::path::PathBuf;
use tempfile::TempDir;
use todolist::{Shell, TaskStore};

/// Temporary directory plus the task file path inside it
///
/// The file itself is not created; the directory is removed on drop.
pub fn temp_task_file() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    (dir, path)
}

/// Run the shell over `script`, one menu answer per line
///
/// The script is raw bytes so tests can feed input that is not valid UTF-8.
/// Returns everything the shell printed and the store it left behind.
pub fn run_script(store: TaskStore, script: impl AsRef<[u8]>) -> (String, TaskStore) {
    let mut output = Vec::new();
    let mut shell = Shell::new(store, Cursor::new(script.as_ref().to_vec()), &mut output);
    shell.run().unwrap();
    let store = shell.into_store();
    (String::from_utf8(output).unwrap(), store)
}

/// Raw JSON value of the task file
pub fn read_json(path: &PathBuf) -> serde_json::Value {
    let content = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}
