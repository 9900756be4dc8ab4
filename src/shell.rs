//! Interactive menu loop
//!
//! The shell reads one line per prompt from any [`BufRead`] and writes to any
//! [`Write`], so the whole session can be driven from a byte buffer in tests.
//! Only I/O failures on the terminal itself end the loop with an error;
//! everything else is reported and the menu is shown again.

use std::io::{self, BufRead, Write};
use tracing::debug;

use crate::error::StoreError;
use crate::formatting::format_tasks;
use crate::store::TaskStore;
use crate::validation::{parse_priority, parse_task_number};

const MENU: &str = "\n--- To-Do List App ---\n\
                    1. View Tasks\n\
                    2. Add Task\n\
                    3. Mark Task as Done\n\
                    4. Remove Task\n\
                    5. Exit";

/// Menu entries, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    View,
    Add,
    MarkDone,
    Remove,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::View),
            "2" => Some(MenuChoice::Add),
            "3" => Some(MenuChoice::MarkDone),
            "4" => Some(MenuChoice::Remove),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

pub struct Shell<R, W> {
    store: TaskStore,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(store: TaskStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    pub fn into_store(self) -> TaskStore {
        self.store
    }

    /// Run until the user picks Exit or input ends
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(line) = self.prompt("\nEnter your choice: ")? else {
                debug!("input closed, leaving menu");
                writeln!(self.output)?;
                return Ok(());
            };

            let keep_going = match MenuChoice::parse(&line) {
                Some(MenuChoice::View) => self.show_tasks().map(|_| true)?,
                Some(MenuChoice::Add) => self.add_task()?,
                Some(MenuChoice::MarkDone) => self.mark_task_done()?,
                Some(MenuChoice::Remove) => self.remove_task()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting the app.")?;
                    false
                }
                None => {
                    writeln!(self.output, "Invalid choice. Please select a valid option.")?;
                    true
                }
            };
            if !keep_going {
                return Ok(());
            }
        }
    }

    /// Print `message`, then read one line without its line ending
    ///
    /// Returns `None` at end of input. Bytes that are not valid UTF-8 become U+FFFD.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn show_tasks(&mut self) -> io::Result<()> {
        let view = format_tasks(&self.store.display_order());
        writeln!(self.output, "{view}")
    }

    fn report_store_error(&mut self, err: &StoreError) -> io::Result<()> {
        match err {
            StoreError::InvalidTaskNumber { .. } => writeln!(self.output, "Invalid task number."),
            StoreError::Save(_) => writeln!(self.output, "{err}"),
        }
    }

    /// Returns `Ok(false)` when input ended mid-way
    fn add_task(&mut self) -> io::Result<bool> {
        let Some(description) = self.prompt("\nEnter the task: ")? else {
            return Ok(false);
        };

        let priority = loop {
            let Some(input) = self.prompt("Enter priority (Low, Medium, High): ")? else {
                return Ok(false);
            };
            match parse_priority(&input) {
                Ok(priority) => break priority,
                Err(_) => writeln!(
                    self.output,
                    "Invalid priority. Please choose from Low, Medium, or High."
                )?,
            }
        };

        let Some(due_date) = self.prompt("Enter due date (YYYY-MM-DD) or leave blank: ")? else {
            return Ok(false);
        };

        match self.store.add(description.as_str(), priority, Some(due_date.as_str())) {
            Ok(added) => {
                if added.due_date_warning.is_some() {
                    writeln!(self.output, "Invalid date format. Using 'No due date'.")?;
                }
                writeln!(self.output, "Task '{}' added!", added.task.description)?;
            }
            Err(err) => self.report_store_error(&err)?,
        }
        Ok(true)
    }

    /// Show the list and read the task number to act on
    ///
    /// Returns `Ok(None)` at end of input and `Ok(Some(None))` when the input was not a number.
    fn read_task_number(&mut self, message: &str) -> io::Result<Option<Option<usize>>> {
        self.show_tasks()?;
        let Some(input) = self.prompt(message)? else {
            return Ok(None);
        };
        match parse_task_number(&input) {
            // Negative numbers map to position 0, which the store rejects as out of range
            Ok(number) => Ok(Some(Some(usize::try_from(number).unwrap_or(0)))),
            Err(err) => {
                debug!(error = %err, "rejected task number");
                writeln!(self.output, "Please enter a valid task number.")?;
                Ok(Some(None))
            }
        }
    }

    fn mark_task_done(&mut self) -> io::Result<bool> {
        let position = match self.read_task_number("\nEnter the task number to mark as done: ")? {
            None => return Ok(false),
            Some(None) => return Ok(true),
            Some(Some(position)) => position,
        };

        let marked = self
            .store
            .mark_done(position)
            .map(|task| task.description.clone());
        match marked {
            Ok(description) => writeln!(self.output, "Task '{description}' marked as done!")?,
            Err(err) => self.report_store_error(&err)?,
        }
        Ok(true)
    }

    fn remove_task(&mut self) -> io::Result<bool> {
        let position = match self.read_task_number("\nEnter the task number to remove: ")? {
            None => return Ok(false),
            Some(None) => return Ok(true),
            Some(Some(position)) => position,
        };

        match self.store.remove(position) {
            Ok(task) => writeln!(self.output, "Task '{}' removed!", task.description)?,
            Err(err) => self.report_store_error(&err)?,
        }
        Ok(true)
    }
}
