//! Formatting helpers for the task view

use crate::task::Task;

/// Format one numbered line of the task view
///
/// # Arguments
/// * `position` - 1-based number shown in front of the task
/// * `task` - Task to describe
///
/// # Returns
/// A single line without a trailing newline
pub fn format_task_line(position: usize, task: &Task) -> String {
    let due = task
        .due_date
        .map(|date| date.to_string())
        .unwrap_or_else(|| "No due date".to_string());
    format!(
        "{}. {} [{}] | Priority: {} | Due: {}",
        position,
        task.description,
        task.status_label(),
        task.priority,
        due
    )
}

/// Format tasks, already in display order, into the numbered view
///
/// Numbering starts at 1 and is what the user types back to pick a task.
///
/// # Arguments
/// * `tasks` - Tasks sorted the way they should be numbered
///
/// # Returns
/// The header followed by one line per task, without a trailing newline,
/// or "No tasks to show." when there is nothing to list
pub fn format_tasks(tasks: &[&Task]) -> String {
    if tasks.is_empty() {
        return "No tasks to show.".to_string();
    }

    let mut result = String::from("\nYour To-Do List:");
    for (index, task) in tasks.iter().enumerate() {
        result.push('\n');
        result.push_str(&format_task_line(index + 1, task));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Priority;
    use chrono::NaiveDate;

    #[test]
    fn test_format_task_line_without_due_date() {
        let task = Task::new("Water plants", Priority::Low, None);
        assert_eq!(
            format_task_line(2, &task),
            "2. Water plants [Not Done] | Priority: Low | Due: No due date"
        );
    }

    #[test]
    fn test_format_task_line_done_with_due_date() {
        let mut task = Task::new("File taxes", Priority::High, NaiveDate::from_ymd_opt(2025, 4, 15));
        task.done = true;
        assert_eq!(
            format_task_line(1, &task),
            "1. File taxes [Done] | Priority: High | Due: 2025-04-15"
        );
    }

    #[test]
    fn test_format_tasks_empty() {
        assert_eq!(format_tasks(&[]), "No tasks to show.");
    }

    #[test]
    fn test_format_tasks_numbers_from_one() {
        let a = Task::new("A", Priority::High, None);
        let b = Task::new("B", Priority::Low, None);
        let out = format_tasks(&[&a, &b]);
        assert!(out.starts_with("\nYour To-Do List:\n1. A "));
        assert!(out.contains("\n2. B "));
        assert!(!out.ends_with('\n'));
    }
}
