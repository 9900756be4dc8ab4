use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Task priority
///
/// Ordered `Low < Medium < High`; the display view lists higher priorities first.
/// Serialized with its capitalized name to match the storage file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    /// Accepts any capitalization (`"high"`, `"HIGH"`, `"High"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(ValidationError::InvalidPriority(s.trim().to_string())),
        }
    }
}

/// A single to-do item
///
/// Field names on disk follow the storage file format: the description is
/// stored under `task`, and a missing due date is written as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// What needs doing
    #[serde(rename = "task")]
    pub description: String,
    /// Completion flag
    pub done: bool,
    pub priority: Priority,
    /// Optional due date (format: YYYY-MM-DD)
    pub due_date: Option<NaiveDate>,
}

impl Task {
    /// Create a new, not yet completed task
    pub fn new(
        description: impl Into<String>,
        priority: Priority,
        due_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            description: description.into(),
            done: false,
            priority,
            due_date,
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.done { "Done" } else { "Not Done" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::Medium < Priority::High);
    }

    #[test]
    fn test_priority_from_str_ignores_case() {
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("MEDIUM".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!(" Low ".parse::<Priority>().unwrap(), Priority::Low);
    }

    #[test]
    fn test_priority_from_str_rejects_unknown() {
        let err = "urgent".parse::<Priority>().unwrap_err();
        assert_eq!(err, ValidationError::InvalidPriority("urgent".to_string()));
    }

    #[test]
    fn test_task_new_is_not_done() {
        let task = Task::new("Write report", Priority::High, None);
        assert!(!task.done);
        assert_eq!(task.status_label(), "Not Done");
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn test_task_serializes_with_storage_keys() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        let task = Task::new("Buy gifts", Priority::Medium, Some(date));
        let value = serde_json::to_value(&task).unwrap();

        assert_eq!(value["task"], "Buy gifts");
        assert_eq!(value["done"], false);
        assert_eq!(value["priority"], "Medium");
        assert_eq!(value["due_date"], "2024-12-25");
    }

    #[test]
    fn test_task_without_due_date_serializes_null() {
        let task = Task::new("Call mom", Priority::Low, None);
        let value = serde_json::to_value(&task).unwrap();
        assert!(value["due_date"].is_null());
    }

    #[test]
    fn test_task_rejects_unknown_priority_on_load() {
        let json = r#"{"task": "x", "done": false, "priority": "Urgent", "due_date": null}"#;
        assert!(serde_json::from_str::<Task>(json).is_err());
    }
}
