//! Validation helpers for user input
//!
//! The shell runs every raw line through these before calling into the store.

use chrono::NaiveDate;
use std::num::IntErrorKind;

use crate::error::ValidationError;
use crate::task::Priority;

/// Date format accepted for due dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a priority name, ignoring case and surrounding whitespace
///
/// # Arguments
/// * `input` - Raw user input (e.g., "high", " Medium ")
///
/// # Returns
/// The matching Priority or `ValidationError::InvalidPriority`
pub fn parse_priority(input: &str) -> Result<Priority, ValidationError> {
    input.parse()
}

/// Parse an optional due date
///
/// # Returns
/// `Ok(None)` for blank input, `Ok(Some(date))` for a valid `YYYY-MM-DD` date,
/// and an error for anything else (including impossible dates like `2024-02-30`).
pub fn parse_due_date(input: &str) -> Result<Option<NaiveDate>, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(Some)
        .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))
}

/// Parse a task number as typed by the user
///
/// Any integer is accepted, including zero, negative and huge values; range
/// checking is left to the caller, which knows the list length.
///
/// # Arguments
/// * `input` - Raw user input (e.g., "3", "-1")
///
/// # Returns
/// The number, saturated to the `i64` range when it overflows, or
/// `ValidationError::NotANumber` when the input is not an integer at all
pub fn parse_task_number(input: &str) -> Result<i64, ValidationError> {
    let trimmed = input.trim();
    trimmed.parse::<i64>().or_else(|err| match err.kind() {
        IntErrorKind::PosOverflow => Ok(i64::MAX),
        IntErrorKind::NegOverflow => Ok(i64::MIN),
        _ => Err(ValidationError::NotANumber(trimmed.to_string())),
    })
}
