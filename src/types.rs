//! Core data types for the triage task list.

use std::fmt;

/// The core unit of work in triage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Caller-supplied identifier. Uniqueness is not enforced.
    pub id: i64,

    /// Short description of the work
    pub description: String,

    /// Urgency score; higher values sort earlier in the list
    pub priority: i64,
}

impl Task {
    pub fn new(id: i64, description: &str, priority: i64) -> Self {
        Self {
            id,
            description: description.to_string(),
            priority,
        }
    }
}

impl fmt::Display for Task {
    /// One-line listing form used by the view menu.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task ID: {}, Description: {}, Priority: {}",
            self.id, self.description, self.priority
        )
    }
}
