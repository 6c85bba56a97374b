//! Priority-ordered task list engine.
//!
//! The list is kept non-increasing by priority at all times. Among equal
//! priorities, earlier insertions stay ahead of later ones: a new task is
//! placed after the run of tasks whose priority is >= its own.

use crate::types::Task;

/// Errors reported by list operations.
///
/// Both conditions are reported, not fatal: the list is left unchanged and
/// the caller decides how to surface the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// A removal was attempted on an empty list.
    Empty,
    /// No task with the requested ID exists.
    NotFound(i64),
}

impl std::fmt::Display for ListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListError::Empty => write!(f, "no tasks available to remove"),
            ListError::NotFound(id) => write!(f, "task with ID {} not found", id),
        }
    }
}

impl std::error::Error for ListError {}

/// An owned sequence of tasks, sorted descending by priority and
/// insertion-stable among equal priorities.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Insert a new task at its priority position.
    ///
    /// The task lands immediately before the first existing task whose
    /// priority is strictly less than its own, so equal-priority tasks keep
    /// insertion order. Duplicate IDs are permitted. Never fails.
    pub fn insert(&mut self, id: i64, description: &str, priority: i64) -> &Task {
        let pos = self
            .tasks
            .iter()
            .position(|t| t.priority < priority)
            .unwrap_or(self.tasks.len());
        self.tasks.insert(pos, Task::new(id, description, priority));
        &self.tasks[pos]
    }

    /// Remove and return the front task (highest priority by invariant).
    pub fn remove_highest(&mut self) -> Result<Task, ListError> {
        if self.tasks.is_empty() {
            return Err(ListError::Empty);
        }
        Ok(self.tasks.remove(0))
    }

    /// Remove and return the first task, front to back, whose ID matches.
    ///
    /// With duplicate IDs the highest-positioned match wins.
    pub fn remove_by_id(&mut self, id: i64) -> Result<Task, ListError> {
        if self.tasks.is_empty() {
            return Err(ListError::Empty);
        }
        let pos = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(ListError::NotFound(id))?;
        Ok(self.tasks.remove(pos))
    }

    /// Enumerate tasks front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
