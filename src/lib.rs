//! Triage: a priority-ordered task list with an interactive console shell.
//!
//! The engine keeps tasks sorted descending by priority, insertion-stable
//! among equal priorities. The shell wraps it in a numbered menu loop over
//! any reader/writer pair.
//!
//! # Example
//!
//! ```
//! use triage::TaskList;
//!
//! let mut list = TaskList::new();
//! list.insert(1, "Write report", 10);
//! list.insert(2, "Email team", 5);
//! list.insert(3, "Urgent fix", 20);
//!
//! // Highest priority sits at the front
//! let urgent = list.remove_highest().unwrap();
//! assert_eq!(urgent.id, 3);
//!
//! // Removal by ID reconnects the sequence
//! list.remove_by_id(2).unwrap();
//! assert_eq!(list.len(), 1);
//! ```

mod list;
mod types;

pub mod shell;

// Re-export public API
pub use list::{ListError, TaskList};
pub use shell::Shell;
pub use types::Task;
