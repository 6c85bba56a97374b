//! Shared test infrastructure for triage integration tests.
//!
//! Provides list-building and scripted-session helpers for consistent setup.

#![allow(dead_code)]

use std::io::Cursor;
use triage::{Shell, Task, TaskList};

/// Build a list by inserting (id, description, priority) triples in order.
pub fn build_list(tasks: &[(i64, &str, i64)]) -> TaskList {
    let mut list = TaskList::new();
    for (id, description, priority) in tasks {
        list.insert(*id, description, *priority);
    }
    list
}

/// IDs front to back.
pub fn ids(list: &TaskList) -> Vec<i64> {
    list.iter().map(|t| t.id).collect()
}

/// Priorities front to back.
pub fn priorities(list: &TaskList) -> Vec<i64> {
    list.iter().map(|t| t.priority).collect()
}

/// Assert the non-increasing priority invariant holds.
pub fn assert_ordered(list: &TaskList) {
    let ps = priorities(list);
    assert!(
        ps.windows(2).all(|w| w[0] >= w[1]),
        "priority order violated: {:?}",
        ps
    );
}

/// Run a scripted menu session and return its full output.
pub fn run_session(script: &str) -> String {
    let (output, _) = run_session_with_tasks(script);
    output
}

/// Run a scripted menu session and return (output, final task sequence).
pub fn run_session_with_tasks(script: &str) -> (String, Vec<Task>) {
    let mut output = Vec::new();
    let mut shell = Shell::new(Cursor::new(script.to_string()), &mut output);
    shell.run().expect("session failed");
    let tasks = shell.list().iter().cloned().collect();
    drop(shell);
    (String::from_utf8(output).expect("non-utf8 output"), tasks)
}
