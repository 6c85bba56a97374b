//! Interactive menu shell driving the task list engine.
//!
//! The shell owns the list and talks to it only through the engine API, so
//! the engine stays testable without console input and the shell itself can
//! be exercised against in-memory buffers.

use crate::list::{ListError, TaskList};
use log::{debug, info};
use std::io::{self, BufRead, Write};

const MENU: &str = "\nTask Management System Menu:\n\
    1. Add a new task\n\
    2. View all tasks\n\
    3. Remove the highest priority task\n\
    4. Remove a task by ID\n\
    5. Exit";

/// Menu-driven session over a reader/writer pair.
pub struct Shell<R, W> {
    list: TaskList,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a session with an empty task list.
    pub fn new(input: R, output: W) -> Self {
        Self {
            list: TaskList::new(),
            input,
            output,
        }
    }

    /// The current task list, front to back.
    pub fn list(&self) -> &TaskList {
        &self.list
    }

    /// Run the menu loop until the exit choice or end of input.
    ///
    /// End of input at any prompt ends the session cleanly, as if exit had
    /// been chosen. Engine error conditions are reported in-session and
    /// never fail the loop; only I/O errors propagate.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let choice = match self.read_int("Enter your choice: ")? {
                Some(n) => n,
                None => break,
            };
            debug!("menu choice: {}", choice);

            match choice {
                1 => {
                    if self.add_task()?.is_none() {
                        break;
                    }
                }
                2 => self.view_tasks()?,
                3 => self.remove_highest()?,
                4 => {
                    if self.remove_by_id()?.is_none() {
                        break;
                    }
                }
                5 => {
                    writeln!(self.output, "Exiting the system...")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
        self.output.flush()
    }

    /// Prompt for the new task's fields and insert it.
    fn add_task(&mut self) -> io::Result<Option<()>> {
        let Some(id) = self.read_int("Enter task ID: ")? else {
            return Ok(None);
        };
        self.prompt("Enter task description: ")?;
        let Some(description) = self.read_line()? else {
            return Ok(None);
        };
        let Some(priority) = self.read_int("Enter task priority: ")? else {
            return Ok(None);
        };

        self.list.insert(id, &description, priority);
        info!("added task {} at priority {}", id, priority);
        writeln!(self.output, "Task added successfully!")?;
        Ok(Some(()))
    }

    fn view_tasks(&mut self) -> io::Result<()> {
        if self.list.is_empty() {
            return writeln!(self.output, "No tasks available.");
        }
        for task in self.list.iter() {
            writeln!(self.output, "{}", task)?;
        }
        Ok(())
    }

    fn remove_highest(&mut self) -> io::Result<()> {
        match self.list.remove_highest() {
            Ok(task) => {
                info!("removed highest priority task {}", task.id);
                writeln!(self.output, "Highest priority task removed successfully!")
            }
            Err(_) => writeln!(self.output, "No tasks available to remove."),
        }
    }

    fn remove_by_id(&mut self) -> io::Result<Option<()>> {
        let Some(id) = self.read_int("Enter task ID to remove: ")? else {
            return Ok(None);
        };
        match self.list.remove_by_id(id) {
            Ok(task) => {
                info!("removed task {}", task.id);
                writeln!(self.output, "Task with ID {} removed successfully!", id)?;
            }
            Err(ListError::Empty) => {
                writeln!(self.output, "No tasks available to remove.")?;
            }
            Err(ListError::NotFound(_)) => {
                writeln!(self.output, "Task with ID {} not found.", id)?;
            }
        }
        Ok(Some(()))
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    /// Prompt until a line parses as an integer. Malformed input is reported
    /// and re-prompted, never fatal. Returns None at end of input.
    fn read_int(&mut self, prompt_text: &str) -> io::Result<Option<i64>> {
        loop {
            self.prompt(prompt_text)?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.trim().parse() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => writeln!(self.output, "Invalid number. Please try again.")?,
            }
        }
    }

    /// Read one line without its trailing newline. None at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(script: &str) -> String {
        let mut output = Vec::new();
        let mut shell = Shell::new(Cursor::new(script.to_string()), &mut output);
        shell.run().unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_exit_choice_ends_loop() {
        let out = run_session("5\n");
        assert!(out.contains("Task Management System Menu:"));
        assert!(out.ends_with("Exiting the system...\n"));
    }

    #[test]
    fn test_eof_ends_loop_cleanly() {
        let out = run_session("");
        assert!(out.contains("Enter your choice: "));
        assert!(!out.contains("Exiting"));
    }

    #[test]
    fn test_invalid_choice_redisplays_menu() {
        let out = run_session("9\n5\n");
        assert!(out.contains("Invalid choice. Please try again."));
        assert_eq!(out.matches("Task Management System Menu:").count(), 2);
    }

    #[test]
    fn test_malformed_choice_reprompts() {
        let out = run_session("two\n5\n");
        assert!(out.contains("Invalid number. Please try again."));
        // Menu is shown once; only the choice prompt repeats.
        assert_eq!(out.matches("Task Management System Menu:").count(), 1);
        assert_eq!(out.matches("Enter your choice: ").count(), 2);
    }

    #[test]
    fn test_add_then_view() {
        let out = run_session("1\n1\nWrite report\n10\n2\n5\n");
        assert!(out.contains("Task added successfully!"));
        assert!(out.contains("Task ID: 1, Description: Write report, Priority: 10"));
    }

    #[test]
    fn test_description_keeps_inner_whitespace() {
        let out = run_session("1\n3\n  spaced  out  \n2\n2\n5\n");
        assert!(out.contains("Task ID: 3, Description:   spaced  out  , Priority: 2"));
    }

    #[test]
    fn test_eof_mid_add_ends_session() {
        let out = run_session("1\n4\n");
        assert!(out.contains("Enter task description: "));
        assert!(!out.contains("Task added successfully!"));
    }

    #[test]
    fn test_view_empty_list() {
        let out = run_session("2\n5\n");
        assert!(out.contains("No tasks available.\n"));
    }

    #[test]
    fn test_remove_highest_empty_list() {
        let out = run_session("3\n5\n");
        assert!(out.contains("No tasks available to remove."));
    }

    #[test]
    fn test_remove_by_id_not_found() {
        let out = run_session("1\n1\na\n5\n4\n99\n5\n");
        assert!(out.contains("Task with ID 99 not found."));
    }

    #[test]
    fn test_remove_by_id_empty_list() {
        let out = run_session("4\n99\n5\n");
        assert!(out.contains("No tasks available to remove."));
    }
}
