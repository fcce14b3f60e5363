//! List commands
//!
//! A command is one externally requested edit. Applying it calls exactly
//! one mutator on a [`ListState`].

use serde::Serialize;

use super::list::{ListError, ListState};

/// A single edit to a thread list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Append an item to the todo list
    Add { item: String },
    /// Mark a todo item as done
    Complete { index: i64 },
    /// Move a done item back to the todo list
    Undo { index: i64 },
    /// Delete a todo item
    DeletePending { index: i64 },
    /// Delete a done item
    DeleteDone { index: i64 },
    /// Delete every done item
    ClearDone,
    /// Set the demo link
    SetDemoLink { link: String },
    /// Set the chords and lyrics link
    SetReferenceLink { link: String },
}

impl Command {
    /// Applies the command to a list
    pub fn apply(&self, list: &mut ListState) -> Result<(), ListError> {
        match self {
            Command::Add { item } => {
                list.add_pending(item.as_str());
                Ok(())
            }
            Command::Complete { index } => list.complete_pending(*index),
            Command::Undo { index } => list.uncomplete_done(*index),
            Command::DeletePending { index } => list.delete_pending(*index),
            Command::DeleteDone { index } => list.delete_done(*index),
            Command::ClearDone => {
                list.clear_done();
                Ok(())
            }
            Command::SetDemoLink { link } => list.set_demo_link(link),
            Command::SetReferenceLink { link } => list.set_reference_link(link),
        }
    }

    /// Returns a short confirmation of what the command did
    pub fn summary(&self) -> String {
        match self {
            Command::Add { item } => format!("Added task: {}", item),
            Command::Complete { index } => format!("Marked item {} as done.", index),
            Command::Undo { index } => format!("Moved item {} back to the todo list.", index),
            Command::DeletePending { index } => {
                format!("Deleted item {} from the todo list.", index)
            }
            Command::DeleteDone { index } => format!("Deleted item {} from the done list.", index),
            Command::ClearDone => "Deleted all items from the done list.".to_string(),
            Command::SetDemoLink { link } => format!("Added demo link: {}", link.trim()),
            Command::SetReferenceLink { link } => format!("Added lyrics link: {}", link.trim()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_dispatches_to_mutators() {
        let mut list = ListState::new();
        let commands = [
            Command::Add { item: "a".into() },
            Command::Add { item: "b".into() },
            Command::Complete { index: 1 },
            Command::SetDemoLink { link: "https://demo".into() },
            Command::SetReferenceLink { link: "https://chords".into() },
        ];
        for cmd in &commands {
            cmd.apply(&mut list).unwrap();
        }

        assert_eq!(list.pending(), ["b"]);
        assert_eq!(list.done(), ["a"]);
        assert_eq!(list.demo_link(), Some("https://demo"));
        assert_eq!(list.reference_link(), Some("https://chords"));

        Command::Undo { index: 1 }.apply(&mut list).unwrap();
        assert_eq!(list.pending(), ["b", "a"]);

        Command::DeletePending { index: 2 }.apply(&mut list).unwrap();
        Command::Complete { index: 1 }.apply(&mut list).unwrap();
        Command::Add { item: "c".into() }.apply(&mut list).unwrap();
        Command::Complete { index: 1 }.apply(&mut list).unwrap();
        Command::DeleteDone { index: 1 }.apply(&mut list).unwrap();
        assert_eq!(list.done(), ["c"]);

        Command::ClearDone.apply(&mut list).unwrap();
        assert!(list.done().is_empty());
        assert!(list.pending().is_empty());
    }

    #[test]
    fn failed_command_reports_list_error() {
        let mut list = ListState::new();
        let err = Command::DeleteDone { index: 1 }.apply(&mut list).unwrap_err();
        assert!(matches!(err, ListError::IndexOutOfRange { .. }));
    }

    #[test]
    fn summaries() {
        assert_eq!(Command::Complete { index: 3 }.summary(), "Marked item 3 as done.");
        assert_eq!(
            Command::SetDemoLink { link: " https://x ".into() }.summary(),
            "Added demo link: https://x"
        );
    }

    #[test]
    fn serializes_with_tag() {
        let json = serde_json::to_value(Command::Undo { index: 2 }).unwrap();
        assert_eq!(json, serde_json::json!({"command": "undo", "index": 2}));
    }
}
