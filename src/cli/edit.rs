//! Editing CLI commands
//!
//! Each subcommand maps to exactly one list command, run through the
//! workspace dispatcher.

use anyhow::Result;
use clap::Subcommand;

use super::output::Output;
use crate::domain::{Command, DocumentKey};
use crate::storage::Workspace;

#[derive(Subcommand)]
pub enum EditCommands {
    /// Add an item to the todo list
    Add {
        /// Thread key
        thread: String,

        /// Item text
        item: String,

        /// Name to attribute the item to (overrides config)
        #[arg(long)]
        by: Option<String>,

        /// Do not append the author's name
        #[arg(long)]
        no_attribution: bool,
    },

    /// Mark a todo item as done
    Done {
        /// Thread key
        thread: String,

        /// Item number in the todo list
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },

    /// Move a done item back to the todo list
    Undo {
        /// Thread key
        thread: String,

        /// Item number in the done list
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },

    /// Delete an item from the todo list
    Rm {
        /// Thread key
        thread: String,

        /// Item number in the todo list
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },

    /// Delete an item from the done list
    RmDone {
        /// Thread key
        thread: String,

        /// Item number in the done list
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },

    /// Delete every item from the done list
    ClearDone {
        /// Thread key
        thread: String,
    },

    /// Set the demo link
    Demo {
        /// Thread key
        thread: String,

        /// Link to the demo recording
        link: String,
    },

    /// Set the chords and lyrics link
    Lyrics {
        /// Thread key
        thread: String,

        /// Link to chords and lyrics
        link: String,
    },
}

pub fn run(cmd: EditCommands, output: &Output) -> Result<()> {
    let workspace = Workspace::open_current()?;

    let (thread, command) = match cmd {
        EditCommands::Add {
            thread,
            item,
            by,
            no_attribution,
        } => {
            let attribute = workspace.config().workspace.attribute_items && !no_attribution;
            let item = if attribute {
                let author = workspace.config().effective_author(by.as_deref());
                format!("{} ({})", item, author)
            } else {
                item
            };
            (thread, Command::Add { item })
        }
        EditCommands::Done { thread, index } => (thread, Command::Complete { index }),
        EditCommands::Undo { thread, index } => (thread, Command::Undo { index }),
        EditCommands::Rm { thread, index } => (thread, Command::DeletePending { index }),
        EditCommands::RmDone { thread, index } => (thread, Command::DeleteDone { index }),
        EditCommands::ClearDone { thread } => (thread, Command::ClearDone),
        EditCommands::Demo { thread, link } => (thread, Command::SetDemoLink { link }),
        EditCommands::Lyrics { thread, link } => (thread, Command::SetReferenceLink { link }),
    };

    let key: DocumentKey = thread.parse()?;
    output.verbose_ctx("edit", &format!("Thread {}: {:?}", key, command));

    let outcome = workspace.dispatcher().execute(&key, &command)?;

    output.edited(&key, &command, &outcome);
    Ok(())
}
