//! # Command-Line Interface
//!
//! User-facing commands and output formatting. The CLI plays the part of
//! a chat bot's slash commands: it owns every user-facing string and turns
//! list errors into messages.
//!
//! ## Command Groups
//!
//! | Group | Purpose | Examples |
//! |-------|---------|----------|
//! | Core | Workspace management | `init`, `threads` |
//! | Thread | Whole-list operations | `new`, `show`, `import` |
//! | Edit | One list edit each | `add`, `done`, `undo`, `rm`, `rm-done`, `clear-done`, `demo`, `lyrics` |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output:
//! ```bash
//! threadlist --verbose done 1187634521 2
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod edit;
mod output;
mod thread;

pub use app::{run, Cli, Commands};
pub use edit::EditCommands;
pub use output::{Output, OutputFormat};
