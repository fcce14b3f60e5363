//! Output formatting for CLI commands
//!
//! Every command prints through [`Output`]. Text output is what a chat
//! user would read: the list rendering itself, or a one-line confirmation.
//! JSON output is one compact object per command on stdout. Errors and
//! `--verbose` diagnostics go to stderr.

use serde::Serialize;
use serde_json::json;

use crate::domain::{Command, DocumentKey};
use crate::storage::{self, Outcome};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl From<storage::OutputFormat> for OutputFormat {
    fn from(format: storage::OutputFormat) -> Self {
        match format {
            storage::OutputFormat::Text => OutputFormat::Text,
            storage::OutputFormat::Json => OutputFormat::Json,
        }
    }
}

pub struct Output {
    format: OutputFormat,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    /// Prints a thread's list: the rendering as text, or list and rendering as JSON
    pub fn list(&self, key: &DocumentKey, outcome: &Outcome) {
        match self.format {
            OutputFormat::Text => println!("{}", outcome.rendering),
            OutputFormat::Json => self.json(&json!({
                "thread": key,
                "list": outcome.list,
                "rendering": outcome.rendering,
            })),
        }
    }

    /// Prints stored text exactly, even if it no longer parses
    pub fn raw(&self, key: &DocumentKey, text: &str) {
        match self.format {
            OutputFormat::Text => println!("{}", text),
            OutputFormat::Json => self.json(&json!({
                "thread": key,
                "text": text,
            })),
        }
    }

    pub fn threads(&self, keys: &[DocumentKey]) {
        match self.format {
            OutputFormat::Text if keys.is_empty() => {
                println!("No threads yet. Create one with 'threadlist new <thread>'.")
            }
            OutputFormat::Text => {
                for key in keys {
                    println!("{}", key);
                }
            }
            OutputFormat::Json => self.json(&keys),
        }
    }

    /// Confirms an edit with the command's summary
    pub fn edited(&self, key: &DocumentKey, command: &Command, outcome: &Outcome) {
        match self.format {
            OutputFormat::Text => println!("{}", command.summary()),
            OutputFormat::Json => self.json(&json!({
                "success": true,
                "thread": key,
                "command": command,
                "message": command.summary(),
                "list": outcome.list,
            })),
        }
    }

    pub fn imported(&self, key: &DocumentKey, outcome: &Outcome) {
        match self.format {
            OutputFormat::Text => println!(
                "Imported list for thread {} ({} pending, {} done)",
                key,
                outcome.list.pending().len(),
                outcome.list.done().len()
            ),
            OutputFormat::Json => self.list(key, outcome),
        }
    }

    /// Confirms a command that has no list to show
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Text => println!("{}", message),
            OutputFormat::Json => self.json(&json!({
                "success": true,
                "message": message,
            })),
        }
    }

    /// Prints an error message
    pub fn error(&self, message: &str) {
        match self.format {
            OutputFormat::Text => eprintln!("Error: {}", message),
            OutputFormat::Json => {
                eprintln!(
                    "{}",
                    json!({
                        "success": false,
                        "error": message
                    })
                );
            }
        }
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }

    fn json<T: Serialize>(&self, data: &T) {
        if let Ok(json) = serde_json::to_string(data) {
            println!("{}", json);
        }
    }
}
