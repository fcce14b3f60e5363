//! Domain models for threadlist
//!
//! Contains the list model and its commands without any I/O concerns.

mod command;
mod key;
mod list;

pub use command::Command;
pub use key::{DocumentKey, KeyError};
pub use list::{ListError, ListKind, ListState};
