//! threadlist - todo lists that live in a chat message
//!
//! A thread's list (a demo link, a chords/lyrics link, a todo list and a
//! done list) is stored as the text of a single message. Every edit parses
//! that text, applies one change and renders it back.

pub mod cli;
pub mod codec;
pub mod domain;
pub mod storage;

pub use codec::{parse, render, CodecError};
pub use domain::{Command, DocumentKey, ListError, ListKind, ListState};
