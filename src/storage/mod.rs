//! # Storage Layer
//!
//! Persistence for thread lists. The rendered message text is the only
//! stored representation; nothing else about a list is written anywhere.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Thread lists | Rendered message text | `.threadlist/threads/{key}.md` |
//! | Config | TOML | `.threadlist/config.toml` |
//!
//! ## Concurrency Safety
//!
//! - [`Dispatcher`] runs each edit under [`DocumentStore::lock`]
//! - [`FileStore`] locks a per-thread lock file (`fs2`) and writes
//!   atomically (temp file + rename)
//! - [`MemoryStore`] leaves serialization to the caller
//!
//! ## Key Types
//!
//! - [`Workspace`] - Entry point for accessing a `.threadlist/` directory
//! - [`DocumentStore`] - Fetch/overwrite rendered lists by thread key
//! - [`Dispatcher`] - Runs one [`Command`](crate::domain::Command) per transaction
//! - [`Config`] - Workspace and global configuration

mod config;
mod dispatch;
mod file;
mod memory;
mod workspace;

use anyhow::Result;

use crate::domain::DocumentKey;

pub use config::{Config, ConfigError, GlobalConfig, OutputFormat, WorkspaceConfig};
pub use dispatch::{DispatchError, Dispatcher, Outcome};
pub use file::{DocumentLock, FileStore};
pub use memory::MemoryStore;
pub use workspace::{Workspace, WorkspaceError};

/// Durable home of rendered lists, one document per thread
pub trait DocumentStore {
    /// Held for the duration of a read-modify-write transaction
    type Guard;

    /// Blocks until no other transaction holds the document
    fn lock(&self, key: &DocumentKey) -> Result<Self::Guard>;

    /// Returns the stored text, or `None` if the thread has no list
    fn fetch(&self, key: &DocumentKey) -> Result<Option<String>>;

    /// Replaces the stored text (last write wins)
    fn overwrite(&self, key: &DocumentKey, text: &str) -> Result<()>;

    /// Returns the keys of all stored documents, sorted
    fn keys(&self) -> Result<Vec<DocumentKey>>;
}
