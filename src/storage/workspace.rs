//! Workspace management
//!
//! Handles workspace initialization and provides access to the store.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use super::{Config, Dispatcher, FileStore};

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("Not in a threadlist workspace. Run 'threadlist init' first.")]
    NotInWorkspace,
}

/// A directory holding thread lists under `.threadlist/`
pub struct Workspace {
    root: PathBuf,
    config: Config,
}

impl Workspace {
    /// Opens an existing workspace at the given path
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        if !root.join(".threadlist").is_dir() {
            return Err(WorkspaceError::NotInWorkspace.into());
        }

        let config = Config::for_workspace(&root)?;

        Ok(Self { root, config })
    }

    /// Opens the workspace at the current directory or a parent
    pub fn open_current() -> Result<Self> {
        let root = Config::find_workspace_root().ok_or(WorkspaceError::NotInWorkspace)?;

        Self::open(root)
    }

    /// Initializes a new workspace at the given path
    pub fn init(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let tl_dir = root.join(".threadlist");

        let threads_dir = tl_dir.join("threads");
        fs::create_dir_all(&threads_dir).with_context(|| {
            format!(
                "Failed to create threads directory: {}",
                threads_dir.display()
            )
        })?;

        let config_path = tl_dir.join("config.toml");
        if !config_path.exists() {
            let default_config = r#"# threadlist configuration

# Append " (author)" to items added with 'threadlist add'
attribute_items = true

# Name used for attribution (defaults to $THREADLIST_AUTHOR, then $USER)
# author = "your name"
"#;
            fs::write(&config_path, default_config)
                .with_context(|| format!("Failed to write config: {}", config_path.display()))?;
        }

        let gitignore_path = tl_dir.join(".gitignore");
        if !gitignore_path.exists() {
            let gitignore = r#"# Lock files and interrupted writes
threads/*.lock
threads/*.tmp
"#;
            fs::write(&gitignore_path, gitignore).with_context(|| {
                format!("Failed to write .gitignore: {}", gitignore_path.display())
            })?;
        }

        Self::open(root)
    }

    /// Returns the workspace root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the .threadlist directory path
    pub fn threadlist_dir(&self) -> PathBuf {
        self.root.join(".threadlist")
    }

    /// Returns the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the document store
    pub fn store(&self) -> FileStore {
        FileStore::for_workspace(&self.root)
    }

    /// Returns a dispatcher over the document store
    pub fn dispatcher(&self) -> Dispatcher<FileStore> {
        Dispatcher::new(self.store())
    }
}
