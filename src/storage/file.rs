//! File storage for list documents
//!
//! Each thread's rendering lives in `.threadlist/threads/{key}.md`, exactly
//! as it would appear in the chat message. A sibling `{key}.lock` file
//! serializes read-modify-write transactions across processes.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::DocumentStore;
use crate::domain::DocumentKey;

/// Exclusive lock on one document, released on drop
pub struct DocumentLock {
    _file: File,
}

/// Store for list documents as plain text files
pub struct FileStore {
    /// Directory containing document files
    dir: PathBuf,
}

impl FileStore {
    /// Creates a new file store at the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates the default store for a workspace
    pub fn for_workspace(root: &Path) -> Self {
        Self::new(root.join(".threadlist").join("threads"))
    }

    /// Returns the directory containing document files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the path to a document file
    pub fn document_path(&self, key: &DocumentKey) -> PathBuf {
        self.dir.join(format!("{}.md", key))
    }

    fn lock_path(&self, key: &DocumentKey) -> PathBuf {
        self.dir.join(format!("{}.lock", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create directory: {}", self.dir.display()))
    }
}

impl DocumentStore for FileStore {
    type Guard = DocumentLock;

    fn lock(&self, key: &DocumentKey) -> Result<DocumentLock> {
        self.ensure_dir()?;

        let path = self.lock_path(key);
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .with_context(|| format!("Failed to open lock file: {}", path.display()))?;

        file.lock_exclusive()
            .with_context(|| format!("Failed to lock thread {}", key))?;

        Ok(DocumentLock { _file: file })
    }

    fn fetch(&self, key: &DocumentKey) -> Result<Option<String>> {
        let path = self.document_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read thread file: {}", path.display()))?;

        Ok(Some(content))
    }

    fn overwrite(&self, key: &DocumentKey, text: &str) -> Result<()> {
        self.ensure_dir()?;

        let path = self.document_path(key);
        let temp_path = path.with_extension("md.tmp");

        // Write to temp file first
        fs::write(&temp_path, text)
            .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;

        // Atomic rename
        fs::rename(&temp_path, &path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }

    fn keys(&self) -> Result<Vec<DocumentKey>> {
        let mut keys = Vec::new();

        if !self.dir.exists() {
            return Ok(keys);
        }

        for entry in fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to read directory: {}", self.dir.display()))?
        {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.extension().is_some_and(|e| e == "md") {
                // Files that are not valid keys were not written by us
                if let Some(key) = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .and_then(|s| s.parse::<DocumentKey>().ok())
                {
                    keys.push(key);
                }
            }
        }

        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn key(s: &str) -> DocumentKey {
        s.parse().unwrap()
    }

    #[test]
    fn fetch_missing_document() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("threads"));

        assert_eq!(store.fetch(&key("nope")).unwrap(), None);
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn overwrite_and_fetch() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("threads"));

        store.overwrite(&key("t1"), "first").unwrap();
        store.overwrite(&key("t1"), "second\nline").unwrap();

        assert_eq!(store.fetch(&key("t1")).unwrap().as_deref(), Some("second\nline"));
    }

    #[test]
    fn atomic_write_no_temp_file_left() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("threads"));

        store.overwrite(&key("t1"), "text").unwrap();

        let path = store.document_path(&key("t1"));
        assert!(path.exists());
        assert!(!path.with_extension("md.tmp").exists());
    }

    #[test]
    fn keys_are_sorted_and_skip_foreign_files() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("threads"));

        store.overwrite(&key("b"), "x").unwrap();
        store.overwrite(&key("a"), "x").unwrap();
        let _lock = store.lock(&key("c")).unwrap();
        fs::write(store.dir().join("not a key.md"), "x").unwrap();
        fs::write(store.dir().join("notes.txt"), "x").unwrap();

        assert_eq!(store.keys().unwrap(), vec![key("a"), key("b")]);
    }

    #[test]
    fn lock_is_released_on_drop() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("threads"));

        drop(store.lock(&key("t1")).unwrap());
        let relocked = store.lock(&key("t1"));
        assert!(relocked.is_ok());
    }
}
