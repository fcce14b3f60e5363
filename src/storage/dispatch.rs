//! Command dispatch over a document store
//!
//! Every edit runs as one transaction on one document: lock, fetch, parse,
//! apply a single [`Command`], render, overwrite. Any failure before the
//! final overwrite leaves the stored text untouched.

use thiserror::Error;

use super::DocumentStore;
use crate::codec::{self, CodecError};
use crate::domain::{Command, DocumentKey, ListError, ListState};

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("No list found for thread {0}. Create it with 'threadlist new {0}'.")]
    NotFound(DocumentKey),

    #[error("Thread {0} already has a list")]
    AlreadyExists(DocumentKey),

    #[error("Text does not look like a rendered list (missing the todo header)")]
    NotARendering,

    #[error(transparent)]
    List(#[from] ListError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Result of a successful dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// The list after the edit
    pub list: ListState,

    /// The text now stored for the thread
    pub rendering: String,
}

impl Outcome {
    fn from_list(list: ListState) -> Self {
        let rendering = codec::render(&list);
        Self { list, rendering }
    }
}

/// Runs list commands against stored documents
pub struct Dispatcher<S> {
    store: S,
}

impl<S: DocumentStore> Dispatcher<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stores a fresh, empty list for a new thread
    pub fn create(&self, key: &DocumentKey) -> Result<Outcome, DispatchError> {
        let _guard = self.store.lock(key)?;

        if self.store.fetch(key)?.is_some() {
            return Err(DispatchError::AlreadyExists(key.clone()));
        }

        let outcome = Outcome::from_list(ListState::new());
        self.store.overwrite(key, &outcome.rendering)?;
        Ok(outcome)
    }

    /// Reads and parses a thread's list
    pub fn show(&self, key: &DocumentKey) -> Result<Outcome, DispatchError> {
        let text = self
            .store
            .fetch(key)?
            .ok_or_else(|| DispatchError::NotFound(key.clone()))?;

        let list = codec::parse(&text)?;
        Ok(Outcome {
            list,
            rendering: text,
        })
    }

    /// Applies one command to a thread's list and stores the new rendering
    pub fn execute(&self, key: &DocumentKey, command: &Command) -> Result<Outcome, DispatchError> {
        let _guard = self.store.lock(key)?;

        let text = self
            .store
            .fetch(key)?
            .ok_or_else(|| DispatchError::NotFound(key.clone()))?;

        let mut list = codec::parse(&text)?;
        command.apply(&mut list)?;

        let outcome = Outcome::from_list(list);
        self.store.overwrite(key, &outcome.rendering)?;
        Ok(outcome)
    }

    /// Validates externally obtained message text and stores its
    /// canonical rendering, replacing any existing list
    pub fn import(&self, key: &DocumentKey, text: &str) -> Result<Outcome, DispatchError> {
        if !codec::looks_like_rendering(text) {
            return Err(DispatchError::NotARendering);
        }

        let list = codec::parse(text)?;
        let outcome = Outcome::from_list(list);

        let _guard = self.store.lock(key)?;
        self.store.overwrite(key, &outcome.rendering)?;
        Ok(outcome)
    }

    /// Lists the keys of all stored threads
    pub fn threads(&self) -> Result<Vec<DocumentKey>, DispatchError> {
        Ok(self.store.keys()?)
    }
}
