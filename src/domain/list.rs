//! List domain model
//!
//! A thread list holds two links and two ordered item sequences. Items are
//! addressed by 1-based positions from the outside; the offset conversion
//! happens once, on entry to each mutator.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::codec::layout::UNSET_LINK;

/// Which of the two item sequences an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Pending,
    Done,
}

impl ListKind {
    /// Returns a display label for the list
    pub fn label(&self) -> &'static str {
        match self {
            ListKind::Pending => "todo list",
            ListKind::Done => "done list",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ListError {
    #[error("Item {index} does not exist in the {list} ({len} item(s))")]
    IndexOutOfRange {
        list: ListKind,
        index: i64,
        len: usize,
    },

    #[error("Invalid link '{link}': {reason}")]
    InvalidLink { link: String, reason: &'static str },
}

/// State of one thread's list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListState {
    /// Demo link, `None` while unset
    demo_link: Option<String>,

    /// Chords and lyrics link, `None` while unset
    reference_link: Option<String>,

    /// Items still to do, in display order
    pending: Vec<String>,

    /// Completed items, in completion order
    done: Vec<String>,
}

impl ListState {
    /// Creates an empty list with both links unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a state from already-validated parts
    pub(crate) fn from_parts(
        demo_link: Option<String>,
        reference_link: Option<String>,
        pending: Vec<String>,
        done: Vec<String>,
    ) -> Self {
        Self {
            demo_link,
            reference_link,
            pending,
            done,
        }
    }

    pub fn demo_link(&self) -> Option<&str> {
        self.demo_link.as_deref()
    }

    pub fn reference_link(&self) -> Option<&str> {
        self.reference_link.as_deref()
    }

    pub fn pending(&self) -> &[String] {
        &self.pending
    }

    pub fn done(&self) -> &[String] {
        &self.done
    }

    /// Returns the items of the given list
    pub fn items(&self, list: ListKind) -> &[String] {
        match list {
            ListKind::Pending => &self.pending,
            ListKind::Done => &self.done,
        }
    }

    /// Appends an item to the pending list
    pub fn add_pending(&mut self, item: impl Into<String>) {
        self.pending.push(item.into());
    }

    /// Moves a pending item to the end of the done list
    pub fn complete_pending(&mut self, index: i64) -> Result<(), ListError> {
        let offset = self.offset(ListKind::Pending, index)?;
        let item = self.pending.remove(offset);
        self.done.push(item);
        Ok(())
    }

    /// Moves a done item back to the end of the pending list
    pub fn uncomplete_done(&mut self, index: i64) -> Result<(), ListError> {
        let offset = self.offset(ListKind::Done, index)?;
        let item = self.done.remove(offset);
        self.pending.push(item);
        Ok(())
    }

    /// Removes a pending item
    pub fn delete_pending(&mut self, index: i64) -> Result<(), ListError> {
        let offset = self.offset(ListKind::Pending, index)?;
        self.pending.remove(offset);
        Ok(())
    }

    /// Removes a done item
    pub fn delete_done(&mut self, index: i64) -> Result<(), ListError> {
        let offset = self.offset(ListKind::Done, index)?;
        self.done.remove(offset);
        Ok(())
    }

    /// Removes every done item
    pub fn clear_done(&mut self) {
        self.done.clear();
    }

    pub fn set_demo_link(&mut self, link: &str) -> Result<(), ListError> {
        self.demo_link = Some(validate_link(link)?);
        Ok(())
    }

    pub fn set_reference_link(&mut self, link: &str) -> Result<(), ListError> {
        self.reference_link = Some(validate_link(link)?);
        Ok(())
    }

    /// Converts a 1-based index into an offset into `list`
    fn offset(&self, list: ListKind, index: i64) -> Result<usize, ListError> {
        let len = self.items(list).len();
        usize::try_from(index)
            .ok()
            .filter(|&i| (1..=len).contains(&i))
            .map(|i| i - 1)
            .ok_or(ListError::IndexOutOfRange { list, index, len })
    }
}

/// Trims a link and checks it can be stored on a single rendered line
fn validate_link(link: &str) -> Result<String, ListError> {
    let trimmed = link.trim();

    let reason = if trimmed.is_empty() {
        Some("link is empty")
    } else if trimmed.chars().any(char::is_control) {
        Some("link contains control characters")
    } else if trimmed == UNSET_LINK {
        Some("link matches the unset placeholder")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ListError::InvalidLink {
            link: link.to_string(),
            reason,
        }),
        None => Ok(trimmed.to_string()),
    }
}
