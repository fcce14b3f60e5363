//! Document keys
//!
//! A key names the thread whose list a document holds, e.g. a chat thread
//! id. Keys double as file stems, so they are restricted to
//! `[A-Za-z0-9_-]{1,64}`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const MAX_KEY_LEN: usize = 64;

#[derive(Debug, Error, PartialEq)]
pub enum KeyError {
    #[error(
        "Invalid thread key: expected 1-{max} characters from [A-Za-z0-9_-], got '{0}'",
        max = MAX_KEY_LEN
    )]
    Invalid(String),
}

/// Key of a stored list document
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentKey(String);

impl DocumentKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DocumentKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let valid = !s.is_empty()
            && s.len() <= MAX_KEY_LEN
            && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if !valid {
            return Err(KeyError::Invalid(s.to_string()));
        }

        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for DocumentKey {
    type Error = KeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DocumentKey> for String {
    fn from(key: DocumentKey) -> Self {
        key.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_keys() {
        for raw in ["1187634521", "demo-thread", "Song_2", " padded "] {
            let key: DocumentKey = raw.parse().unwrap();
            assert_eq!(key.as_str(), raw.trim());
        }
    }

    #[test]
    fn reject_invalid_keys() {
        let too_long = "a".repeat(MAX_KEY_LEN + 1);
        for raw in ["", "../etc", "a b", "thread.md", too_long.as_str()] {
            assert!(raw.parse::<DocumentKey>().is_err(), "{raw:?}");
        }
    }

    #[test]
    fn serde_roundtrip() {
        let key: DocumentKey = "t-42".parse().unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"t-42\"");

        let back: DocumentKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
        assert!(serde_json::from_str::<DocumentKey>("\"a/b\"").is_err());
    }
}
