//! Progress persistence module
//!
//! A small string key-value surface the quiz writes its progress through.
//! `FileStore` survives restarts; `MemoryStore` is for tests and throwaway
//! sessions.

use std::collections::HashMap;

use crate::Result;

pub mod file;

pub use file::FileStore;

/// Key holding the current question index as decimal text
pub const INDEX_KEY: &str = "quizIndex";
/// Key holding the score as a JSON `{correct, surrendered}` record
pub const SCORE_KEY: &str = "quizScore";

/// String-keyed persistence for quiz progress
pub trait ProgressStore {
    /// Read a value, `None` if the key was never set or was removed
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Forget a key. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Volatile store backed by a `HashMap`
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ProgressStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
