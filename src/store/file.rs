//! File-backed progress store
//!
//! Keeps all entries in one JSON document and rewrites it on every change.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ProgressStore;
use crate::{QuizError, Result, APP_NAME, PROGRESS_FILE};

/// Progress file structure for JSON persistence
#[derive(Debug, Serialize, Deserialize)]
struct ProgressFile {
    version: u32,
    updated_at: DateTime<Utc>,
    entries: BTreeMap<String, String>,
}

/// Progress store persisted to a JSON file
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, loading existing entries if the file exists
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = Self::load_entries(&path)?;
        log::debug!(
            "opened progress store {} ({} entries)",
            path.display(),
            entries.len()
        );
        Ok(Self { path, entries })
    }

    /// Open the store at `path`, starting empty if the file cannot be read.
    /// The unreadable file is overwritten on the next write.
    pub fn open_or_empty(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::load_entries(&path) {
            Ok(entries) => Self { path, entries },
            Err(e) => {
                log::warn!("{}; starting with empty progress", e);
                Self {
                    path,
                    entries: BTreeMap::new(),
                }
            }
        }
    }

    /// Get the standard progress file path
    /// Uses $DATA_HOME/verbquiz/progress.json or falls back to $HOME/.local/share/verbquiz/progress.json
    pub fn default_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir().ok_or_else(|| {
            QuizError::ConfigError("Unable to determine data directory".to_string())
        })?;

        Ok(data_dir.join(APP_NAME).join(PROGRESS_FILE))
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_entries(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            QuizError::PersistenceError(format!(
                "Failed to read progress file {}: {}",
                path.display(),
                e
            ))
        })?;

        let file: ProgressFile = serde_json::from_str(&content).map_err(|e| {
            QuizError::PersistenceError(format!(
                "Failed to parse progress file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(file.entries)
    }

    /// Drop every entry and delete the backing file, even if it could not
    /// be parsed
    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.delete_file()
    }

    fn flush(&self) -> Result<()> {
        if self.entries.is_empty() {
            return self.delete_file();
        }

        // Create parent directory if it doesn't exist
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                QuizError::PersistenceError(format!(
                    "Failed to create progress directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let file = ProgressFile {
            version: 1,
            updated_at: Utc::now(),
            entries: self.entries.clone(),
        };

        let content = serde_json::to_string_pretty(&file).map_err(|e| {
            QuizError::PersistenceError(format!("Failed to serialize progress: {}", e))
        })?;

        fs::write(&self.path, content).map_err(|e| {
            QuizError::PersistenceError(format!(
                "Failed to write progress file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(())
    }

    fn delete_file(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| {
                QuizError::PersistenceError(format!(
                    "Failed to remove progress file {}: {}",
                    self.path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}

impl ProgressStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
