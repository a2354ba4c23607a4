//! Configuration management module
//!
//! Handles loading, saving, and validation of user preferences: where the
//! question bank comes from and where progress is kept.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::models::QuestionBank;
use crate::store::FileStore;
use crate::{QuizError, Result, APP_NAME, CONFIG_FILE};

/// Quiz configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// TOML question file; the built-in list is used when unset
    pub questions_file: Option<PathBuf>,
    /// Progress JSON file; the standard data location is used when unset
    pub progress_file: Option<PathBuf>,
}

impl QuizConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the question file
    pub fn with_questions_file(mut self, path: PathBuf) -> Self {
        self.questions_file = Some(path);
        self
    }

    /// Set the progress file
    pub fn with_progress_file(mut self, path: PathBuf) -> Self {
        self.progress_file = Some(path);
        self
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.questions_file {
            if !path.is_file() {
                return Err(QuizError::ConfigError(format!(
                    "Question file does not exist: {}",
                    path.display()
                )));
            }
        }

        if let Some(path) = &self.progress_file {
            if path.is_dir() {
                return Err(QuizError::ConfigError(format!(
                    "Progress file path is a directory: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }

    /// Build the question bank this configuration points at
    pub fn question_bank(&self) -> Result<QuestionBank> {
        match &self.questions_file {
            Some(path) => QuestionBank::from_file(path),
            None => Ok(QuestionBank::builtin()),
        }
    }

    /// Resolve the progress file location
    pub fn progress_path(&self) -> Result<PathBuf> {
        match &self.progress_file {
            Some(path) => Ok(path.clone()),
            None => FileStore::default_path(),
        }
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from `path`, default if the file doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            QuizError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            QuizError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Validate before saving
        self.validate()?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                QuizError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            QuizError::ConfigError(format!("Failed to serialize configuration: {}", e))
        })?;

        fs::write(path, content).map_err(|e| {
            QuizError::ConfigError(format!(
                "Failed to write config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/verbquiz/verbquiz.toml or falls back to $HOME/.config/verbquiz/verbquiz.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            QuizError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_toml_serialization() {
        let config = QuizConfig::new()
            .with_questions_file(PathBuf::from("/tmp/verbs.toml"))
            .with_progress_file(PathBuf::from("/tmp/progress.json"));
        let toml_str = toml::to_string(&config).expect("Failed to serialize to TOML");
        let deserialized: QuizConfig =
            toml::from_str(&toml_str).expect("Failed to deserialize from TOML");
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: QuizConfig = toml::from_str(r#"progress_file = "p.json""#).unwrap();
        assert_eq!(config.progress_file, Some(PathBuf::from("p.json")));
        assert!(config.questions_file.is_none());
    }

    #[test]
    fn test_config_file_path() {
        let path = QuizConfig::config_file_path();
        assert!(path.is_ok());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("verbquiz"));
        assert!(path.to_string_lossy().contains("verbquiz.toml"));
    }

    #[test]
    fn test_load_missing_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = QuizConfig::load_from(&temp_dir.path().join("none.toml")).unwrap();
        assert_eq!(config, QuizConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cfg").join("verbquiz.toml");
        let config = QuizConfig::new().with_progress_file(temp_dir.path().join("progress.json"));

        config.save_to(&path).unwrap();
        let loaded = QuizConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_validate_missing_questions_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = QuizConfig::new().with_questions_file(temp_dir.path().join("missing.toml"));
        assert!(matches!(config.validate(), Err(QuizError::ConfigError(_))));
    }

    #[test]
    fn test_validate_progress_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let config = QuizConfig::new().with_progress_file(temp_dir.path().to_path_buf());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_question_bank_defaults_to_builtin() {
        let bank = QuizConfig::default().question_bank().unwrap();
        assert_eq!(bank, QuestionBank::builtin());
    }
}
