//! Question bank
//!
//! An ordered, fixed list of prompt/answer pairs. Loaded once at startup,
//! either from the built-in list or from a TOML file:
//!
//! ```toml
//! [[questions]]
//! prompt = "run"
//! answer = "lari"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{QuizError, Result};

/// A single word to translate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Word or phrase shown to the user
    #[serde(alias = "word")]
    pub prompt: String,
    /// Expected translation
    pub answer: String,
}

impl Question {
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }
}

/// On-disk layout of a question file
#[derive(Debug, Serialize, Deserialize)]
struct QuestionFile {
    questions: Vec<Question>,
}

/// Read-only ordered sequence of questions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

const BUILTIN: &[(&str, &str)] = &[
    ("run", "lari"),
    ("eat", "makan"),
    ("drink", "minum"),
    ("sleep", "tidur"),
    ("write", "menulis"),
    ("read", "membaca"),
    ("swim", "berenang"),
    ("sing", "bernyanyi"),
    ("walk", "berjalan"),
    ("buy", "membeli"),
    ("sell", "menjual"),
    ("open", "membuka"),
];

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// The list shipped with the binary
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN
                .iter()
                .map(|(prompt, answer)| Question::new(*prompt, *answer))
                .collect(),
        )
    }

    /// Load a bank from a TOML question file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            QuizError::ConfigError(format!(
                "Failed to read question file {}: {}",
                path.display(),
                e
            ))
        })?;

        let bank = Self::from_toml_str(&content).map_err(|e| match e {
            QuizError::ConfigError(msg) => {
                QuizError::ConfigError(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;
        log::debug!("loaded {} questions from {}", bank.len(), path.display());
        Ok(bank)
    }

    /// Parse and validate a bank from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: QuestionFile = toml::from_str(content)?;
        let bank = Self::new(file.questions);
        bank.validate()?;
        Ok(bank)
    }

    /// A usable bank has at least one question and no blank fields
    pub fn validate(&self) -> Result<()> {
        if self.questions.is_empty() {
            return Err(QuizError::ConfigError(
                "Question bank contains no questions".to_string(),
            ));
        }

        for (i, question) in self.questions.iter().enumerate() {
            if question.prompt.trim().is_empty() {
                return Err(QuizError::ConfigError(format!(
                    "Question {} has an empty prompt",
                    i + 1
                )));
            }
            if question.answer.trim().is_empty() {
                return Err(QuizError::ConfigError(format!(
                    "Question {} ({}) has an empty answer",
                    i + 1,
                    question.prompt
                )));
            }
        }

        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::builtin()
    }
}
