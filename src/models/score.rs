//! Score tally persisted under the `quizScore` key.

use serde::{Deserialize, Serialize};

/// Running score: answers given without help, and questions given up on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub correct: u32,
    pub surrendered: u32,
}

impl Score {
    pub fn new(correct: u32, surrendered: u32) -> Self {
        Self {
            correct,
            surrendered,
        }
    }

    /// Count an unaided correct answer; saturates at `u32::MAX`
    pub fn add_correct(&mut self) {
        self.correct = self.correct.saturating_add(1);
    }

    /// Count a surrender; saturates at `u32::MAX`
    pub fn add_surrendered(&mut self) {
        self.surrendered = self.surrendered.saturating_add(1);
    }

    /// One-line summary for status bars and the final screen
    pub fn summary(&self) -> String {
        format!("{} correct, {} surrendered", self.correct, self.surrendered)
    }
}
