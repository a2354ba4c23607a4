//! Quiz controller
//!
//! Two super-states: in progress while `index < N`, complete once
//! `index == N`. A complete quiz only accepts `reset`.

use crate::models::{Question, QuestionBank, Score};
use crate::store::{ProgressStore, INDEX_KEY, SCORE_KEY};

/// Shown after a submission that does not match
pub const WRONG_ANSWER_MESSAGE: &str = "Wrong answer. Try again.";
/// Shown after giving up on a question
pub const REVEALED_MESSAGE: &str = "Answer revealed. Type the correct answer to continue.";

/// Coarse quiz state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Complete,
}

/// Result of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Matched without a reveal; counted as correct
    Correct,
    /// Matched after a reveal; advanced without scoring
    AcceptedAfterReveal,
    /// Did not match; the draft stays in place
    WrongAnswer,
    /// The quiz is already complete
    Ignored,
}

/// Trim surrounding whitespace and lowercase
pub fn normalize_answer(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// Owns the quiz state and persists progress through a `ProgressStore`
#[derive(Debug)]
pub struct QuizController<S: ProgressStore> {
    bank: QuestionBank,
    store: S,
    index: usize,
    draft: String,
    error_message: Option<String>,
    revealed: bool,
    score: Score,
}

impl<S: ProgressStore> QuizController<S> {
    /// Create a controller, restoring saved progress from `store`
    pub fn new(bank: QuestionBank, store: S) -> Self {
        let index = restore_index(&store, bank.len());
        let score = restore_score(&store);
        log::debug!("restored progress: index {} of {}, {:?}", index, bank.len(), score);

        Self {
            bank,
            store,
            index,
            draft: String::new(),
            error_message: None,
            revealed: false,
            score,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Number of questions, `N`
    pub fn len(&self) -> usize {
        self.bank.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bank.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> Phase {
        if self.index < self.bank.len() {
            Phase::InProgress
        } else {
            Phase::Complete
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase() == Phase::Complete
    }

    /// The question being asked, `None` once complete
    pub fn current_question(&self) -> Option<&Question> {
        self.bank.get(self.index)
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// The answer to show after a surrender
    pub fn revealed_answer(&self) -> Option<&str> {
        if self.revealed {
            self.current_question().map(|q| q.answer.as_str())
        } else {
            None
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Replace the draft answer
    pub fn set_draft(&mut self, draft: impl Into<String>) {
        if !self.is_complete() {
            self.draft = draft.into();
        }
    }

    pub fn push_char(&mut self, c: char) {
        if !self.is_complete() {
            self.draft.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        self.draft.pop();
    }

    /// Set the draft and submit it
    pub fn submit_answer(&mut self, answer: impl Into<String>) -> SubmitOutcome {
        self.set_draft(answer);
        self.submit()
    }

    /// Check the current draft against the current answer
    pub fn submit(&mut self) -> SubmitOutcome {
        let Some(question) = self.current_question() else {
            return SubmitOutcome::Ignored;
        };

        if normalize_answer(&self.draft) != normalize_answer(&question.answer) {
            log::debug!("wrong answer for question {}", self.index);
            self.error_message = Some(WRONG_ANSWER_MESSAGE.to_string());
            return SubmitOutcome::WrongAnswer;
        }

        let outcome = if self.revealed {
            SubmitOutcome::AcceptedAfterReveal
        } else {
            self.score.add_correct();
            SubmitOutcome::Correct
        };
        log::debug!("question {} answered: {:?}", self.index, outcome);

        self.advance();
        self.persist();
        outcome
    }

    /// Reveal the answer. Returns false if it was already revealed or the
    /// quiz is complete.
    pub fn surrender(&mut self) -> bool {
        if self.revealed || self.is_complete() {
            return false;
        }

        self.revealed = true;
        self.score.add_surrendered();
        self.error_message = Some(REVEALED_MESSAGE.to_string());
        log::debug!("question {} surrendered", self.index);
        self.persist();
        true
    }

    /// Step back one question. Returns false if nothing moved.
    pub fn go_back(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }

        self.clear_question_state();
        if self.index == 0 {
            return false;
        }

        self.index -= 1;
        log::debug!("went back to question {}", self.index);
        self.persist();
        true
    }

    /// Start over if `confirm` agrees. Stored progress is removed.
    pub fn reset<F>(&mut self, confirm: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        if !confirm() {
            log::debug!("reset declined");
            return false;
        }

        self.index = 0;
        self.score = Score::default();
        self.clear_question_state();

        for key in [INDEX_KEY, SCORE_KEY] {
            if let Err(e) = self.store.remove(key) {
                log::warn!("failed to clear {}: {}", key, e);
            }
        }
        log::info!("quiz progress reset");
        true
    }

    fn advance(&mut self) {
        self.clear_question_state();
        self.index = (self.index + 1).min(self.bank.len());
    }

    fn clear_question_state(&mut self) {
        self.error_message = None;
        self.draft.clear();
        self.revealed = false;
    }

    /// Write index and score; failures are logged and otherwise ignored
    fn persist(&mut self) {
        if let Err(e) = self.store.set(INDEX_KEY, &self.index.to_string()) {
            log::warn!("failed to save quiz index: {}", e);
        }

        match serde_json::to_string(&self.score) {
            Ok(json) => {
                if let Err(e) = self.store.set(SCORE_KEY, &json) {
                    log::warn!("failed to save quiz score: {}", e);
                }
            }
            Err(e) => log::warn!("failed to serialize quiz score: {}", e),
        }
    }
}

fn restore_index<S: ProgressStore>(store: &S, len: usize) -> usize {
    let raw = match store.get(INDEX_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return 0,
        Err(e) => {
            log::warn!("failed to read saved index: {}", e);
            return 0;
        }
    };

    match raw.trim().parse::<usize>() {
        Ok(index) => index.min(len),
        Err(_) => {
            log::debug!("ignoring malformed saved index {:?}", raw);
            0
        }
    }
}

fn restore_score<S: ProgressStore>(store: &S) -> Score {
    let raw = match store.get(SCORE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Score::default(),
        Err(e) => {
            log::warn!("failed to read saved score: {}", e);
            return Score::default();
        }
    };

    serde_json::from_str(&raw).unwrap_or_else(|_| {
        log::debug!("ignoring malformed saved score {:?}", raw);
        Score::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn single() -> QuestionBank {
        QuestionBank::new(vec![Question::new("run", "lari")])
    }

    fn three() -> QuestionBank {
        QuestionBank::new(vec![
            Question::new("run", "lari"),
            Question::new("eat", "makan"),
            Question::new("drink", "minum"),
        ])
    }

    fn controller(bank: QuestionBank) -> QuizController<MemoryStore> {
        QuizController::new(bank, MemoryStore::new())
    }

    #[test]
    fn test_new_controller_defaults() {
        let quiz = controller(three());
        assert_eq!(quiz.index(), 0);
        assert_eq!(quiz.score(), Score::default());
        assert_eq!(quiz.phase(), Phase::InProgress);
        assert_eq!(quiz.current_question().unwrap().prompt, "run");
        assert!(quiz.error_message().is_none());
        assert!(!quiz.is_revealed());
    }

    #[test]
    fn test_normalize_answer() {
        assert_eq!(normalize_answer("  LaRi \t"), "lari");
        assert_eq!(normalize_answer(""), "");
    }

    #[test]
    fn test_correct_answer_with_case_and_whitespace() {
        let mut quiz = controller(single());
        assert_eq!(quiz.submit_answer("LARI "), SubmitOutcome::Correct);
        assert_eq!(quiz.score(), Score::new(1, 0));
        assert_eq!(quiz.index(), 1);
        assert_eq!(quiz.phase(), Phase::Complete);
        assert!(quiz.current_question().is_none());
    }

    #[test]
    fn test_wrong_answer_keeps_draft() {
        let mut quiz = controller(three());
        assert_eq!(quiz.submit_answer("jalan"), SubmitOutcome::WrongAnswer);
        assert_eq!(quiz.error_message(), Some(WRONG_ANSWER_MESSAGE));
        assert_eq!(quiz.draft(), "jalan");
        assert_eq!(quiz.index(), 0);
        assert_eq!(quiz.score(), Score::default());
    }

    #[test]
    fn test_surrender_then_submit_does_not_score() {
        let mut quiz = controller(single());
        assert!(quiz.surrender());
        assert!(quiz.is_revealed());
        assert_eq!(quiz.revealed_answer(), Some("lari"));
        assert_eq!(quiz.error_message(), Some(REVEALED_MESSAGE));
        assert_eq!(quiz.score(), Score::new(0, 1));
        assert_eq!(quiz.index(), 0);

        assert_eq!(quiz.submit_answer("lari"), SubmitOutcome::AcceptedAfterReveal);
        assert_eq!(quiz.index(), 1);
        assert_eq!(quiz.score(), Score::new(0, 1));
        assert!(!quiz.is_revealed());
    }

    #[test]
    fn test_surrender_is_idempotent() {
        let mut quiz = controller(three());
        assert!(quiz.surrender());
        assert!(!quiz.surrender());
        assert_eq!(quiz.score().surrendered, 1);
    }

    #[test]
    fn test_wrong_answer_after_reveal_stays_revealed() {
        let mut quiz = controller(three());
        quiz.surrender();
        assert_eq!(quiz.submit_answer("nope"), SubmitOutcome::WrongAnswer);
        assert!(quiz.is_revealed());
        assert_eq!(quiz.error_message(), Some(WRONG_ANSWER_MESSAGE));
    }

    #[test]
    fn test_go_back_clamps_at_zero() {
        let mut quiz = controller(three());
        quiz.set_draft("half typed");
        assert!(!quiz.go_back());
        assert_eq!(quiz.index(), 0);
        assert_eq!(quiz.draft(), "");
    }

    #[test]
    fn test_go_back_clears_reveal() {
        let mut quiz = controller(three());
        quiz.submit_answer("lari");
        quiz.surrender();
        assert!(quiz.go_back());
        assert_eq!(quiz.index(), 0);
        assert!(!quiz.is_revealed());
        assert!(quiz.error_message().is_none());
        // Score is a tally, not per-question
        assert_eq!(quiz.score(), Score::new(1, 1));
    }

    #[test]
    fn test_advance_stops_at_end() {
        let mut quiz = controller(three());
        quiz.submit_answer("lari");
        quiz.submit_answer("makan");
        assert_eq!(quiz.submit_answer("minum"), SubmitOutcome::Correct);
        assert_eq!(quiz.index(), 3);
        assert!(quiz.is_complete());

        assert_eq!(quiz.submit_answer("minum"), SubmitOutcome::Ignored);
        assert!(!quiz.surrender());
        assert!(!quiz.go_back());
        assert_eq!(quiz.index(), 3);
        assert_eq!(quiz.score(), Score::new(3, 0));
    }

    #[test]
    fn test_reset_confirmed() {
        let mut quiz = controller(three());
        quiz.submit_answer("lari");
        quiz.surrender();
        quiz.set_draft("mak");

        assert!(quiz.reset(|| true));
        assert_eq!(quiz.index(), 0);
        assert_eq!(quiz.score(), Score::default());
        assert_eq!(quiz.draft(), "");
        assert!(!quiz.is_revealed());
        assert!(quiz.error_message().is_none());
        assert!(quiz.store().is_empty());
    }

    #[test]
    fn test_reset_declined() {
        let mut quiz = controller(three());
        quiz.submit_answer("lari");
        quiz.surrender();

        assert!(!quiz.reset(|| false));
        assert_eq!(quiz.index(), 1);
        assert_eq!(quiz.score(), Score::new(1, 1));
        assert!(quiz.is_revealed());
    }

    #[test]
    fn test_reset_from_complete() {
        let mut quiz = controller(single());
        quiz.submit_answer("lari");
        assert!(quiz.is_complete());
        assert!(quiz.reset(|| true));
        assert_eq!(quiz.phase(), Phase::InProgress);
    }

    #[test]
    fn test_progress_written_after_changes() {
        let mut quiz = controller(three());
        quiz.submit_answer("lari");
        quiz.surrender();

        let store = quiz.store();
        assert_eq!(store.get(INDEX_KEY).unwrap().as_deref(), Some("1"));
        assert_eq!(
            store.get(SCORE_KEY).unwrap().as_deref(),
            Some(r#"{"correct":1,"surrendered":1}"#)
        );
    }

    #[test]
    fn test_restore_from_store() {
        let mut store = MemoryStore::new();
        store.set(INDEX_KEY, "2").unwrap();
        store.set(SCORE_KEY, r#"{"correct":1,"surrendered":1}"#).unwrap();

        let quiz = QuizController::new(three(), store);
        assert_eq!(quiz.index(), 2);
        assert_eq!(quiz.score(), Score::new(1, 1));
        assert_eq!(quiz.current_question().unwrap().prompt, "drink");
    }

    #[test]
    fn test_restore_malformed_values_uses_defaults() {
        let mut store = MemoryStore::new();
        store.set(INDEX_KEY, "two").unwrap();
        store.set(SCORE_KEY, "{broken").unwrap();

        let quiz = QuizController::new(three(), store);
        assert_eq!(quiz.index(), 0);
        assert_eq!(quiz.score(), Score::default());
    }

    #[test]
    fn test_restore_clamps_index_past_end() {
        let mut store = MemoryStore::new();
        store.set(INDEX_KEY, "42").unwrap();

        let quiz = QuizController::new(three(), store);
        assert_eq!(quiz.index(), 3);
        assert!(quiz.is_complete());
    }

    #[test]
    fn test_restored_max_score_does_not_wrap() {
        let mut store = MemoryStore::new();
        store
            .set(SCORE_KEY, r#"{"correct":4294967295,"surrendered":4294967295}"#)
            .unwrap();

        let mut quiz = QuizController::new(three(), store);
        assert_eq!(quiz.score(), Score::new(u32::MAX, u32::MAX));

        assert_eq!(quiz.submit_answer("lari"), SubmitOutcome::Correct);
        assert!(quiz.surrender());
        assert_eq!(quiz.score(), Score::new(u32::MAX, u32::MAX));
        assert_eq!(quiz.index(), 1);
        assert_eq!(
            quiz.store().get(SCORE_KEY).unwrap().as_deref(),
            Some(r#"{"correct":4294967295,"surrendered":4294967295}"#)
        );
    }

    #[test]
    fn test_draft_editing() {
        let mut quiz = controller(three());
        quiz.push_char('l');
        quiz.push_char('a');
        quiz.push_char('x');
        quiz.pop_char();
        assert_eq!(quiz.draft(), "la");
        quiz.push_char('r');
        quiz.push_char('i');
        assert_eq!(quiz.submit(), SubmitOutcome::Correct);
    }
}
