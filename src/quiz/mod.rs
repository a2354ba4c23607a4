//! Quiz state machine
//!
//! `QuizController` owns the quiz state and is the only place it changes.

pub mod controller;

pub use controller::{
    normalize_answer, Phase, QuizController, SubmitOutcome, REVEALED_MESSAGE,
    WRONG_ANSWER_MESSAGE,
};
