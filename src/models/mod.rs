//! Data models module
//!
//! Contains the question bank and the score tally.

pub mod question;
pub mod score;

// Re-export commonly used types
pub use question::{Question, QuestionBank};
pub use score::Score;
