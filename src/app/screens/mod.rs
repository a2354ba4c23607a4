//! TUI screen components
//!
//! Contains individual screen implementations for different application states.

pub mod confirm;
pub mod quiz;

pub use confirm::ConfirmDialog;
pub use quiz::QuizScreen;
