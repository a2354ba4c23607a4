//! TUI application module
//!
//! Contains the terminal user interface components, screen management,
//! and application state handling.

pub mod app;
pub mod screens;
pub mod state;
pub mod tui;

pub use app::{App, KeyHandler};
pub use screens::{ConfirmDialog, QuizScreen};
pub use state::{AppState, ConfirmAction, QuizAction, StateManager};
pub use tui::Tui;
