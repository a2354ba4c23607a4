//! Application state management
//!
//! Handles screen transitions and maps keyboard events to quiz actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application screens/states
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppState {
    /// Question card with the answer input
    #[default]
    Quiz,
    /// Yes/no dialog in front of a reset
    ConfirmReset,
}

/// Actions that can be triggered by keyboard input on the quiz screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    /// Append a character to the draft answer
    Input(char),
    /// Delete the last character (Backspace)
    DeleteChar,
    /// Check the draft (Enter)
    Submit,
    /// Reveal the answer (Ctrl+G, F2)
    Surrender,
    /// Previous question (Ctrl+P, PageUp)
    Previous,
    /// Ask to start over (Ctrl+R)
    Reset,
    /// Quit application (Esc, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Answer to the reset dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    /// y, Y, Enter
    Yes,
    /// n, N, Esc
    No,
    /// Ctrl+C
    Quit,
    None,
}

/// Application state manager
#[derive(Debug, Default)]
pub struct StateManager {
    current_state: AppState,
    should_quit: bool,
}

impl StateManager {
    /// Create a new state manager starting at the quiz screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current application state
    pub fn current_state(&self) -> AppState {
        self.current_state
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Transition to a new state
    pub fn transition_to(&mut self, new_state: AppState) {
        self.current_state = new_state;
    }

    /// Convert keyboard event to a quiz screen action
    pub fn key_to_quiz_action(key: KeyEvent) -> QuizAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => QuizAction::Quit,
            KeyCode::Char('g') if ctrl => QuizAction::Surrender,
            KeyCode::Char('p') if ctrl => QuizAction::Previous,
            KeyCode::Char('r') if ctrl => QuizAction::Reset,
            KeyCode::Char(_) if ctrl => QuizAction::None,
            KeyCode::Char(c) => QuizAction::Input(c),

            KeyCode::F(2) => QuizAction::Surrender,
            KeyCode::PageUp => QuizAction::Previous,
            KeyCode::Backspace => QuizAction::DeleteChar,
            KeyCode::Enter => QuizAction::Submit,
            KeyCode::Esc => QuizAction::Quit,

            _ => QuizAction::None,
        }
    }

    /// Convert keyboard event to a dialog answer
    pub fn key_to_confirm_action(key: KeyEvent) -> ConfirmAction {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                ConfirmAction::Quit
            }
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => ConfirmAction::Yes,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => ConfirmAction::No,
            _ => ConfirmAction::None,
        }
    }
}
