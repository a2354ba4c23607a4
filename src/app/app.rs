//! Main application controller
//!
//! Wires key presses to the quiz controller and redraws after each one.

use crossterm::event::KeyEvent;

use crate::{
    app::{
        screens::{ConfirmDialog, QuizScreen},
        state::{AppState, ConfirmAction, QuizAction, StateManager},
        tui::Tui,
    },
    quiz::QuizController,
    store::ProgressStore,
    Result,
};

/// TUI application controller
pub struct App<S: ProgressStore> {
    tui: Tui,
    handler: KeyHandler<S>,
}

impl<S: ProgressStore> App<S> {
    /// Create a new application instance around a quiz
    pub fn new(quiz: QuizController<S>) -> Result<Self> {
        Ok(Self {
            tui: Tui::new()?,
            handler: KeyHandler::new(quiz),
        })
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        self.tui.init()
    }

    /// Run the main application loop until the user quits
    pub fn run(&mut self) -> Result<()> {
        while !self.handler.state_manager.should_quit() {
            self.draw()?;
            if let Some(key) = self.tui.next_key()? {
                self.handler.handle_key(key);
            }
        }
        self.tui.restore()?;
        Ok(())
    }

    /// Hand back the quiz, e.g. to print a summary after the TUI closes
    pub fn into_quiz(self) -> QuizController<S> {
        self.handler.quiz
    }

    fn draw(&mut self) -> Result<()> {
        let handler = &self.handler;
        self.tui.draw(|f| {
            handler.quiz_screen.render(f, &handler.quiz);
            if handler.state_manager.current_state() == AppState::ConfirmReset {
                handler.confirm_dialog.render(f);
            }
        })?;
        Ok(())
    }
}

/// Terminal-independent half of the app: screen state and key dispatch
pub struct KeyHandler<S: ProgressStore> {
    quiz: QuizController<S>,
    state_manager: StateManager,
    quiz_screen: QuizScreen,
    confirm_dialog: ConfirmDialog,
}

impl<S: ProgressStore> KeyHandler<S> {
    pub fn new(quiz: QuizController<S>) -> Self {
        Self {
            quiz,
            state_manager: StateManager::new(),
            quiz_screen: QuizScreen::new(),
            confirm_dialog: ConfirmDialog::default(),
        }
    }

    pub fn quiz(&self) -> &QuizController<S> {
        &self.quiz
    }

    pub fn state(&self) -> AppState {
        self.state_manager.current_state()
    }

    pub fn should_quit(&self) -> bool {
        self.state_manager.should_quit()
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.state_manager.current_state() {
            AppState::Quiz => self.handle_quiz_key(key),
            AppState::ConfirmReset => self.handle_confirm_key(key),
        }
    }

    fn handle_quiz_key(&mut self, key: KeyEvent) {
        match StateManager::key_to_quiz_action(key) {
            QuizAction::Input(c) => self.quiz.push_char(c),
            QuizAction::DeleteChar => self.quiz.pop_char(),
            QuizAction::Submit => {
                self.quiz.submit();
            }
            QuizAction::Surrender => {
                self.quiz.surrender();
            }
            QuizAction::Previous => {
                self.quiz.go_back();
            }
            QuizAction::Reset => self.state_manager.transition_to(AppState::ConfirmReset),
            QuizAction::Quit => self.state_manager.quit(),
            QuizAction::None => {}
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        let confirmed = match StateManager::key_to_confirm_action(key) {
            ConfirmAction::Yes => true,
            ConfirmAction::No => false,
            ConfirmAction::Quit => {
                self.state_manager.quit();
                return;
            }
            ConfirmAction::None => return,
        };

        self.quiz.reset(|| confirmed);
        self.state_manager.transition_to(AppState::Quiz);
    }
}
