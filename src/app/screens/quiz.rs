//! Quiz screen implementation
//!
//! Score bar, question card with the answer input, feedback line and key
//! help. Once every question is done the card is replaced by the final
//! score.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::quiz::QuizController;
use crate::store::ProgressStore;

/// Renders a `QuizController`
#[derive(Debug)]
pub struct QuizScreen {
    title: String,
}

impl QuizScreen {
    pub fn new() -> Self {
        Self::with_title("English Verb Quiz")
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Render the quiz screen
    pub fn render<S: ProgressStore>(&self, f: &mut Frame, quiz: &QuizController<S>) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(1), // Score
                Constraint::Min(10),   // Card
                Constraint::Length(3), // Help text
            ])
            .split(size);

        self.render_title(f, chunks[0]);
        self.render_score(f, chunks[1], quiz);

        if quiz.is_complete() {
            self.render_complete(f, chunks[2], quiz);
        } else {
            self.render_card(f, chunks[2], quiz);
        }

        self.render_help(f, chunks[3], quiz.is_complete());
    }

    fn render_title(&self, f: &mut Frame, area: Rect) {
        let title = Paragraph::new(self.title.as_str())
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(title, area);
    }

    fn render_score<S: ProgressStore>(&self, f: &mut Frame, area: Rect, quiz: &QuizController<S>) {
        let score = quiz.score();
        let position = if quiz.is_complete() {
            format!("{} / {}", quiz.len(), quiz.len())
        } else {
            format!("{} / {}", quiz.index() + 1, quiz.len())
        };

        let line = Line::from(vec![
            Span::styled("Correct: ", Style::default().fg(Color::Green)),
            Span::raw(score.correct.to_string()),
            Span::raw("  |  "),
            Span::styled("Surrendered: ", Style::default().fg(Color::Red)),
            Span::raw(score.surrendered.to_string()),
            Span::raw("  |  "),
            Span::styled("Question ", Style::default().fg(Color::Gray)),
            Span::raw(position),
        ]);
        f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }

    fn render_card<S: ProgressStore>(&self, f: &mut Frame, area: Rect, quiz: &QuizController<S>) {
        let Some(question) = quiz.current_question() else {
            return;
        };

        let block = Block::default().borders(Borders::ALL).title("Translate");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Prompt
                Constraint::Length(3), // Input
                Constraint::Length(2), // Feedback
                Constraint::Min(0),    // Revealed answer
            ])
            .split(inner);

        let prompt = Paragraph::new(question.prompt.as_str())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(prompt, rows[0]);

        let input = Paragraph::new(quiz.draft()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title("Your answer"),
        );
        f.render_widget(input, rows[1]);

        // Cursor after the draft, inside the input border
        let cursor_x = rows[1].x + 1 + quiz.draft().chars().count() as u16;
        if cursor_x < rows[1].right().saturating_sub(1) {
            f.set_cursor(cursor_x, rows[1].y + 1);
        }

        if let Some(message) = quiz.error_message() {
            let feedback = Paragraph::new(message)
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(feedback, rows[2]);
        }

        if let Some(answer) = quiz.revealed_answer() {
            let reveal = Paragraph::new(Line::from(vec![
                Span::raw("Answer: "),
                Span::styled(answer, Style::default().add_modifier(Modifier::BOLD)),
            ]))
            .alignment(Alignment::Center);
            f.render_widget(reveal, rows[3]);
        }
    }

    fn render_complete<S: ProgressStore>(
        &self,
        f: &mut Frame,
        area: Rect,
        quiz: &QuizController<S>,
    ) {
        let text = vec![
            Line::from(Span::styled(
                "Quiz complete!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("Final score: {}.", quiz.score().summary())),
        ];

        let done = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(done, area);
    }

    fn render_help(&self, f: &mut Frame, area: Rect, complete: bool) {
        let key = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let mut spans = Vec::new();
        if !complete {
            spans.extend([
                Span::styled("Enter", key),
                Span::raw(" Submit  "),
                Span::styled("Ctrl+G", key),
                Span::raw(" Give up  "),
                Span::styled("Ctrl+P", key),
                Span::raw(" Previous  "),
            ]);
        }
        spans.extend([
            Span::styled("Ctrl+R", key),
            Span::raw(" Reset  "),
            Span::styled("Esc", key),
            Span::raw(" Quit"),
        ]);

        let help = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );
        f.render_widget(help, area);
    }
}

impl Default for QuizScreen {
    fn default() -> Self {
        Self::new()
    }
}
