//! Reset confirmation popup

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Yes/no dialog drawn over the quiz screen
#[derive(Debug)]
pub struct ConfirmDialog {
    question: String,
}

impl ConfirmDialog {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }

    /// Render the dialog centered over the whole frame
    pub fn render(&self, f: &mut Frame) {
        let area = centered_rect(60, 7, f.size());

        let key = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let text = vec![
            Line::from(self.question.as_str()),
            Line::from(""),
            Line::from(vec![
                Span::styled("Y", key),
                Span::raw(" Yes    "),
                Span::styled("N", key),
                Span::raw(" No"),
            ]),
        ];

        let dialog = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title("Reset progress"),
            );

        f.render_widget(Clear, area);
        f.render_widget(dialog, area);
    }
}

impl Default for ConfirmDialog {
    fn default() -> Self {
        Self::new("Restart all questions from the beginning?")
    }
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
