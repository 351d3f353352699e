//! High-score view: the score table and the two-step clear control

use super::button;
use crate::tui::state::ScoresControl;
use quiz_domain::ScoreRecord;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

pub const EMPTY_PLACEHOLDER: &str = "No scores recorded!";

/// Label of the clear control for the armed/idle state
pub fn clear_label(armed: bool) -> &'static str {
    if armed {
        "Really clear high scores?"
    } else {
        "Clear high scores"
    }
}

pub struct HighScoresWidget<'a> {
    records: &'a [ScoreRecord],
    armed: bool,
    focus: ScoresControl,
}

impl<'a> HighScoresWidget<'a> {
    pub fn new(records: &'a [ScoreRecord], armed: bool, focus: ScoresControl) -> Self {
        Self {
            records,
            armed,
            focus,
        }
    }

    fn render_table(&self, area: Rect, buf: &mut Buffer) {
        if self.records.is_empty() {
            Paragraph::new(EMPTY_PLACEHOLDER)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .render(area, buf);
            return;
        }

        let header = Row::new(["Date", "Username", "Score"]).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );

        let rows = self.records.iter().map(|record| {
            let score_style = if record.score.value() < 0 {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };
            Row::new(vec![
                Cell::from(record.date.clone()),
                Cell::from(record.user_name.clone()),
                Cell::from(record.score.to_string()).style(score_style),
            ])
        });

        Table::new(
            rows,
            [
                Constraint::Length(20),
                Constraint::Min(10),
                Constraint::Length(8),
            ],
        )
        .header(header)
        .render(area, buf);
    }
}

impl Widget for HighScoresWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" High Scores ")
            .style(Style::default().fg(Color::White));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        self.render_table(chunks[0], buf);

        let clear_enabled = self.armed || !self.records.is_empty();
        let clear = if self.armed {
            Span::styled(
                format!("[ {} ]", clear_label(true)),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            button(
                clear_label(false),
                self.focus == ScoresControl::Clear,
                clear_enabled,
            )
        };
        let controls = Line::from(vec![
            clear,
            Span::raw("  "),
            button("Go Home", self.focus == ScoresControl::GoHome, true),
        ]);
        Paragraph::new(controls)
            .alignment(Alignment::Center)
            .render(chunks[1], buf);
    }
}
