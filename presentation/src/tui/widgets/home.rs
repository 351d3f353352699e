//! Home view: player name input and the two entry points

use super::button;
use crate::tui::state::{HomeControl, TuiState};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct HomeWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HomeWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl Widget for HomeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let name = if self.state.player_name.is_empty() {
            Span::styled("(anonymous)", Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(
                self.state.player_name.clone(),
                Style::default().fg(Color::White),
            )
        };

        let buttons: Vec<Span> = [HomeControl::StartGame, HomeControl::HighScores]
            .into_iter()
            .flat_map(|control| {
                [
                    button(control.label(), self.state.home_focus == control, true),
                    Span::raw("  "),
                ]
            })
            .collect();

        let lines = vec![
            Line::from(Span::styled(
                "Welcome to the trivia quiz!",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::raw("Player name: "),
                name,
                Span::styled("▏", Style::default().fg(Color::Yellow)),
            ]),
            Line::from(""),
            Line::from(buttons),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Home ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
