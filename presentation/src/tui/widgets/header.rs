//! Header widget: current view, player and running score

use quiz_domain::{Score, View};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    view: View,
    player: &'a str,
    score: Score,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(view: View, player: &'a str, score: Score) -> Self {
        Self {
            view,
            player,
            score,
        }
    }
}

impl Widget for HeaderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let score_color = if self.score.value() < 0 {
            Color::Red
        } else {
            Color::Green
        };

        let mut spans = vec![
            Span::styled("◉ ", Style::default().fg(Color::Green)),
            Span::styled(
                self.view.title(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        if self.view == View::Quiz {
            spans.extend([
                Span::raw(" | "),
                Span::styled(self.player.to_string(), Style::default().fg(Color::White)),
                Span::raw(" | Score: "),
                Span::styled(
                    self.score.to_string(),
                    Style::default().fg(score_color).add_modifier(Modifier::BOLD),
                ),
            ]);
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Trivia Quiz ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}
