//! Status bar widget: view indicator + key hints + flash messages

use crate::tui::mode;
use crate::tui::state::TuiState;
use quiz_domain::View;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Key hints for a view
pub fn hints(view: View) -> &'static str {
    match view {
        View::Home => "type:name  Tab:focus  Enter:select  Esc:quit",
        View::Quiz => "j/k:move  Space:choose  1-9:pick  s:submit  n:next  q:quit",
        View::HighScores => "c:clear  Esc:cancel  h:home  Enter:select  q:quit",
    }
}

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let view = self.state.view;

        // Left: view indicator
        let mode_text = mode::indicator(view);
        let mode_style = Style::default()
            .fg(Color::Black)
            .bg(mode::color(view))
            .add_modifier(Modifier::BOLD);
        let mode_line = Line::from(Span::styled(format!(" {} ", mode_text), mode_style));
        let mode_width = mode_text.len() as u16 + 2; // padding

        buf.set_line(area.x, area.y, &mode_line, mode_width);

        // Flash message or key hints on the right
        let (right_text, right_style) = match &self.state.flash_message {
            Some((flash, _)) => (
                flash.as_str(),
                Style::default()
                    .fg(Color::Yellow)
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            ),
            None => (
                hints(view),
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ),
        };

        let right_width = right_text.chars().count() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        let right_x = right_x.max(area.x + mode_width + 1);
        let right_line = Line::from(Span::styled(right_text.to_string(), right_style));
        buf.set_line(
            right_x,
            area.y,
            &right_line,
            area.right().saturating_sub(right_x),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::buffer_text;

    fn render(state: &TuiState) -> String {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(state).render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_shows_indicator_and_hints() {
        let mut state = TuiState::new("");
        state.navigate(View::Quiz);
        let content = render(&state);
        assert!(content.contains(" QUIZ "));
        assert!(content.contains("s:submit"));
    }

    #[test]
    fn test_flash_replaces_hints() {
        let mut state = TuiState::new("");
        state.set_flash("Select an answer first");
        let content = render(&state);
        assert!(content.contains("HOME"));
        assert!(content.contains("Select an answer first"));
        assert!(!content.contains("Esc:quit"));
    }
}
