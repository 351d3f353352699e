//! TUI widgets: ratatui components for the main layout
//!
//! Layout:
//! ┌── Header (3) ────────────────────────────────────┐
//! ├── Body (flex): home / question card / scores ────┤
//! └── StatusBar (1) ─────────────────────────────────┘

pub mod header;
pub mod high_scores;
pub mod home;
pub mod question_card;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

/// Compute the main layout regions from a terminal area
pub struct MainLayout {
    pub header: Rect,
    pub body: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: chunks[0],
            body: chunks[1],
            status_bar: chunks[2],
        }
    }

    /// Center a box of the given percentage size inside `area`
    pub fn centered(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vertical[1])[1]
    }
}

/// Render a button label: focused, enabled or disabled
pub(crate) fn button(label: &str, focused: bool, enabled: bool) -> Span<'static> {
    let style = match (enabled, focused) {
        (false, _) => Style::default().fg(Color::DarkGray),
        (true, true) => Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(Color::Cyan),
    };
    Span::styled(format!("[ {} ]", label), style)
}

#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    buf.content().iter().map(|c| c.symbol()).collect::<String>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_regions() {
        let layout = MainLayout::compute(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 23);
        assert_eq!(layout.body.height, 20);
    }

    #[test]
    fn test_centered_is_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let inner = MainLayout::centered(60, 50, area);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 20);
        assert!(inner.x >= area.x && inner.right() <= area.right());
    }

    #[test]
    fn test_button_disabled_style() {
        let span = button("Go", true, false);
        assert_eq!(span.content, "[ Go ]");
        assert_eq!(span.style.fg, Some(Color::DarkGray));
    }
}
