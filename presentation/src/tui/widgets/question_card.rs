//! Question card: the current question, its answer form and the feedback
//! shown after grading

use super::button;
use quiz_domain::{GradingResult, QuestionKind, QuizState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Feedback line for a graded attempt, `None` while pending
pub fn feedback_text(quiz: &QuizState) -> Option<String> {
    let question = quiz.current_question()?;
    match quiz.grading() {
        GradingResult::Pending => None,
        GradingResult::Correct => Some(format!(
            "Yes! {} correct! +{} score",
            question.correct_answer().describe(),
            question.value()
        )),
        GradingResult::Incorrect => Some(format!(
            "Oh no! {} was not the correct answer. The correct answer was {}! {:+} score",
            quiz.candidate(),
            question.correct_answer(),
            quiz.rules().incorrect_penalty.saturating_neg()
        )),
    }
}

/// Label of the progression control
pub fn advance_label(quiz: &QuizState) -> &'static str {
    if quiz.is_last_question() {
        "Finish game!"
    } else {
        "Next question"
    }
}

pub struct QuestionCardWidget<'a> {
    quiz: &'a QuizState,
    focus: usize,
}

impl<'a> QuestionCardWidget<'a> {
    pub fn new(quiz: &'a QuizState, focus: usize) -> Self {
        Self { quiz, focus }
    }

    fn option_line(&self, index: usize, option: &str, kind: QuestionKind) -> Line<'static> {
        let selected = self.quiz.candidate().contains(option);
        let marker = match (kind, selected) {
            (QuestionKind::Single, true) => "(•)",
            (QuestionKind::Single, false) => "( )",
            (QuestionKind::Multiple, true) => "[x]",
            (QuestionKind::Multiple, false) => "[ ]",
        };
        let focused = index == self.focus;
        let enabled = self.quiz.grading().is_pending();

        let style = if !enabled {
            Style::default().fg(Color::DarkGray)
        } else if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        Line::from(vec![
            Span::raw(if focused { "> " } else { "  " }),
            Span::styled(format!("{}. {} {}", index + 1, marker, option), style),
        ])
    }
}

impl Widget for QuestionCardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(question) = self.quiz.current_question() else {
            Paragraph::new("No question loaded")
                .block(Block::default().borders(Borders::ALL).title(" Quiz "))
                .render(area, buf);
            return;
        };

        let kind = question.kind();
        let mut lines = vec![
            Line::from(Span::styled(
                question.text().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{}-choice, {} points", kind, question.value()),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
        ];

        for (index, option) in question.answers().iter().enumerate() {
            lines.push(self.option_line(index, option, kind));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(button(
            "Submit answer",
            false,
            self.quiz.can_submit(),
        )));

        if let Some(feedback) = feedback_text(self.quiz) {
            let color = if self.quiz.grading().is_correct() {
                Color::Green
            } else {
                Color::Red
            };
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                feedback,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(button(advance_label(self.quiz), true, true)));
        }

        let title = format!(
            " Question {}/{} ",
            self.quiz.cursor() + 1,
            self.quiz.questions().len()
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(Style::default().fg(Color::White));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
