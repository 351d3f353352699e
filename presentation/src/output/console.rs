//! Console output formatter for high scores and configuration issues

use colored::Colorize;
use quiz_domain::{ConfigIssue, OutputFormat, ScoreRecord, Severity};

/// Formats high-score records for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Force colors off (`--no-color`, `[output] color = false`)
    pub fn set_color_enabled(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    /// Format records in the requested format
    pub fn format(records: &[ScoreRecord], format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => Self::format_table(records),
            OutputFormat::Json => Self::format_json(records),
        }
    }

    /// Format records as an aligned table
    pub fn format_table(records: &[ScoreRecord]) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("High Scores"));
        output.push('\n');

        if records.is_empty() {
            output.push_str(&format!("\n{}\n", "No scores recorded!".dimmed()));
            output.push_str(&Self::footer());
            return output;
        }

        let date_width = Self::column_width("Date", records.iter().map(|r| r.date.as_str()));
        let name_width = Self::column_width(
            "Username",
            records.iter().map(|r| r.user_name.as_str()),
        );

        output.push_str(&format!(
            "\n{} {} {}\n",
            format!("{:<date_width$}", "Date").cyan().bold(),
            format!("{:<name_width$}", "Username").cyan().bold(),
            format!("{:>6}", "Score").cyan().bold(),
        ));
        output.push_str(&format!(
            "{}\n",
            "-".repeat(date_width + name_width + 8)
        ));

        for record in records {
            let score = format!("{:>6}", record.score.value());
            let score = if record.score.value() < 0 {
                score.red()
            } else {
                score.green()
            };
            output.push_str(&format!(
                "{} {} {}\n",
                format!("{:<date_width$}", record.date).dimmed(),
                format!("{:<name_width$}", record.user_name),
                score
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format records as a JSON array (same shape as the stored value)
    pub fn format_json(records: &[ScoreRecord]) -> String {
        serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string())
    }

    /// Format configuration issues, one per line
    pub fn format_config_issues(issues: &[ConfigIssue]) -> String {
        issues
            .iter()
            .map(|issue| match issue.severity {
                Severity::Error => format!("{} {}", "error:".red().bold(), issue.message),
                Severity::Warning => format!("{} {}", "warning:".yellow().bold(), issue.message),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn column_width<'a>(title: &str, values: impl Iterator<Item = &'a str>) -> usize {
        values
            .map(|v| v.chars().count())
            .max()
            .unwrap_or(0)
            .max(title.len())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(40);
        format!("{}\n{:^40}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(40).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_domain::{ConfigIssueCode, Score};

    fn records() -> Vec<ScoreRecord> {
        vec![
            ScoreRecord::new("1", "2024-01-02 10:00", "ada", Score::new(9)),
            ScoreRecord::new("2", "2024-01-03 11:30", "grace", Score::new(-1)),
        ]
    }

    #[test]
    fn test_table_lists_records() {
        let output = ConsoleFormatter::format_table(&records());
        assert!(output.contains("High Scores"));
        assert!(output.contains("Username"));
        assert!(output.contains("2024-01-02 10:00"));
        assert!(output.contains("grace"));
        assert!(output.contains("-1"));
    }

    #[test]
    fn test_table_placeholder_when_empty() {
        let output = ConsoleFormatter::format_table(&[]);
        assert!(output.contains("No scores recorded!"));
        assert!(!output.contains("Username"));
    }

    #[test]
    fn test_json_uses_stored_keys() {
        let output = ConsoleFormatter::format(&records(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["userName"], "ada");
        assert_eq!(value[1]["score"], -1);
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_json_empty_list() {
        assert_eq!(ConsoleFormatter::format_json(&[]), "[]");
    }

    #[test]
    fn test_config_issues() {
        let issues = vec![
            ConfigIssue::warning(
                ConfigIssueCode::InvalidValue {
                    field: "game.incorrect_penalty".into(),
                    value: "-1".into(),
                },
                "negative penalty",
            ),
            ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "storage.key".into(),
                },
                "empty key",
            ),
        ];
        let output = ConsoleFormatter::format_config_issues(&issues);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("warning:") && lines[0].contains("negative penalty"));
        assert!(lines[1].contains("error:") && lines[1].contains("empty key"));
    }
}
