//! Status report renderer
//!
//! Turns the record into the lines printed after every command: one line per
//! entry, the summary block (total, logged time, current time) and optionally
//! the todo list. Letters are computed here from list positions.

use chrono::NaiveTime;

use crate::config::Config;
use crate::error::Result;
use crate::models::label;
use crate::models::Record;
use crate::tracker::time;
use crate::tracker::View;

/// A rendered status report, kept in sections so the terminal layer can
/// style the summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub entries: Vec<String>,
    pub summary: Vec<String>,
    pub todos: Option<Vec<String>>,
}

impl Report {
    /// Unstyled text, as printed when colours are off
    pub fn to_plain(&self) -> String {
        self.layout(|line| line.to_string())
    }

    /// Lay the report out as text, passing each summary line through
    /// `summary_style`
    pub fn layout(&self, summary_style: impl Fn(&str) -> String) -> String {
        let mut output = String::new();

        for line in &self.entries {
            output.push_str(line);
            output.push('\n');
        }
        for line in &self.summary {
            output.push_str(&summary_style(line));
            output.push('\n');
        }
        output.push('\n');

        if let Some(todos) = &self.todos {
            output.push_str("TODO:\n");
            for line in todos {
                output.push_str(line);
                output.push('\n');
            }
            output.push('\n');
        }

        output
    }
}

/// Render minutes as `H:MM`, or `0` when nothing is logged
pub fn format_duration(total_minutes: i64) -> String {
    if total_minutes == 0 {
        return "0".to_string();
    }
    format!("{}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// Renderer for status reports
pub struct Renderer<'a> {
    config: &'a Config,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Render the record as seen at `now`
    pub fn render(&self, record: &Record, now: NaiveTime, view: View) -> Result<Report> {
        let mut entries = Vec::new();
        let mut total = 0i64;

        for (index, entry) in record.entries.iter().enumerate() {
            if view.skip_empty && entry.total == 0 {
                continue;
            }
            if !self.config.is_excluded(&entry.name) {
                total += i64::from(entry.total);
            }
            entries.push(format!(
                "{}) {}: {}h",
                letter(index),
                entry.name,
                format_duration(i64::from(entry.total))
            ));
        }

        let summary = vec![
            format!("Total: {}h", format_duration(total)),
            format!("Logged Time: {}", record.time),
            format!("Current Time: {}", time::format_time(now, &record.format)?),
        ];

        let todos = view.show_todos.then(|| {
            record
                .todos
                .iter()
                .enumerate()
                .map(|(index, todo)| format!("{}) {}", letter(index), todo.content))
                .collect()
        });

        Ok(Report {
            entries,
            summary,
            todos,
        })
    }
}

fn letter(index: usize) -> char {
    label::label_for(index).unwrap_or('?')
}
