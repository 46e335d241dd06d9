//! Upgrade of unversioned data files.
//!
//! Files written before the schema carried a `version` key store the time
//! format as a Go reference layout (`3:04pm`) and may write totals as floats.

use serde::Deserialize;

use crate::error::{Result, TrackerError};
use crate::models::record::CURRENT_VERSION;
use crate::models::{Entry, Record, Todo};

#[derive(Debug, Deserialize)]
pub struct LegacyRecord {
    time: String,
    format: String,
    block_size: i64,
    #[serde(default)]
    entries: Vec<LegacyEntry>,
    #[serde(default)]
    todos: Vec<Todo>,
}

#[derive(Debug, Deserialize)]
struct LegacyEntry {
    name: String,
    #[serde(default)]
    total: f64,
}

/// Go layout tokens for the time of day, longest match first
const LAYOUT_TOKENS: &[(&str, &str)] = &[
    ("15", "%H"),
    ("03", "%I"),
    ("04", "%M"),
    ("05", "%S"),
    ("PM", "%p"),
    ("pm", "%P"),
    ("3", "%-I"),
    ("4", "%-M"),
    ("5", "%-S"),
];

/// Translate a Go reference layout into a strftime format.
///
/// Go reads a 12-hour token without `pm`/`PM` as the bare hour number, so
/// such layouts become 24-hour formats; chrono cannot parse `%I` without a
/// meridiem.
pub fn layout_to_strftime(layout: &str) -> String {
    let has_meridiem = layout.contains("pm") || layout.contains("PM");
    let mut out = String::with_capacity(layout.len() * 2);
    let mut rest = layout;

    'scan: while let Some(c) = rest.chars().next() {
        for (token, replacement) in LAYOUT_TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                let replacement = match *replacement {
                    "%I" if !has_meridiem => "%H",
                    "%-I" if !has_meridiem => "%-H",
                    other => other,
                };
                out.push_str(replacement);
                rest = tail;
                continue 'scan;
            }
        }
        if c == '%' {
            out.push_str("%%");
        } else {
            out.push(c);
        }
        rest = &rest[c.len_utf8()..];
    }

    out
}

impl LegacyRecord {
    pub fn upgrade(self) -> Result<Record> {
        let block_size = u32::try_from(self.block_size)
            .map_err(|_| TrackerError::InvalidBlockSize(self.block_size.to_string()))?;

        let entries = self
            .entries
            .into_iter()
            .map(|entry| Entry {
                name: entry.name,
                // `as` saturates; negative and NaN totals become 0
                total: entry.total.round().max(0.0) as u32,
            })
            .collect();

        Ok(Record {
            version: CURRENT_VERSION,
            time: self.time,
            format: layout_to_strftime(&self.format),
            block_size,
            entries,
            todos: self.todos,
        })
    }
}
