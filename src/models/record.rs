use serde::{Deserialize, Serialize};

/// Schema version written by this build
pub const CURRENT_VERSION: u32 = 2;

/// Time format used for freshly created data files (e.g. `9:00am`)
pub const DEFAULT_FORMAT: &str = "%-I:%M%P";

/// The persisted day: log time, block size, entries and todos
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Schema version of the data file
    pub version: u32,

    /// Running time-of-day marker, advanced by every crediting operation
    pub time: String,

    /// strftime format for `time` and for the reported current time
    pub format: String,

    /// Minutes credited per block
    pub block_size: u32,

    #[serde(default)]
    pub entries: Vec<Entry>,

    #[serde(default)]
    pub todos: Vec<Todo>,
}

/// A named time bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,

    /// Accumulated minutes
    pub total: u32,
}

/// A free-text to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub content: String,
}

impl Record {
    /// Fresh record for a new data file
    pub fn new() -> Self {
        Self {
            version: CURRENT_VERSION,
            time: "9:00am".to_string(),
            format: DEFAULT_FORMAT.to_string(),
            block_size: 15,
            entries: Vec::new(),
            todos: Vec::new(),
        }
    }

    /// Sum of all entry totals in minutes
    pub fn logged_minutes(&self) -> i64 {
        self.entries.iter().map(|e| i64::from(e.total)).sum()
    }

    /// Whether any entry has time logged against it
    pub fn has_logged_time(&self) -> bool {
        self.entries.iter().any(|e| e.total > 0)
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}

impl Entry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total: 0,
        }
    }
}

impl Todo {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}
