use thiserror::Error;

/// Daytracker error types
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data file error: {0}")]
    Record(String),

    #[error("Failed to parse time '{input}' with format '{format}'")]
    InvalidTime { input: String, format: String },

    #[error("Invalid time format '{0}'")]
    InvalidFormat(String),

    #[error("Invalid block '{0}': expected an optional count followed by a letter, e.g. 3b")]
    InvalidBlockToken(String),

    #[error("Failed to parse multiplier: {0}")]
    InvalidQuantity(String),

    #[error("Block size must be an integer between 1 and 60 minutes (got '{0}')")]
    InvalidBlockSize(String),

    #[error("Block size cannot be updated after logging time for the day (total must be 0)")]
    BlockSizeLocked,

    #[error("Negative totals are not permitted")]
    NegativeTotal,

    #[error("Invalid letter '{0}': expected a single lowercase letter")]
    InvalidLabel(String),

    #[error("No such entry: {0}")]
    NoSuchEntry(char),

    #[error("No such todo: {0}")]
    NoSuchTodo(char),

    #[error("Cannot hold more than {0} items; every item needs a letter")]
    TooManyItems(usize),

    #[error("Logged time {logged} is ahead of the current time {now}; set it with 'dt time'")]
    LogTimeAhead { logged: String, now: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for daytracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;
