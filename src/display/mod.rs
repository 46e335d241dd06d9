//! Terminal display module
//!
//! Prints status reports with automatic TTY and colour detection.

mod formatter;
mod terminal;

pub use formatter::print_report;
