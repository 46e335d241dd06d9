//! Data models module
//!
//! Defines the persisted Record with its Entries and Todos, and the letter
//! addressing used to refer to list items from the command line.

pub mod label;
pub mod record;

pub use record::{Entry, Record, Todo};
