//! Record mutations
//!
//! Every command maps to one Operation. Applying it mutates the owned Record
//! in place; the Operation also decides how the result is presented.

pub mod clock;
pub mod entries;
pub mod time;
pub mod todos;

pub use clock::{Clock, SystemClock};
pub use entries::Direction;

use crate::error::Result;
use crate::models::Record;

/// A single mutation (or none) requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Add(String),
    Subtract(String),
    Update(String),
    SetTime(String),
    SetBlockSize(String),
    Start,
    Reset,
    NewEntry(String),
    RenameEntry { label: String, name: String },
    DeleteEntry(String),
    NewTodo(String),
    RenameTodo { label: String, content: String },
    SwapTodos(String, String),
    CheckOff(String),
    Summary,
    All,
}

/// What the report shows after an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View {
    /// Hide entries with nothing logged
    pub skip_empty: bool,
    pub show_todos: bool,
}

impl View {
    pub const SUMMARY: View = View {
        skip_empty: true,
        show_todos: false,
    };
    pub const SUMMARY_WITH_TODOS: View = View {
        skip_empty: true,
        show_todos: true,
    };
    pub const ALL: View = View {
        skip_empty: false,
        show_todos: true,
    };
}

impl Operation {
    pub fn view(&self) -> View {
        match self {
            Operation::NewTodo(_)
            | Operation::RenameTodo { .. }
            | Operation::SwapTodos(..)
            | Operation::CheckOff(_) => View::SUMMARY_WITH_TODOS,
            Operation::All => View::ALL,
            _ => View::SUMMARY,
        }
    }

    /// Mutate the record. On error the record must not be saved.
    pub fn apply(&self, record: &mut Record, clock: &impl Clock) -> Result<()> {
        tracing::debug!(operation = ?self, "applying");
        match self {
            Operation::Add(input) => entries::update_value(record, Direction::Add, input),
            Operation::Subtract(input) => {
                entries::update_value(record, Direction::Subtract, input)
            }
            Operation::Update(input) => time::smart_update(record, input, clock),
            Operation::SetTime(input) => time::set_time(record, input),
            Operation::SetBlockSize(input) => entries::set_block_size(record, input),
            Operation::Start => time::start(record, clock),
            Operation::Reset => entries::reset(record),
            Operation::NewEntry(name) => entries::create(record, name),
            Operation::RenameEntry { label, name } => entries::rename(record, label, name),
            Operation::DeleteEntry(label) => entries::delete(record, label),
            Operation::NewTodo(content) => todos::create(record, content),
            Operation::RenameTodo { label, content } => todos::rename(record, label, content),
            Operation::SwapTodos(first, second) => todos::swap(record, first, second),
            Operation::CheckOff(label) => todos::check_off(record, label),
            Operation::Summary | Operation::All => Ok(()),
        }
    }
}
