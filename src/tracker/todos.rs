use crate::error::Result;
use crate::models::label::{self, ItemKind};
use crate::models::{Record, Todo};

pub fn create(record: &mut Record, content: &str) -> Result<()> {
    label::ensure_capacity(record.todos.len())?;
    record.todos.push(Todo::new(content));
    Ok(())
}

pub fn rename(record: &mut Record, input: &str, content: &str) -> Result<()> {
    let index = label::resolve(input, record.todos.len(), ItemKind::Todo)?;
    record.todos[index].content = content.to_string();
    Ok(())
}

/// Exchange the positions of two todos
pub fn swap(record: &mut Record, first: &str, second: &str) -> Result<()> {
    let len = record.todos.len();
    let first = label::resolve(first, len, ItemKind::Todo)?;
    let second = label::resolve(second, len, ItemKind::Todo)?;
    record.todos.swap(first, second);
    Ok(())
}

/// Remove a finished todo; later todos move up one letter
pub fn check_off(record: &mut Record, input: &str) -> Result<()> {
    let index = label::resolve(input, record.todos.len(), ItemKind::Todo)?;
    let done = record.todos.remove(index);
    tracing::debug!(content = %done.content, "checked off todo");
    Ok(())
}
