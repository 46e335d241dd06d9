//! Letter addressing for list items.
//!
//! Letters are derived from the current list position only (`a` is index 0).
//! They are never stored, so deleting an item shifts every later letter.

use crate::error::{Result, TrackerError};

/// Number of items that can carry a letter
pub const MAX_ITEMS: usize = 26;

/// Which list a label addresses, for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Entry,
    Todo,
}

/// Letter shown for the item at `index`
pub fn label_for(index: usize) -> Option<char> {
    u8::try_from(index)
        .ok()
        .filter(|&i| usize::from(i) < MAX_ITEMS)
        .map(|i| char::from(b'a' + i))
}

/// Decode a single lowercase letter into a zero-based index
pub fn parse_label(input: &str) -> Result<usize> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_lowercase() => Ok(usize::from(c as u8 - b'a')),
        _ => Err(TrackerError::InvalidLabel(input.to_string())),
    }
}

/// Decode a label and check it against the current list length
pub fn resolve(input: &str, len: usize, kind: ItemKind) -> Result<usize> {
    let index = parse_label(input)?;
    if index < len {
        return Ok(index);
    }

    let letter = label_for(index).unwrap_or('?');
    Err(match kind {
        ItemKind::Entry => TrackerError::NoSuchEntry(letter),
        ItemKind::Todo => TrackerError::NoSuchTodo(letter),
    })
}

/// Reject an append that would leave an item without a letter
pub fn ensure_capacity(len: usize) -> Result<()> {
    if len >= MAX_ITEMS {
        return Err(TrackerError::TooManyItems(MAX_ITEMS));
    }
    Ok(())
}
