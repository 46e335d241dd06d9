use regex::Regex;
use std::sync::LazyLock;

use super::time;
use crate::error::{Result, TrackerError};
use crate::models::label::{self, ItemKind};
use crate::models::{Entry, Record};

/// `[count]<letter>`, e.g. `a` or `3b`
static BLOCK_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]*)([a-z])$").expect("block token pattern is valid"));

/// Whether blocks are added to or taken from an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Add,
    Subtract,
}

/// Split a block token into its count (default 1) and letter
fn parse_block_token(input: &str) -> Result<(u32, &str)> {
    let captures = BLOCK_TOKEN
        .captures(input.trim())
        .ok_or_else(|| TrackerError::InvalidBlockToken(input.to_string()))?;

    let count = match captures.get(1).map(|m| m.as_str()) {
        None | Some("") => 1,
        Some(digits) => digits
            .parse::<u32>()
            .map_err(|e| TrackerError::InvalidQuantity(format!("'{}': {}", digits, e)))?,
    };
    let letter = captures
        .get(2)
        .map(|m| m.as_str())
        .ok_or_else(|| TrackerError::InvalidBlockToken(input.to_string()))?;

    Ok((count, letter))
}

/// Apply `delta` minutes to an entry's total.
///
/// A total that would go negative is clamped to zero and reported.
pub fn credit(entry: &mut Entry, delta: i64) -> Result<()> {
    let updated = i64::from(entry.total) + delta;
    if updated < 0 {
        entry.total = 0;
        return Err(TrackerError::NegativeTotal);
    }
    entry.total = u32::try_from(updated)
        .map_err(|_| TrackerError::InvalidQuantity(format!("total of {} minutes", updated)))?;
    Ok(())
}

/// `dt add` / `dt subtract`: move an entry by whole blocks and the log time with it
pub fn update_value(record: &mut Record, direction: Direction, input: &str) -> Result<()> {
    let (count, letter) = parse_block_token(input)?;
    let index = label::resolve(letter, record.entries.len(), ItemKind::Entry)?;
    // Fail on a broken log time before touching the entry
    time::log_time(record)?;

    let mut delta = i64::from(count) * i64::from(record.block_size);
    if direction == Direction::Subtract {
        delta = -delta;
    }

    if let Err(e) = credit(&mut record.entries[index], delta) {
        tracing::debug!(entry = %record.entries[index].name, delta, "rejected update");
        return Err(e);
    }
    time::advance(record, delta)
}

/// `dt blocksize`: change the block size while nothing is logged
pub fn set_block_size(record: &mut Record, input: &str) -> Result<()> {
    let size = input
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|size| (1..=60).contains(size))
        .ok_or_else(|| TrackerError::InvalidBlockSize(input.to_string()))?;

    if record.has_logged_time() {
        return Err(TrackerError::BlockSizeLocked);
    }
    record.block_size = size;
    Ok(())
}

/// `dt reset`: zero every entry and rewind the log time by what was cleared
pub fn reset(record: &mut Record) -> Result<()> {
    time::log_time(record)?;
    let cleared = record.logged_minutes();
    for entry in &mut record.entries {
        entry.total = 0;
    }
    time::advance(record, -cleared)
}

pub fn create(record: &mut Record, name: &str) -> Result<()> {
    label::ensure_capacity(record.entries.len())?;
    record.entries.push(Entry::new(name));
    Ok(())
}

pub fn rename(record: &mut Record, input: &str, name: &str) -> Result<()> {
    let index = label::resolve(input, record.entries.len(), ItemKind::Entry)?;
    record.entries[index].name = name.to_string();
    Ok(())
}

pub fn delete(record: &mut Record, input: &str) -> Result<()> {
    let index = label::resolve(input, record.entries.len(), ItemKind::Entry)?;
    let removed = record.entries.remove(index);
    tracing::debug!(name = %removed.name, total = removed.total, "deleted entry");
    Ok(())
}
