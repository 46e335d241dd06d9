//! Log-time arithmetic.
//!
//! The log time is a time of day stored as text in the record's own format.
//! Every crediting operation moves it by the credited minutes; it wraps
//! around midnight.

use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveTime, TimeDelta, Timelike};
use std::fmt::Write;

use super::clock::Clock;
use super::entries;
use crate::error::{Result, TrackerError};
use crate::models::label::{self, ItemKind};
use crate::models::Record;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Check that `format` is a strftime string able to render a time of day
pub fn validate_format(format: &str) -> Result<()> {
    let malformed = format.trim().is_empty()
        || StrftimeItems::new(format).any(|item| matches!(item, Item::Error));
    if malformed {
        return Err(TrackerError::InvalidFormat(format.to_string()));
    }
    // Date fields cannot be rendered from a bare time of day
    format_time(NaiveTime::MIN, format).map(|_| ())
}

/// Render a time of day, failing instead of panicking on a bad format
pub fn format_time(time: NaiveTime, format: &str) -> Result<String> {
    let mut out = String::new();
    write!(out, "{}", time.format(format))
        .map_err(|_| TrackerError::InvalidFormat(format.to_string()))?;
    Ok(out)
}

pub fn parse_time(input: &str, format: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), format).map_err(|_| TrackerError::InvalidTime {
        input: input.to_string(),
        format: format.to_string(),
    })
}

/// The record's log time
pub fn log_time(record: &Record) -> Result<NaiveTime> {
    parse_time(&record.time, &record.format)
}

/// Move the log time by `minutes` (negative moves it back)
pub fn advance(record: &mut Record, minutes: i64) -> Result<()> {
    let (moved, _) = log_time(record)?.overflowing_add_signed(TimeDelta::minutes(minutes));
    record.time = format_time(moved, &record.format)?;
    Ok(())
}

/// Round to the nearest multiple of `block`, halves away from zero
pub fn round_to_block(value: i64, block: i64) -> i64 {
    if block <= 0 {
        return value;
    }
    let magnitude = value.abs();
    let mut blocks = magnitude / block;
    if 2 * (magnitude % block) >= block {
        blocks += 1;
    }
    value.signum() * blocks * block
}

/// `dt time`: set the log time explicitly
pub fn set_time(record: &mut Record, input: &str) -> Result<()> {
    let parsed = parse_time(input, &record.format)?;
    record.time = format_time(parsed, &record.format)?;
    Ok(())
}

/// `dt start`: set the log time to now, rounded to the nearest block
pub fn start(record: &mut Record, clock: &impl Clock) -> Result<()> {
    let block = i64::from(record.block_size) * 60;
    let seconds = i64::from(clock.now().num_seconds_from_midnight());
    let rounded = round_to_block(seconds, block).rem_euclid(SECONDS_PER_DAY);

    let start = u32::try_from(rounded)
        .ok()
        .and_then(|s| NaiveTime::from_num_seconds_from_midnight_opt(s, 0))
        .unwrap_or(NaiveTime::MIN);
    record.time = format_time(start, &record.format)?;
    Ok(())
}

/// `dt update`: credit the time elapsed since the log time to one entry.
///
/// The current time is taken at the precision of the record's format and the
/// elapsed time is rounded to the nearest block. A log time ahead of the
/// current time (including one from before midnight) is rejected when the
/// rounded difference is negative.
pub fn smart_update(record: &mut Record, input: &str, clock: &impl Clock) -> Result<()> {
    let index = label::resolve(input, record.entries.len(), ItemKind::Entry)?;
    let logged = log_time(record)?;
    let now = parse_time(&format_time(clock.now(), &record.format)?, &record.format)?;

    let elapsed = now.signed_duration_since(logged).num_seconds();
    let rounded = round_to_block(elapsed, i64::from(record.block_size) * 60);
    if rounded < 0 {
        tracing::debug!(logged = %record.time, elapsed, "log time is ahead of the clock");
        return Err(TrackerError::LogTimeAhead {
            logged: record.time.clone(),
            now: format_time(now, &record.format)?,
        });
    }

    let delta = rounded / 60;
    entries::credit(&mut record.entries[index], delta)?;
    advance(record, delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entry;
    use crate::tracker::clock::FixedClock;

    fn record_at(time: &str) -> Record {
        let mut record = Record::new();
        record.time = time.to_string();
        record.entries.push(Entry::new("work"));
        record.entries.push(Entry::new("lunch"));
        record
    }

    #[test]
    fn test_validate_format() {
        assert!(validate_format("%-I:%M%P").is_ok());
        assert!(validate_format("%H:%M").is_ok());
        assert!(validate_format("").is_err());
        assert!(validate_format("%Q").is_err());
        assert!(validate_format("%Y-%m-%d").is_err());
    }

    #[test]
    fn test_parse_and_format_default() {
        let time = parse_time("9:00am", "%-I:%M%P").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(format_time(time, "%-I:%M%P").unwrap(), "9:00am");

        let evening = parse_time("5:30pm", "%-I:%M%P").unwrap();
        assert_eq!(evening, NaiveTime::from_hms_opt(17, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_time_rejects_garbage() {
        let err = parse_time("nine", "%-I:%M%P").unwrap_err();
        assert!(matches!(err, TrackerError::InvalidTime { .. }));
    }

    #[test]
    fn test_advance_forward_and_back() {
        let mut record = record_at("9:00am");
        advance(&mut record, 45).unwrap();
        assert_eq!(record.time, "9:45am");
        advance(&mut record, -90).unwrap();
        assert_eq!(record.time, "8:15am");
    }

    #[test]
    fn test_advance_wraps_midnight() {
        let mut record = record_at("11:45pm");
        advance(&mut record, 30).unwrap();
        assert_eq!(record.time, "12:15am");
    }

    #[test]
    fn test_round_to_block() {
        assert_eq!(round_to_block(0, 15), 0);
        assert_eq!(round_to_block(7, 15), 0);
        assert_eq!(round_to_block(8, 15), 15);
        assert_eq!(round_to_block(22, 15), 15);
        assert_eq!(round_to_block(23, 15), 30);
        assert_eq!(round_to_block(5, 10), 10);
        assert_eq!(round_to_block(-5, 10), -10);
        assert_eq!(round_to_block(-4, 10), 0);
    }

    #[test]
    fn test_set_time_normalizes() {
        let mut record = record_at("9:00am");
        set_time(&mut record, "08:30am").unwrap();
        assert_eq!(record.time, "8:30am");
    }

    #[test]
    fn test_set_time_invalid_leaves_record() {
        let mut record = record_at("9:00am");
        assert!(set_time(&mut record, "8.30").is_err());
        assert_eq!(record.time, "9:00am");
    }

    #[test]
    fn test_start_rounds_to_block() {
        let mut record = record_at("9:00am");
        start(&mut record, &FixedClock::at(8, 7)).unwrap();
        assert_eq!(record.time, "8:00am");

        start(&mut record, &FixedClock::at(8, 8)).unwrap();
        assert_eq!(record.time, "8:15am");
    }

    #[test]
    fn test_start_near_midnight_wraps() {
        let mut record = record_at("9:00am");
        start(&mut record, &FixedClock::at(23, 55)).unwrap();
        assert_eq!(record.time, "12:00am");
    }

    #[test]
    fn test_smart_update_credits_rounded_elapsed() {
        let mut record = record_at("9:00am");
        smart_update(&mut record, "a", &FixedClock::at(9, 52)).unwrap();
        assert_eq!(record.entries[0].total, 45);
        assert_eq!(record.time, "9:45am");
    }

    #[test]
    fn test_smart_update_small_negative_rounds_to_zero() {
        let mut record = record_at("9:15am");
        smart_update(&mut record, "a", &FixedClock::at(9, 10)).unwrap();
        assert_eq!(record.entries[0].total, 0);
        assert_eq!(record.time, "9:15am");
    }

    #[test]
    fn test_smart_update_rejects_log_time_ahead() {
        let mut record = record_at("11:30pm");
        let err = smart_update(&mut record, "a", &FixedClock::at(0, 15)).unwrap_err();
        assert!(matches!(err, TrackerError::LogTimeAhead { .. }));
        assert_eq!(record.entries[0].total, 0);
        assert_eq!(record.time, "11:30pm");
    }

    #[test]
    fn test_smart_update_unknown_entry() {
        let mut record = record_at("9:00am");
        let err = smart_update(&mut record, "c", &FixedClock::at(10, 0)).unwrap_err();
        assert!(matches!(err, TrackerError::NoSuchEntry('c')));
    }
}
