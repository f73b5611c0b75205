//! Best-effort parsing of the schedule line into a start time.
//!
//! Calendar dumps carry a single line of the form
//! `"Monday, 27 October⋅14:30 – 15:00"`: a date part and a time range,
//! joined by a middle dot, with an en dash between start and end time.
//! The source format carries no year, so the caller injects "now" and the
//! current year is assumed.
//!
//! Parsing never fails hard; any failure degrades to `None` and the raw
//! line is still kept on the meeting record.

use chrono::{DateTime, Datelike, TimeZone, Utc};

/// Separator between the date part and the time part (U+22C5).
pub const MIDDLE_DOT: char = '⋅';

/// Separator between the start and end of the time range (U+2013).
pub const EN_DASH: char = '–';

/// Maps an English full month name to its 1-based number.
fn month_number(name: &str) -> Option<u32> {
    let month = match name {
        "January" => 1,
        "February" => 2,
        "March" => 3,
        "April" => 4,
        "May" => 5,
        "June" => 6,
        "July" => 7,
        "August" => 8,
        "September" => 9,
        "October" => 10,
        "November" => 11,
        "December" => 12,
        _ => return None,
    };
    Some(month)
}

/// Parses the start time out of a schedule line.
///
/// Returns `None` when the line does not have the expected shape (no
/// middle dot, too few date fields, unknown month name, malformed time
/// range). Malformed numerals inside an otherwise well-shaped line do not
/// fail the parse: the day defaults to 1 and the hour/minute to 0. An
/// unknown month name aborts entirely. The year is taken from `now`.
pub fn parse_start_time(line: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let mut parts = line.split(MIDDLE_DOT);
    let date_part = parts.next()?.trim();
    let time_part = parts.next()?.trim();
    if parts.next().is_some() {
        // More than one middle dot: not a recognizable schedule line.
        return None;
    }

    // The start time is everything before the en dash.
    let start_time = time_part.split(EN_DASH).next().unwrap_or("").trim();

    // Date part looks like "<Weekday>, <day> <Month>".
    let fields: Vec<&str> = date_part.split_whitespace().collect();
    if fields.len() < 3 {
        return None;
    }
    let day_field = fields[1].strip_suffix(',').unwrap_or(fields[1]);
    let month = month_number(fields[2])?;
    let day = day_field
        .parse::<u32>()
        .ok()
        .filter(|d| (1..=31).contains(d))
        .unwrap_or(1);

    // Start time must be exactly "HH:MM"; out-of-range components fall
    // back to zero rather than failing the whole parse.
    let mut clock = start_time.split(':');
    let hour_field = clock.next()?;
    let minute_field = clock.next()?;
    if clock.next().is_some() {
        return None;
    }
    let hour = hour_field.parse::<u32>().ok().filter(|h| *h < 24).unwrap_or(0);
    let minute = minute_field.parse::<u32>().ok().filter(|m| *m < 60).unwrap_or(0);

    Utc.with_ymd_and_hms(now.year(), month, day, hour, minute, 0)
        .single()
}
