//! Attendee classification for lines that matched no earlier rule.
//!
//! Invitation dumps list attendee names as bare lines, interleaved with
//! status chips ("event_busy", "Optional") and location chips ("Home",
//! "Office") that belong to the name above them. The classifier decides
//! whether a line is plausibly a person's name and, if so, enriches it from
//! the immediately following line.

use crate::meeting::{Attendee, AttendeeStatus};

/// Substrings that disqualify a line from being an attendee name.
const REJECT_SUBSTRINGS: [&str; 12] = [
    "guests",
    "yes",
    "awaiting",
    "Edit",
    "More joining",
    "http",
    "@",
    "event_busy",
    "Out of office",
    "bedtime",
    "Outside working hours",
    "Declined because",
];

/// Lines that are exactly a location or separator chip, not a name.
const REJECT_EXACT: [&str; 4] = ["–", "Home", "Office", "Scotland"];

/// Location chips that can follow an attendee name.
const LOCATION_CHIPS: [&str; 3] = ["Home", "Office", "Scotland"];

/// Classifies a candidate line as an attendee.
///
/// Returns `None` when the line is rejected. On acceptance the attendee's
/// name is the full line, and the immediately following line (if any) may
/// contribute a status or a location; at most one of the two is set.
pub fn classify_attendee(line: &str, next_line: Option<&str>) -> Option<Attendee> {
    if is_rejected(line) || !looks_like_name(line) {
        return None;
    }

    let mut attendee = Attendee::new(line);
    if let Some(next) = next_line.map(str::trim) {
        if next.contains("event_busy") || next.contains("Out of office") {
            attendee.status = AttendeeStatus::Declined;
        } else if next.contains("Optional") {
            attendee.status = AttendeeStatus::Optional;
        } else if LOCATION_CHIPS.contains(&next) {
            attendee.location = Some(next.to_string());
        }
    }
    Some(attendee)
}

/// Rejection rules: obvious non-name lines.
fn is_rejected(line: &str) -> bool {
    REJECT_SUBSTRINGS.iter().any(|s| line.contains(s))
        || REJECT_EXACT.contains(&line)
        || line.len() < 3
        || line.starts_with("http://")
        || line.starts_with("https://")
}

/// Acceptance heuristic: 1-4 plain words, no digits, no `@`, no dots.
fn looks_like_name(line: &str) -> bool {
    if line.contains("meet.") || line.contains(".com") {
        return false;
    }
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() || words.len() > 4 {
        return false;
    }
    words
        .iter()
        .all(|word| !word.contains(|c: char| c.is_ascii_digit() || c == '@' || c == '.'))
}
