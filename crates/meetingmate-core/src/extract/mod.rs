//! Heuristic extraction of a [`Meeting`] from raw invitation text.
//!
//! The input is a free-text dump copy-pasted from a calendar application:
//! no grammar, no delimiters, just lines whose meaning has to be guessed
//! from shape and context. Extraction is a single forward scan over the
//! non-blank lines; each line is handed to an ordered rule table and
//! consumed by the first rule that matches. The ordering is load-bearing:
//! low-ambiguity signals (explicit separators, known domains, explicit
//! labels) run before the catch-all attendee and description heuristics.
//!
//! Some rules toggle scan-wide state consumed by later lines (the phone
//! section, sticky description mode, the guest-list marker). That state is
//! threaded explicitly as [`ScanState`] rather than hidden in the rules.
//!
//! Extraction never fails on content; unrecognized lines are dropped and
//! unparseable values leave their field unset.

pub mod attendee;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::links::{contains_url, contains_video_domain, is_single_url_line, url_tokens};
use crate::meeting::Meeting;
use crate::schedule::{EN_DASH, MIDDLE_DOT, parse_start_time};

pub use attendee::classify_attendee;

/// Frequency words that mark a recurrence line.
const FREQUENCY_PREFIXES: [&str; 3] = ["Weekly", "Daily", "Monthly"];

/// Bare tokens that mark a guest-list summary line.
const GUEST_TOKENS: [&str; 3] = ["yes", "no", "maybe"];

/// Scan-wide state toggled by earlier lines and consumed by later ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanState {
    /// A "Join by phone" marker has been seen; dial-in lines follow.
    pub in_phone_section: bool,
    /// Description mode is active and sticky for the rest of the scan.
    pub in_description: bool,
    /// A guest-list marker has been seen. Has no output effect; it exists
    /// to keep nearby summary lines out of the attendee list.
    pub saw_guest_marker: bool,
}

/// Whether a rule consumed the line or classification continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Consumed,
    Continue,
}

/// Mutable scan context the rules act on.
struct Scanner {
    meeting: Meeting,
    state: ScanState,
    description: Vec<String>,
    now: DateTime<Utc>,
}

/// A single classification rule: a name for logging plus its action.
///
/// Rules both test and act; a rule that matches mutates the scanner and
/// reports [`Outcome::Consumed`].
struct Rule {
    name: &'static str,
    apply: fn(&mut Scanner, &str, Option<&str>) -> Outcome,
}

/// The classification chain, evaluated top to bottom, first match wins.
/// The order is part of the observable contract.
const RULES: &[Rule] = &[
    Rule { name: "title", apply: rule_title },
    Rule { name: "schedule", apply: rule_schedule },
    Rule { name: "frequency", apply: rule_frequency },
    Rule { name: "video-link", apply: rule_video_link },
    Rule { name: "bare-url", apply: rule_bare_url },
    Rule { name: "phone-marker", apply: rule_phone_marker },
    Rule { name: "phone-entry", apply: rule_phone_entry },
    Rule { name: "guest-marker", apply: rule_guest_marker },
    Rule { name: "organizer-label", apply: rule_organizer_label },
    Rule { name: "created-by", apply: rule_created_by },
    Rule { name: "description-start", apply: rule_description_start },
    Rule { name: "description-continuation", apply: rule_description_continuation },
    Rule { name: "attendee", apply: rule_attendee },
];

/// Extracts a [`Meeting`] from raw invitation text.
///
/// `now` supplies the year for the schedule line (the source format does
/// not carry one) and keeps extraction deterministic under test.
pub fn extract_meeting(input: &str, now: DateTime<Utc>) -> Meeting {
    let lines: Vec<&str> = input.lines().collect();
    let mut scanner = Scanner {
        meeting: Meeting::new(),
        state: ScanState::default(),
        description: Vec::new(),
        now,
    };

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        // Lookahead is over the raw line array: the organizer label and
        // the attendee classifier both read the next physical line.
        let next_line = lines.get(i + 1).copied();

        for rule in RULES {
            if (rule.apply)(&mut scanner, line, next_line) == Outcome::Consumed {
                debug!(rule = rule.name, line, "line consumed");
                break;
            }
        }
    }

    if !scanner.description.is_empty() {
        scanner.meeting.description = Some(scanner.description.join("\n"));
    }
    scanner.meeting
}

/// Rule 1: the first non-blank line is the title, set exactly once.
fn rule_title(scanner: &mut Scanner, line: &str, _next: Option<&str>) -> Outcome {
    if !scanner.meeting.title.is_empty() {
        return Outcome::Continue;
    }
    scanner.meeting.title = line.to_string();
    Outcome::Consumed
}

/// Rule 2: a line with both separators is the schedule line.
fn rule_schedule(scanner: &mut Scanner, line: &str, _next: Option<&str>) -> Outcome {
    if !(line.contains(MIDDLE_DOT) && line.contains(EN_DASH)) {
        return Outcome::Continue;
    }
    scanner.meeting.date_time = Some(line.to_string());
    scanner.meeting.meeting_time = parse_start_time(line, scanner.now);
    Outcome::Consumed
}

/// Rule 3: a line starting with a frequency word is the recurrence.
fn rule_frequency(scanner: &mut Scanner, line: &str, _next: Option<&str>) -> Outcome {
    if !FREQUENCY_PREFIXES.iter().any(|p| line.starts_with(p)) {
        return Outcome::Continue;
    }
    scanner.meeting.frequency = Some(line.to_string());
    Outcome::Consumed
}

/// Rule 4: a known video conferencing domain marks the meeting link.
fn rule_video_link(scanner: &mut Scanner, line: &str, _next: Option<&str>) -> Outcome {
    if !contains_video_domain(line) {
        return Outcome::Continue;
    }
    scanner.meeting.meet_link = Some(line.to_string());
    scanner.meeting.links.push(line.to_string());
    Outcome::Consumed
}

/// Rule 5: collect bare URL tokens. A line that is exactly one URL is
/// fully consumed; a URL inside prose leaves the line to later rules.
fn rule_bare_url(scanner: &mut Scanner, line: &str, _next: Option<&str>) -> Outcome {
    if !contains_url(line) {
        return Outcome::Continue;
    }
    for token in url_tokens(line) {
        scanner.meeting.links.push(token.to_string());
    }
    if is_single_url_line(line) {
        Outcome::Consumed
    } else {
        Outcome::Continue
    }
}

/// Rule 6a: the "Join by phone" marker opens the phone section.
fn rule_phone_marker(scanner: &mut Scanner, line: &str, _next: Option<&str>) -> Outcome {
    if !line.contains("Join by phone") {
        return Outcome::Continue;
    }
    scanner.state.in_phone_section = true;
    Outcome::Consumed
}

/// Rule 6b: while the phone section is open, dial-in looking lines are
/// appended (newline-joined) to the phone info.
fn rule_phone_entry(scanner: &mut Scanner, line: &str, _next: Option<&str>) -> Outcome {
    if !scanner.state.in_phone_section {
        return Outcome::Continue;
    }
    if !(line.contains('+') || line.contains("PIN:") || line.contains("ID:")) {
        return Outcome::Continue;
    }
    match scanner.meeting.phone_info {
        Some(ref mut info) => {
            info.push('\n');
            info.push_str(line);
        }
        None => scanner.meeting.phone_info = Some(line.to_string()),
    }
    Outcome::Consumed
}

/// Rule 7: guest-list summary lines flip the guest marker and end the
/// phone section. They produce no output themselves.
fn rule_guest_marker(scanner: &mut Scanner, line: &str, _next: Option<&str>) -> Outcome {
    let is_marker = line.contains("guests")
        || line
            .split_whitespace()
            .any(|token| GUEST_TOKENS.contains(&token));
    if !is_marker {
        return Outcome::Continue;
    }
    scanner.state.saw_guest_marker = true;
    scanner.state.in_phone_section = false;
    Outcome::Consumed
}

/// Rule 8: an explicit organizer label takes the next raw line verbatim,
/// even when that line is blank.
fn rule_organizer_label(scanner: &mut Scanner, line: &str, next: Option<&str>) -> Outcome {
    if !(line.contains("Organiser") || line.contains("Organizer")) {
        return Outcome::Continue;
    }
    if let Some(next) = next {
        scanner.meeting.organizer = Some(next.trim().to_string());
    }
    Outcome::Consumed
}

/// Rule 9: "Created by:" carries the organizer inline.
fn rule_created_by(scanner: &mut Scanner, line: &str, _next: Option<&str>) -> Outcome {
    let Some(rest) = line.strip_prefix("Created by:") else {
        return Outcome::Continue;
    };
    let rest = rest.trim();
    if !rest.is_empty() {
        scanner.meeting.organizer = Some(rest.to_string());
    }
    Outcome::Consumed
}

/// Rule 10: a greeting or any long prose line starts description mode.
fn rule_description_start(scanner: &mut Scanner, line: &str, _next: Option<&str>) -> Outcome {
    let is_prose = line.chars().count() > 50 && line.contains(' ');
    if !(line.contains("Hi,") || is_prose) {
        return Outcome::Continue;
    }
    scanner.state.in_description = true;
    scanner.description.push(line.to_string());
    Outcome::Consumed
}

/// Rule 11: description mode is sticky; every later non-blank line that
/// reached this point is absorbed.
fn rule_description_continuation(
    scanner: &mut Scanner,
    line: &str,
    _next: Option<&str>,
) -> Outcome {
    if !scanner.state.in_description {
        return Outcome::Continue;
    }
    scanner.description.push(line.to_string());
    Outcome::Consumed
}

/// Rule 12: anything left that is not the title, a schedule line, or a
/// meeting-link line is a candidate attendee.
fn rule_attendee(scanner: &mut Scanner, line: &str, next: Option<&str>) -> Outcome {
    if line == scanner.meeting.title || line.contains(MIDDLE_DOT) || line.contains("meet.") {
        return Outcome::Continue;
    }
    match classify_attendee(line, next) {
        Some(attendee) => {
            scanner.meeting.attendees.push(attendee);
            Outcome::Consumed
        }
        None => Outcome::Continue,
    }
}
