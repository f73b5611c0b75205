//! Meeting types recovered from calendar invitation text.
//!
//! This module provides the core types built up by the extractor:
//! - [`Meeting`]: everything recovered from one invitation dump
//! - [`Attendee`]: a single participant with optional status/location
//! - [`AttendeeStatus`]: the participant's response status, if known

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The response status recovered for an attendee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendeeStatus {
    /// The attendee has declined (busy marker or out-of-office note).
    Declined,
    /// The attendee is marked as optional.
    Optional,
    /// No status information was found near the attendee line.
    #[default]
    Unknown,
}

impl AttendeeStatus {
    /// Returns the display label for this status, or `None` for [`Unknown`].
    ///
    /// [`Unknown`]: AttendeeStatus::Unknown
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::Declined => Some("Declined"),
            Self::Optional => Some("Optional"),
            Self::Unknown => None,
        }
    }
}

/// A meeting participant extracted from the invitation text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    /// The attendee's name, taken verbatim from the source line.
    pub name: String,
    /// Response status, recovered from the line following the name.
    pub status: AttendeeStatus,
    /// Free-text location (e.g. "Home", "Office"), if the next line carried one.
    pub location: Option<String>,
}

impl Attendee {
    /// Creates an attendee with the given name and no status or location.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: AttendeeStatus::Unknown,
            location: None,
        }
    }

    /// Builder method to set the response status.
    pub fn with_status(mut self, status: AttendeeStatus) -> Self {
        self.status = status;
        self
    }

    /// Builder method to set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Everything recovered from a single meeting invitation dump.
///
/// Built field-by-field during the extractor's forward scan and handed
/// immutably to the renderer. Missing information stays `None` rather than
/// being an error; the source format is ambiguous by nature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// The meeting title: the first non-blank line of the input.
    pub title: String,
    /// The raw schedule line (e.g. "Monday, 27 October⋅14:30 – 15:00").
    pub date_time: Option<String>,
    /// Best-effort parsed start time; `None` when parsing failed.
    pub meeting_time: Option<DateTime<Utc>>,
    /// The raw recurrence line (e.g. "Weekly on Monday").
    pub frequency: Option<String>,
    /// Free-text location, if one was recovered.
    pub location: Option<String>,
    /// The video conferencing link line.
    pub meet_link: Option<String>,
    /// Dial-in details, newline-joined from the "Join by phone" section.
    pub phone_info: Option<String>,
    /// The meeting organizer. May be stored empty when the label rule
    /// matched but the following line was blank; use [`organizer_name`]
    /// for rendering.
    ///
    /// [`organizer_name`]: Meeting::organizer_name
    pub organizer: Option<String>,
    /// Participants in order of appearance. Not deduplicated.
    pub attendees: Vec<Attendee>,
    /// Free-text body, newline-joined from description-mode lines.
    pub description: Option<String>,
    /// Every URL found, in order of appearance. May contain duplicates and
    /// always includes `meet_link` when one was detected.
    pub links: Vec<String>,
}

impl Meeting {
    /// Creates an empty meeting record for the extractor to fill in.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the organizer's name if one was recovered and is non-empty.
    pub fn organizer_name(&self) -> Option<&str> {
        self.organizer.as_deref().filter(|o| !o.is_empty())
    }

    /// Returns true if either an organizer or at least one attendee is known.
    pub fn has_participants(&self) -> bool {
        self.organizer_name().is_some() || !self.attendees.is_empty()
    }
}
