//! Note rendering for extracted meetings.
//!
//! This module turns a [`Meeting`] into one output string in either of two
//! shapes:
//! - **Markdown** with a YAML front-matter block, suitable for note-taking
//!   tools that index tags and participants
//! - **Plain text** with the same sections and gating, for pasting into
//!   email or chat
//!
//! Rendering never fails: unset fields simply omit their lines, and two
//! feature toggles gate the details and attendees sections.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::meeting::Meeting;

/// The output shape for a rendered note.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteFormat {
    /// Markdown with a front-matter block.
    #[default]
    Markdown,
    /// Plain text without markup.
    Plain,
}

/// Configuration for note rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Emit the "Meeting Details" section.
    pub include_details: bool,
    /// Emit the "Attendees" section.
    pub include_attendees: bool,
    /// Output shape.
    pub format: NoteFormat,
    /// Injected clock, used for the `date:` stamp. Injected rather than
    /// read from the system so rendering is deterministic under test.
    pub now: DateTime<Utc>,
}

impl RenderOptions {
    /// Creates options with both sections off and markdown output.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            include_details: false,
            include_attendees: false,
            format: NoteFormat::Markdown,
            now,
        }
    }

    /// Builder method to toggle the details section.
    pub fn with_details(mut self, include: bool) -> Self {
        self.include_details = include;
        self
    }

    /// Builder method to toggle the attendees section.
    pub fn with_attendees(mut self, include: bool) -> Self {
        self.include_attendees = include;
        self
    }

    /// Builder method to set the output shape.
    pub fn with_format(mut self, format: NoteFormat) -> Self {
        self.format = format;
        self
    }
}

/// Renders extracted meetings as notes.
#[derive(Debug, Clone)]
pub struct NoteRenderer {
    options: RenderOptions,
}

impl NoteRenderer {
    /// Creates a renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Renders the meeting according to the configured format.
    pub fn render(&self, meeting: &Meeting) -> String {
        match self.options.format {
            NoteFormat::Markdown => self.render_markdown(meeting),
            NoteFormat::Plain => self.render_plain(meeting),
        }
    }

    fn render_markdown(&self, meeting: &Meeting) -> String {
        let mut md = String::new();
        let organizer = meeting.organizer_name();

        // Front matter.
        md.push_str("---\n");
        md.push_str("tags: [meeting");
        if let Some(tag) = organizer.and_then(organizer_tag) {
            md.push_str(&format!(", {tag}"));
        }
        md.push_str("]\n");
        md.push_str(&format!("date: {}\n", self.options.now.format("%Y-%m-%d")));
        if let Some(time) = meeting.meeting_time {
            md.push_str(&format!(
                "meeting: {}\n",
                time.to_rfc3339_opts(SecondsFormat::Secs, true)
            ));
        }
        if let Some(org) = organizer {
            md.push_str(&format!("organiser: {org}\n"));
        }
        if meeting.has_participants() {
            md.push_str("participants:\n");
            if let Some(org) = organizer {
                md.push_str(&format!("  - {org}\n"));
            }
            for attendee in &meeting.attendees {
                if !attendee.name.is_empty() && Some(attendee.name.as_str()) != organizer {
                    md.push_str(&format!("  - {}\n", attendee.name));
                }
            }
        }
        md.push_str("---\n");

        md.push_str(&format!("\n# {}\n", meeting.title));

        if self.options.include_details {
            md.push_str("\n## Meeting Details\n");
            if let Some(date_time) = &meeting.date_time {
                md.push_str(&format!("**Date & Time:** {date_time}\n"));
            }
            if let Some(frequency) = &meeting.frequency {
                md.push_str(&format!("**Frequency:** {frequency}\n"));
            }
            if let Some(link) = &meeting.meet_link {
                md.push_str(&format!("**Meeting Link:** {link}\n"));
            }
            if let Some(phone) = &meeting.phone_info {
                md.push_str("**Phone Information:**\n```\n");
                md.push_str(phone);
                md.push_str("\n```\n");
            }
            if let Some(org) = organizer {
                md.push_str(&format!("**Organizer:** {org}\n"));
            }
        }

        if self.options.include_attendees && !meeting.attendees.is_empty() {
            md.push_str("\n## Attendees\n");
            for attendee in &meeting.attendees {
                md.push_str(&format!("- **{}**", attendee.name));
                if let Some(status) = attendee.status.label() {
                    md.push_str(&format!(" ({status})"));
                }
                if let Some(location) = &attendee.location {
                    md.push_str(&format!(" - {location}"));
                }
                md.push('\n');
            }
        }

        if let Some(description) = &meeting.description {
            md.push_str("\n## Description\n");
            md.push_str(description);
            md.push('\n');
        }

        md.push_str("\n## Notes\n");
        md.push_str("<!-- Add your meeting notes here -->\n");

        if !meeting.links.is_empty() {
            md.push_str("\n## Links\n");
            for link in &meeting.links {
                md.push_str(&format!("- {link}\n"));
            }
        }

        md.push_str("\n## Action Items\n");
        md.push_str("- [ ] \n");

        md
    }

    fn render_plain(&self, meeting: &Meeting) -> String {
        let mut text = String::new();
        let organizer = meeting.organizer_name();

        text.push_str(&format!("{}\n", meeting.title));
        text.push_str(&"=".repeat(meeting.title.chars().count()));
        text.push('\n');

        if self.options.include_details {
            text.push_str("\nMeeting Details:\n");
            if let Some(date_time) = &meeting.date_time {
                text.push_str(&format!("Date & Time: {date_time}\n"));
            }
            if let Some(frequency) = &meeting.frequency {
                text.push_str(&format!("Frequency: {frequency}\n"));
            }
            if let Some(link) = &meeting.meet_link {
                text.push_str(&format!("Meeting Link: {link}\n"));
            }
            if let Some(phone) = &meeting.phone_info {
                text.push_str("Phone Information:\n");
                text.push_str(phone);
                text.push('\n');
            }
            if let Some(org) = organizer {
                text.push_str(&format!("Organizer: {org}\n"));
            }
        }

        if self.options.include_attendees && !meeting.attendees.is_empty() {
            text.push_str("\nAttendees:\n");
            for attendee in &meeting.attendees {
                text.push_str(&format!("- {}", attendee.name));
                if let Some(status) = attendee.status.label() {
                    text.push_str(&format!(" ({status})"));
                }
                if let Some(location) = &attendee.location {
                    text.push_str(&format!(" - {location}"));
                }
                text.push('\n');
            }
        }

        if let Some(description) = &meeting.description {
            text.push_str("\nDescription:\n");
            text.push_str(description);
            text.push('\n');
        }

        text.push_str("\nNotes:\n");
        text.push_str("(Add your meeting notes here)\n");

        if !meeting.links.is_empty() {
            text.push_str("\nLinks:\n");
            for link in &meeting.links {
                text.push_str(&format!("- {link}\n"));
            }
        }

        text.push_str("\nAction Items:\n");
        text.push_str("- [ ] \n");

        text
    }
}

/// Derives a front-matter tag from the organizer: the first whitespace
/// token, lowercased.
fn organizer_tag(organizer: &str) -> Option<String> {
    organizer
        .split_whitespace()
        .next()
        .map(|token| token.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meeting::{Attendee, AttendeeStatus};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 26, 12, 0, 0).unwrap()
    }

    fn sample_meeting() -> Meeting {
        let mut meeting = Meeting::new();
        meeting.title = "Team Weekly Sync".to_string();
        meeting.date_time = Some("Monday, 27 October⋅14:30 – 15:00".to_string());
        meeting.meeting_time = Some(Utc.with_ymd_and_hms(2026, 10, 27, 14, 30, 0).unwrap());
        meeting.frequency = Some("Weekly on Monday".to_string());
        meeting.meet_link = Some("https://meet.google.com/abc-defg-hij".to_string());
        meeting.phone_info = Some("+44 20 1234 5678\nPIN: 123#".to_string());
        meeting.organizer = Some("Bob Jones".to_string());
        meeting.attendees = vec![
            Attendee::new("John Smith").with_status(AttendeeStatus::Optional),
            Attendee::new("Jane Doe").with_location("Home"),
            Attendee::new("Bob Jones"),
        ];
        meeting.description = Some("Hi, team\nagenda".to_string());
        meeting.links = vec![
            "https://meet.google.com/abc-defg-hij".to_string(),
            "https://docs.example.com/agenda".to_string(),
        ];
        meeting
    }

    mod markdown {
        use super::*;

        #[test]
        fn minimal_meeting_emits_only_skeleton_sections() {
            let mut meeting = Meeting::new();
            meeting.title = "Sync".to_string();

            let rendered = NoteRenderer::new(RenderOptions::new(now())).render(&meeting);
            assert_eq!(
                rendered,
                "---\n\
                 tags: [meeting]\n\
                 date: 2026-08-26\n\
                 ---\n\
                 \n\
                 # Sync\n\
                 \n\
                 ## Notes\n\
                 <!-- Add your meeting notes here -->\n\
                 \n\
                 ## Action Items\n\
                 - [ ] \n"
            );
        }

        #[test]
        fn full_meeting_with_all_sections() {
            let options = RenderOptions::new(now()).with_details(true).with_attendees(true);
            let rendered = NoteRenderer::new(options).render(&sample_meeting());

            let expected = "---
tags: [meeting, bob]
date: 2026-08-26
meeting: 2026-10-27T14:30:00Z
organiser: Bob Jones
participants:
  - Bob Jones
  - John Smith
  - Jane Doe
---

# Team Weekly Sync

## Meeting Details
**Date & Time:** Monday, 27 October⋅14:30 – 15:00
**Frequency:** Weekly on Monday
**Meeting Link:** https://meet.google.com/abc-defg-hij
**Phone Information:**
```
+44 20 1234 5678
PIN: 123#
```
**Organizer:** Bob Jones

## Attendees
- **John Smith** (Optional)
- **Jane Doe** - Home
- **Bob Jones**

## Description
Hi, team
agenda

## Notes
<!-- Add your meeting notes here -->

## Links
- https://meet.google.com/abc-defg-hij
- https://docs.example.com/agenda

## Action Items
- [ ] \n";
            assert_eq!(rendered, expected);
        }

        #[test]
        fn toggles_gate_their_sections() {
            let rendered =
                NoteRenderer::new(RenderOptions::new(now())).render(&sample_meeting());
            assert!(!rendered.contains("## Meeting Details"));
            assert!(!rendered.contains("## Attendees"));
            // Description and links are not gated by the toggles.
            assert!(rendered.contains("## Description"));
            assert!(rendered.contains("## Links"));
        }

        #[test]
        fn meeting_stamp_omitted_when_time_unset() {
            let mut meeting = sample_meeting();
            meeting.meeting_time = None;
            let rendered = NoteRenderer::new(RenderOptions::new(now())).render(&meeting);
            assert!(!rendered.contains("meeting: "));
            assert!(rendered.contains("date: 2026-08-26\n"));
        }

        #[test]
        fn organizer_listed_first_and_not_repeated() {
            let rendered =
                NoteRenderer::new(RenderOptions::new(now())).render(&sample_meeting());
            let participants: Vec<&str> = rendered
                .lines()
                .filter(|l| l.starts_with("  - "))
                .collect();
            assert_eq!(
                participants,
                vec!["  - Bob Jones", "  - John Smith", "  - Jane Doe"]
            );
        }

        #[test]
        fn attendees_section_shows_organizer_row() {
            // The participants list reconciles against the organizer; the
            // attendees section does not.
            let options = RenderOptions::new(now()).with_attendees(true);
            let rendered = NoteRenderer::new(options).render(&sample_meeting());
            assert!(rendered.contains("- **Bob Jones**\n"));
        }

        #[test]
        fn attendees_section_omitted_when_list_empty() {
            let mut meeting = sample_meeting();
            meeting.attendees.clear();
            let options = RenderOptions::new(now()).with_attendees(true);
            let rendered = NoteRenderer::new(options).render(&meeting);
            assert!(!rendered.contains("## Attendees"));
        }

        #[test]
        fn empty_organizer_is_treated_as_unset() {
            let mut meeting = Meeting::new();
            meeting.title = "Sync".to_string();
            meeting.organizer = Some(String::new());
            let rendered = NoteRenderer::new(RenderOptions::new(now())).render(&meeting);
            assert!(rendered.contains("tags: [meeting]\n"));
            assert!(!rendered.contains("organiser:"));
            assert!(!rendered.contains("participants:"));
        }
    }

    mod plain {
        use super::*;

        fn plain_options() -> RenderOptions {
            RenderOptions::new(now())
                .with_format(NoteFormat::Plain)
                .with_details(true)
                .with_attendees(true)
        }

        #[test]
        fn full_meeting_with_all_sections() {
            let rendered = NoteRenderer::new(plain_options()).render(&sample_meeting());

            let expected = "Team Weekly Sync
================

Meeting Details:
Date & Time: Monday, 27 October⋅14:30 – 15:00
Frequency: Weekly on Monday
Meeting Link: https://meet.google.com/abc-defg-hij
Phone Information:
+44 20 1234 5678
PIN: 123#
Organizer: Bob Jones

Attendees:
- John Smith (Optional)
- Jane Doe - Home
- Bob Jones

Description:
Hi, team
agenda

Notes:
(Add your meeting notes here)

Links:
- https://meet.google.com/abc-defg-hij
- https://docs.example.com/agenda

Action Items:
- [ ] \n";
            assert_eq!(rendered, expected);
        }

        #[test]
        fn minimal_meeting() {
            let mut meeting = Meeting::new();
            meeting.title = "Sync".to_string();
            let options = RenderOptions::new(now()).with_format(NoteFormat::Plain);
            let rendered = NoteRenderer::new(options).render(&meeting);
            assert_eq!(
                rendered,
                "Sync\n\
                 ====\n\
                 \n\
                 Notes:\n\
                 (Add your meeting notes here)\n\
                 \n\
                 Action Items:\n\
                 - [ ] \n"
            );
        }

        #[test]
        fn underline_matches_title_character_length() {
            let mut meeting = Meeting::new();
            meeting.title = "Café Sync".to_string();
            let options = RenderOptions::new(now()).with_format(NoteFormat::Plain);
            let rendered = NoteRenderer::new(options).render(&meeting);
            assert!(rendered.starts_with("Café Sync\n=========\n"));
        }
    }

    mod organizer_tag {
        use super::*;

        #[test]
        fn lowercases_first_token() {
            assert_eq!(organizer_tag("Bob Jones"), Some("bob".to_string()));
            assert_eq!(organizer_tag("ADA"), Some("ada".to_string()));
        }

        #[test]
        fn empty_organizer_yields_none() {
            assert_eq!(organizer_tag(""), None);
            assert_eq!(organizer_tag("   "), None);
        }
    }

    mod options {
        use super::*;

        #[test]
        fn defaults() {
            let options = RenderOptions::new(now());
            assert!(!options.include_details);
            assert!(!options.include_attendees);
            assert_eq!(options.format, NoteFormat::Markdown);
        }

        #[test]
        fn serde_roundtrip() {
            let options = RenderOptions::new(now())
                .with_details(true)
                .with_format(NoteFormat::Plain);
            let json = serde_json::to_string(&options).unwrap();
            let parsed: RenderOptions = serde_json::from_str(&json).unwrap();
            assert_eq!(options, parsed);
        }
    }
}
