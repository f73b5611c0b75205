//! Core types: meeting model, extraction heuristics, note rendering

pub mod extract;
pub mod links;
pub mod meeting;
pub mod render;
pub mod schedule;

pub use extract::{classify_attendee, extract_meeting, ScanState};
pub use links::{contains_url, contains_video_domain, is_single_url_line, url_tokens};
pub use meeting::{Attendee, AttendeeStatus, Meeting};
pub use render::{NoteFormat, NoteRenderer, RenderOptions};
pub use schedule::parse_start_time;
