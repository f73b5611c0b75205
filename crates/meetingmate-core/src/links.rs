//! URL detection for invitation lines.
//!
//! This module provides the link-related line predicates used by the
//! extractor:
//! - Pulling `http://`/`https://` tokens out of prose lines
//! - Recognizing lines that are exactly one bare URL
//! - Recognizing known video conferencing domains
//!
//! URLs are kept verbatim; there is no normalization or deduplication. The
//! rendered note reproduces them in order of appearance.

use std::sync::LazyLock;

use regex::Regex;

/// Domains that mark a line as the meeting's video link.
const VIDEO_DOMAINS: [&str; 3] = ["meet.google.com", "zoom.us", "teams.microsoft.com"];

/// Matches whitespace-delimited tokens that start with an HTTP(S) scheme.
///
/// Anchored to token boundaries: a URL glued to the end of a word (e.g.
/// "see:https://x") is not a link token.
static URL_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\s)(https?://\S+)").expect("invalid URL token regex")
});

/// Extracts every whitespace-delimited URL token from the given line.
pub fn url_tokens(line: &str) -> Vec<&str> {
    URL_TOKEN_REGEX
        .captures_iter(line)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Returns true if the line contains at least one HTTP(S) scheme anywhere.
pub fn contains_url(line: &str) -> bool {
    line.contains("http://") || line.contains("https://")
}

/// Returns true if the line is exactly one bare URL token.
///
/// Such lines are fully consumed by the link rule and never reach the
/// attendee or description heuristics.
pub fn is_single_url_line(line: &str) -> bool {
    line.split_whitespace().count() == 1
        && (line.starts_with("http://") || line.starts_with("https://"))
}

/// Returns true if the line mentions a known video conferencing domain.
pub fn contains_video_domain(line: &str) -> bool {
    VIDEO_DOMAINS.iter().any(|domain| line.contains(domain))
}

#[cfg(test)]
mod tests {
    use super::*;

    mod url_tokens {
        use super::*;

        #[test]
        fn extracts_single_token() {
            let tokens = url_tokens("https://example.com/doc");
            assert_eq!(tokens, vec!["https://example.com/doc"]);
        }

        #[test]
        fn extracts_from_prose() {
            let tokens = url_tokens("Agenda doc: https://docs.example.com/agenda please read");
            assert_eq!(tokens, vec!["https://docs.example.com/agenda"]);
        }

        #[test]
        fn extracts_multiple_tokens() {
            let tokens = url_tokens("http://a.example/one https://b.example/two");
            assert_eq!(tokens, vec!["http://a.example/one", "https://b.example/two"]);
        }

        #[test]
        fn ignores_mid_word_urls() {
            // The scheme must start a whitespace-delimited token.
            let tokens = url_tokens("see:https://example.com for details");
            assert!(tokens.is_empty());
        }

        #[test]
        fn empty_line_yields_nothing() {
            assert!(url_tokens("").is_empty());
        }
    }

    mod single_url_line {
        use super::*;

        #[test]
        fn bare_url_is_single() {
            assert!(is_single_url_line("https://example.com"));
            assert!(is_single_url_line("http://example.com/path?q=1"));
        }

        #[test]
        fn prose_with_url_is_not() {
            assert!(!is_single_url_line("join at https://example.com"));
            assert!(!is_single_url_line("https://example.com today"));
        }

        #[test]
        fn non_url_is_not() {
            assert!(!is_single_url_line("example.com"));
        }
    }

    mod video_domains {
        use super::*;

        #[test]
        fn recognizes_known_services() {
            assert!(contains_video_domain("https://meet.google.com/abc-defg-hij"));
            assert!(contains_video_domain("Join: https://zoom.us/j/123456789"));
            assert!(contains_video_domain(
                "https://teams.microsoft.com/l/meetup-join/xyz"
            ));
        }

        #[test]
        fn rejects_other_domains() {
            assert!(!contains_video_domain("https://example.com/meeting"));
            assert!(!contains_video_domain("John Smith"));
        }
    }

    mod contains_url {
        use super::*;

        #[test]
        fn detects_schemes_anywhere() {
            assert!(contains_url("see:https://example.com"));
            assert!(contains_url("http://example.com"));
            assert!(!contains_url("example.com"));
        }
    }
}
