//! Sentinel markup for marked text
//!
//! The mark operation wraps sensitive spans in a fixed tag pair in plain
//! text output. Consumers re-parse that output into interleaved sensitive
//! and non-sensitive runs; both halves of the contract live here so the
//! tags are defined exactly once.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Opening sentinel tag
pub const SENSITIVE_OPEN_TAG: &str = "<sensitive>";

/// Closing sentinel tag
pub const SENSITIVE_CLOSE_TAG: &str = "</sensitive>";

/// One run of marked text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// The run's text, tags stripped
    pub text: String,
    /// Whether the run was inside a sentinel tag pair
    pub sensitive: bool,
}

impl Segment {
    fn sensitive(text: &str) -> Self {
        Self {
            text: text.to_string(),
            sensitive: true,
        }
    }

    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            sensitive: false,
        }
    }
}

/// Wraps a span's text in the sentinel tag pair
pub fn wrap_sensitive(text: &str) -> String {
    format!("{SENSITIVE_OPEN_TAG}{text}{SENSITIVE_CLOSE_TAG}")
}

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // (?s) so spans may contain newlines, non-greedy so adjacent spans
    // don't merge
    RE.get_or_init(|| {
        Regex::new(r"(?s)<sensitive>(.*?)</sensitive>").expect("tag regex is valid")
    })
}

/// Splits marked text into interleaved sensitive / non-sensitive runs
///
/// Scans for the tag pair non-greedily; any unmatched trailing text is
/// emitted as a non-sensitive run. Empty runs are skipped.
///
/// # Examples
///
/// ```
/// use cloak::anonymization::markup::split_sensitive_segments;
///
/// let segments = split_sensitive_segments("hi <sensitive>Max</sensitive>!");
/// assert_eq!(segments.len(), 3);
/// assert!(segments[1].sensitive);
/// assert_eq!(segments[1].text, "Max");
/// ```
pub fn split_sensitive_segments(marked: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last_end = 0;

    for caps in tag_regex().captures_iter(marked) {
        if let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) {
            if whole.start() > last_end {
                segments.push(Segment::plain(&marked[last_end..whole.start()]));
            }
            if !inner.as_str().is_empty() {
                segments.push(Segment::sensitive(inner.as_str()));
            }
            last_end = whole.end();
        }
    }

    if last_end < marked.len() {
        segments.push(Segment::plain(&marked[last_end..]));
    }

    segments
}
