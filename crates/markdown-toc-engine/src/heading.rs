//! Line-level recognisers for ATX headings and code fences.
//!
//! Detection is purely textual: a line is a heading if it matches
//! `#+ [label ]subject`, and a fence if its first non-whitespace characters
//! are three backticks. Nothing here knows about document context; the
//! numbering pass tracks whether a fence is open.

use regex::Regex;
use std::sync::OnceLock;

/// Opening characters of a backtick code fence.
pub const FENCE: &str = "```";

/// A heading line split into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingLine<'a> {
    /// The run of `#` characters.
    pub marker: &'a str,
    /// Numeric label already present on the heading, e.g. `1.2` or `3.`.
    pub label: Option<&'a str>,
    /// Heading text after the marker and any label.
    pub subject: &'a str,
}

impl<'a> HeadingLine<'a> {
    /// Parse `line` as a heading. Returns `None` for anything else, including
    /// `#` runs not followed by a space.
    pub fn parse(line: &'a str) -> Option<Self> {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        let heading_regex = HEADING_REGEX.get_or_init(|| {
            Regex::new(r"^(#+) (?:([0-9.]+) )?(.*)$").expect("Invalid heading regex")
        });

        let caps = heading_regex.captures(line)?;
        Some(Self {
            marker: caps.get(1)?.as_str(),
            label: caps.get(2).map(|m| m.as_str()),
            subject: caps.get(3).map_or("", |m| m.as_str()),
        })
    }

    /// Depth relative to `min_depth`, or `None` when the heading sits above
    /// the numbered levels.
    pub fn depth(&self, min_depth: usize) -> Option<usize> {
        self.marker.len().checked_sub(min_depth)
    }
}

/// Whether `line` opens or closes a backtick code fence.
pub fn is_fence(line: &str) -> bool {
    line.trim_start().starts_with(FENCE)
}
