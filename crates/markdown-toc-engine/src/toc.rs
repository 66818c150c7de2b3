//! Table-of-contents entries and the splice pass that writes them between the
//! `<!-- toc -->` / `<!-- tocstop -->` markers.

use std::fmt;

/// Line prefix opening the managed TOC region.
pub const TOC_START: &str = "<!-- toc -->";
/// Line prefix closing the managed TOC region.
pub const TOC_STOP: &str = "<!-- tocstop -->";

/// One numbered heading as it appears in the TOC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub depth: usize,
    /// Numbered heading text, e.g. `1.2 Details`.
    pub subject: String,
}

impl TocEntry {
    pub fn new(depth: usize, subject: impl Into<String>) -> Self {
        Self {
            depth,
            subject: subject.into(),
        }
    }
}

impl fmt::Display for TocEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}](#{})",
            bullet(self.depth),
            self.subject,
            anchor(&self.subject)
        )
    }
}

/// List marker for a TOC line: top level uses `- `, nested levels use `* `
/// indented two spaces per level.
pub fn bullet(depth: usize) -> String {
    if depth == 0 {
        "- ".to_string()
    } else {
        format!("{}* ", "  ".repeat(depth))
    }
}

/// Link fragment for a heading: periods dropped, spaces hyphenated, lowercased.
pub fn anchor(subject: &str) -> String {
    subject.replace('.', "").replace(' ', "-").to_lowercase()
}

/// Replace whatever sits between the TOC markers with `entries`.
///
/// Both marker lines are kept. A start marker with no stop marker swallows
/// the rest of the document.
pub fn splice_toc(lines: &[String], entries: &[TocEntry]) -> Vec<String> {
    let mut output = Vec::with_capacity(lines.len() + entries.len() + 2);
    let mut in_toc = false;

    for line in lines {
        if line.starts_with(TOC_START) {
            in_toc = true;
            output.push(line.clone());
            output.push(String::new());
            output.extend(entries.iter().map(TocEntry::to_string));
            output.push(String::new());
            continue;
        }
        if line.starts_with(TOC_STOP) {
            in_toc = false;
        }
        if !in_toc {
            output.push(line.clone());
        }
    }

    if in_toc {
        log::warn!("{TOC_START} has no matching {TOC_STOP}; dropped the rest of the document");
    }

    output
}
