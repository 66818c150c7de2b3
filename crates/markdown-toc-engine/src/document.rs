use crate::numbering::{NumberingOptions, number_headings};
use crate::toc::splice_toc;

/// A Markdown document held as lines, without their terminators.
///
/// Line endings are normalised to `\n` on output. Whether the last line was
/// terminated is remembered so the rewritten text ends the same way, except
/// that a numbered heading is always terminated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub lines: Vec<String>,
    pub trailing_newline: bool,
}

impl Document {
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
            trailing_newline: text.ends_with('\n'),
        }
    }

    pub fn to_text(&self) -> String {
        let mut text = self.lines.join("\n");
        if self.trailing_newline && !self.lines.is_empty() {
            text.push('\n');
        }
        text
    }

    /// Run both passes: number headings, then regenerate the TOC region.
    pub fn renumber(&self, options: &NumberingOptions) -> Self {
        let numbered = number_headings(&self.lines, options);
        log::debug!(
            "numbered {} lines, {} TOC entries",
            numbered.lines.len(),
            numbered.toc.len()
        );
        Self {
            lines: splice_toc(&numbered.lines, &numbered.toc),
            trailing_newline: self.trailing_newline || numbered.ends_with_heading,
        }
    }
}

/// Number the headings in `text` and rebuild its table of contents.
pub fn renumber(text: &str, options: &NumberingOptions) -> String {
    Document::from_text(text).renumber(options).to_text()
}
