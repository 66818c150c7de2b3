//! First pass: assign hierarchical numbers to headings and collect TOC entries.

use crate::heading::{HeadingLine, is_fence};
use crate::toc::TocEntry;

pub const DEFAULT_MIN_DEPTH: usize = 2;
pub const DEFAULT_MAX_TOC_DEPTH: usize = 3;

/// Controls which headings are numbered and which make it into the TOC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberingOptions {
    /// Marker length treated as depth 0. Shorter headings are left alone.
    pub min_depth: usize,
    /// Deepest depth listed in the TOC. Deeper headings are still numbered.
    pub max_toc_depth: usize,
}

impl Default for NumberingOptions {
    fn default() -> Self {
        Self {
            min_depth: DEFAULT_MIN_DEPTH,
            max_toc_depth: DEFAULT_MAX_TOC_DEPTH,
        }
    }
}

/// Per-depth counters forming the current section number, e.g. `[2, 3]` is
/// section 2.3.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionNumbers(Vec<u32>);

impl SectionNumbers {
    /// Step to the next heading at `depth`. Missing shallower levels start at
    /// zero and every deeper counter is discarded.
    pub fn advance(&mut self, depth: usize) {
        if self.0.len() <= depth {
            self.0.resize(depth + 1, 0);
        }
        self.0[depth] += 1;
        self.0.truncate(depth + 1);
    }

    /// Dotted label; a lone top-level number gets a trailing period (`1.`).
    pub fn label(&self) -> String {
        let mut label = self
            .0
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(".");
        if self.0.len() == 1 {
            label.push('.');
        }
        label
    }
}

/// Output of the numbering pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Numbered {
    /// Input lines with heading labels rewritten; same length as the input.
    pub lines: Vec<String>,
    pub toc: Vec<TocEntry>,
    /// The final line was a numbered heading.
    pub ends_with_heading: bool,
}

/// Number every heading outside code fences and gather the TOC entries.
pub fn number_headings<S: AsRef<str>>(lines: &[S], options: &NumberingOptions) -> Numbered {
    let mut numbers = SectionNumbers::default();
    let mut in_code_block = false;
    let mut output = Numbered {
        lines: Vec::with_capacity(lines.len()),
        toc: Vec::new(),
        ends_with_heading: false,
    };

    for line in lines {
        let line = line.as_ref();
        if is_fence(line) {
            in_code_block = !in_code_block;
        }

        let heading = if in_code_block {
            None
        } else {
            HeadingLine::parse(line)
        };
        let Some((heading, depth)) =
            heading.and_then(|h| h.depth(options.min_depth).map(|depth| (h, depth)))
        else {
            output.lines.push(line.to_string());
            output.ends_with_heading = false;
            continue;
        };

        numbers.advance(depth);
        let subject = format!("{} {}", numbers.label(), heading.subject);
        log::trace!("numbered heading at depth {depth}: {subject}");

        output.lines.push(format!("{} {subject}", heading.marker));
        output.ends_with_heading = true;
        if depth <= options.max_toc_depth {
            output.toc.push(TocEntry::new(depth, subject));
        }
    }

    output
}
