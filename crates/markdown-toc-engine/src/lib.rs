pub mod document;
pub mod heading;
pub mod io;
pub mod numbering;
pub mod toc;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use document::{Document, renumber};
pub use io::*;
pub use numbering::{Numbered, NumberingOptions, SectionNumbers, number_headings};
pub use toc::{TOC_START, TOC_STOP, TocEntry, splice_toc};
