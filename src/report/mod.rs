//! Report module - text rendering of dataset summaries and moments

mod advanced;
mod summary;

pub use summary::{DatasetReport, DEFAULT_PREVIEW_ROWS};

use std::fmt;

const BANNER_WIDTH: usize = 60;

/// Section heading framed by `=` rules.
pub(crate) fn banner(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(f, "\n{rule}\n{title}\n{rule}")
}
