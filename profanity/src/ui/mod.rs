//! Terminal output helpers: status messages, diffs and step summaries.

pub mod diff_viewer;
pub mod output_format;
pub mod summary;
