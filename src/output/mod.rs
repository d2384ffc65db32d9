//! Output formatting for filter results.
//!
//! - [`terminal`] - Terminal output with colors

mod terminal;

pub use terminal::{format_field, format_filter_report};
