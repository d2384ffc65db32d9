//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use crate::bridge::AddressExclusionSet;
use crate::models::Address;
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    format!("{quoted:>width$}")
}

/// One line per candidate saying whether the bridge filter keeps it.
pub fn format_filter_report(candidates: &[Address], exclusions: &AddressExclusionSet) -> Vec<String> {
    candidates
        .iter()
        .map(|addr| {
            let status = match addr.ip() {
                Some(ip) if exclusions.contains(&ip) => "bridge".red(),
                Some(_) => "kept".green(),
                None => "hostname".yellow(),
            };
            format!(
                "{} {:>10} {status}",
                format_field(addr, 42),
                format!("{:?}", addr.scope())
            )
        })
        .collect()
}
