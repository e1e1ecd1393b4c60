//! Output formatting functions.

pub mod json;
pub mod pretty;

use crate::cli::OutputFormat;

/// Shown when the sermon feed is empty or could not be fetched.
pub const NO_SERMONS: &str = "No sermons available.";
/// Shown when the events feed is empty or could not be fetched.
pub const NO_EVENTS: &str = "No events scheduled.";
/// Shown when the filters removed every item.
pub const NO_MATCHES: &str = "No matches. Try clearing your search or filters.";

/// Format a value for output.
pub fn format_output<T: serde::Serialize>(value: &T, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(value),
        OutputFormat::Pretty => json::format_json_pretty(value),
    }
}
