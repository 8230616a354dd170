//! Output formatting functions.

pub mod json;
pub mod pretty;

use crate::cli::OutputFormat;

/// Format a value for output.
///
/// JSON output is the serialized value; pretty output is whatever `pretty`
/// renders for it.
pub fn format_output<T, F>(value: &T, format: OutputFormat, pretty: F) -> String
where
    T: serde::Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Json => json::format_json(value),
        OutputFormat::Pretty => pretty(value),
    }
}
