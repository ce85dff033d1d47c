use std::io::Write;

use super::report::Report;

/// Render the report as a JSON object keyed by quantity and unit.
pub fn to_json_string(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Write the report as JSON to a writer.
pub fn write_report<W: Write>(writer: &mut W, report: &Report) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, report)
}
