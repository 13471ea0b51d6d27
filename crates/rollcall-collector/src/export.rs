//! CSV export of a collected roster.
//!
//! Two columns, `Display Name` then `Username`, one row per unique record
//! in insertion order. Every field is double-quote-wrapped with internal
//! quotes escaped by doubling. Records are stored verbatim; escaping
//! happens only here.

use crate::error::ExportError;
use rollcall_core::Roster;
use std::path::Path;

/// Render the roster as CSV text, header row included.
#[must_use]
pub fn to_csv(roster: &Roster) -> String {
    let mut csv = String::new();
    push_row(&mut csv, "Display Name", "Username");
    for record in roster {
        push_row(&mut csv, &record.display_name, record.username.as_str());
    }
    csv
}

/// Write the roster as a CSV file at `path`.
///
/// Callers should skip this entirely for an empty roster and degrade to
/// surfacing [`to_csv`] output when the write fails.
pub fn write_csv(roster: &Roster, path: &Path) -> Result<(), ExportError> {
    std::fs::write(path, to_csv(roster))?;
    tracing::info!(rows = roster.len(), path = %path.display(), "CSV written");
    Ok(())
}

fn push_row(csv: &mut String, display_name: &str, username: &str) {
    csv.push_str(&escape_field(display_name));
    csv.push(',');
    csv.push_str(&escape_field(username));
    csv.push('\n');
}

/// Quote-wrap a field, doubling internal double quotes.
fn escape_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
