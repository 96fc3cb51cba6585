//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::ExportRow;
use crate::MessageRecord;
use crate::error::ChatlensError;

/// Writes records to a JSON file as a pretty-printed array.
///
/// # Format
/// ```json
/// [
///   {"timestamp": "2023-01-05T10:15:00", "date": "2023-01-05", "day": "Thursday",
///    "hour": 10, "sender": "Alice", "message": "Hello"}
/// ]
/// ```
pub fn write_json<'a, I>(records: I, output_path: impl AsRef<Path>) -> Result<(), ChatlensError>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let json = to_json(records)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Same as [`write_json`] but returns the document as a string.
pub fn to_json<'a, I>(records: I) -> Result<String, ChatlensError>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let rows: Vec<ExportRow<'a>> = records.into_iter().map(ExportRow::from_record).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}
