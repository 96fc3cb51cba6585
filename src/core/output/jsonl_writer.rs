//! JSON Lines (JSONL) output writer.
//!
//! One record per line, convenient for piping into `jq` or loading line by
//! line into other tools.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::ExportRow;
use crate::MessageRecord;
use crate::error::ChatlensError;

fn write_lines<'a, W, I>(out: &mut W, records: I) -> Result<(), ChatlensError>
where
    W: Write,
    I: IntoIterator<Item = &'a MessageRecord>,
{
    for record in records {
        serde_json::to_writer(&mut *out, &ExportRow::from_record(record))?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Writes records to a JSONL file.
///
/// ```jsonl
/// {"timestamp":"2023-01-05T10:15:00","date":"2023-01-05","day":"Thursday","hour":10,"sender":"Alice","message":"Hello"}
/// ```
pub fn write_jsonl<'a, I>(records: I, output_path: impl AsRef<Path>) -> Result<(), ChatlensError>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

/// Same as [`write_jsonl`] but returns the document as a string.
pub fn to_jsonl<'a, I>(records: I) -> Result<String, ChatlensError>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let mut buf = Vec::new();
    write_lines(&mut buf, records)?;
    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_one_object_per_line() {
        let records = vec![
            MessageRecord::new("Alice", "Hello", None),
            MessageRecord::new("Bob", "two\nlines", None),
        ];

        let jsonl = to_jsonl(&records).unwrap();
        let lines: Vec<_> = jsonl.lines().collect();
        assert_eq!(lines.len(), 2);

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["sender"], "Bob");
        assert_eq!(second["message"], "two\nlines");
    }

    #[test]
    fn test_write_jsonl_file() {
        let records = vec![MessageRecord::new("Alice", "Hello", None)];
        let temp_file = NamedTempFile::new().unwrap();

        write_jsonl(&records, temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.ends_with('\n'));
        assert!(content.contains(r#""sender":"Alice""#));
    }

    #[test]
    fn test_empty_is_empty() {
        let records: Vec<MessageRecord> = vec![];
        assert!(to_jsonl(&records).unwrap().is_empty());
    }
}
