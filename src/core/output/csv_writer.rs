//! CSV output writer.

use std::fs::File;
use std::path::Path;

use super::ExportRow;
use crate::MessageRecord;
use crate::error::ChatlensError;

fn write_rows<'a, W, I>(out: W, records: I) -> Result<W, ChatlensError>
where
    W: std::io::Write,
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(ExportRow::HEADER)?;
    for record in records {
        writer.write_record(ExportRow::from_record(record).to_fields())?;
    }

    writer.flush()?;
    writer.into_inner().map_err(|e| ChatlensError::Io(e.into_error()))
}

/// Writes records to a CSV file with a `;` delimiter.
///
/// # Format
/// - Columns: `Timestamp`, `Date`, `Day`, `Hour`, `Sender`, `Message`
/// - Undated records leave the first four columns empty
/// - Encoding: UTF-8
pub fn write_csv<'a, I>(records: I, output_path: impl AsRef<Path>) -> Result<(), ChatlensError>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let file = File::create(output_path)?;
    write_rows(file, records)?;
    Ok(())
}

/// Same as [`write_csv`] but returns the document as a string.
pub fn to_csv<'a, I>(records: I) -> Result<String, ChatlensError>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let bytes = write_rows(Vec::new(), records)?;
    Ok(String::from_utf8(bytes)?)
}
