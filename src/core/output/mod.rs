//! Timeline export writers.
//!
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of records - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - one JSON object per line - requires `json-output` feature
//!
//! Every writer emits the same columns: the timestamp (ISO 8601, empty when
//! the line's timestamp was invalid), the derived date, weekday and hour,
//! then sender and message body.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::core::output::{to_csv, to_jsonl};
//!
//! let timeline = chatlens::parse("5/1/2023, 10:15 AM - Alice: Hello!");
//!
//! let csv = to_csv(&timeline)?;
//! assert!(csv.starts_with("Timestamp;Date;Day;Hour;Sender;Message"));
//!
//! let jsonl = to_jsonl(&timeline)?;
//! assert_eq!(jsonl.lines().count(), 1);
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

#[cfg(any(feature = "csv-output", feature = "json-output"))]
use serde::Serialize;

#[cfg(any(feature = "csv-output", feature = "json-output"))]
use crate::MessageRecord;

/// Flattened view of a record shared by all writers.
#[cfg(any(feature = "csv-output", feature = "json-output"))]
#[derive(Debug, Serialize)]
pub(crate) struct ExportRow<'a> {
    timestamp: Option<String>,
    date: Option<String>,
    day: Option<&'static str>,
    hour: Option<u32>,
    sender: &'a str,
    message: &'a str,
}

#[cfg(any(feature = "csv-output", feature = "json-output"))]
impl<'a> ExportRow<'a> {
    #[cfg(feature = "csv-output")]
    pub(crate) const HEADER: [&'static str; 6] = ["Timestamp", "Date", "Day", "Hour", "Sender", "Message"];

    pub(crate) fn from_record(record: &'a MessageRecord) -> Self {
        Self {
            timestamp: record
                .timestamp
                .map(|ts| ts.format("%Y-%m-%dT%H:%M:%S").to_string()),
            date: record.date().map(|d| d.format("%Y-%m-%d").to_string()),
            day: record.day_name(),
            hour: record.hour(),
            sender: &record.sender,
            message: &record.body,
        }
    }

    /// Column values in [`HEADER`](Self::HEADER) order; missing values are empty.
    #[cfg(feature = "csv-output")]
    pub(crate) fn to_fields(&self) -> [String; 6] {
        [
            self.timestamp.clone().unwrap_or_default(),
            self.date.clone().unwrap_or_default(),
            self.day.unwrap_or_default().to_string(),
            self.hour.map(|h| h.to_string()).unwrap_or_default(),
            self.sender.to_string(),
            self.message.to_string(),
        ]
    }
}

#[cfg(all(test, feature = "csv-output"))]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_row_fields() {
        let ts = NaiveDate::from_ymd_opt(2023, 3, 12)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        let record = MessageRecord::new("Alice", "Hi", Some(ts));
        assert_eq!(
            ExportRow::from_record(&record).to_fields(),
            ["2023-03-12T09:05:00", "2023-03-12", "Sunday", "9", "Alice", "Hi"].map(String::from)
        );
    }

    #[test]
    fn test_row_fields_without_timestamp() {
        let record = MessageRecord::new("Bob", "late", None);
        let fields = ExportRow::from_record(&record).to_fields();
        assert!(fields[..4].iter().all(String::is_empty));
        assert_eq!(fields[4], "Bob");
        assert_eq!(ExportRow::HEADER.len(), fields.len());
    }
}
