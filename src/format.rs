//! Export format selection.
//!
//! These types carry no CLI dependency, so library users can pick a writer
//! from a file name or a string the same way the binary does.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatlens::Result<()> {
//! use chatlens::format::{ExportFormat, to_format_string};
//!
//! let timeline = chatlens::parse("5/1/2023, 10:15 AM - Alice: Hello!");
//!
//! let format = ExportFormat::from_path("timeline.jsonl")?;
//! assert_eq!(format, ExportFormat::Jsonl);
//!
//! let text = to_format_string(&timeline, format)?;
//! assert!(text.contains("Alice"));
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::MessageRecord;
use crate::error::ChatlensError;

/// File format for timeline exports.
///
/// ```rust
/// use chatlens::format::ExportFormat;
/// use std::str::FromStr;
///
/// let format = ExportFormat::from_str("ndjson").unwrap();
/// assert_eq!(format, ExportFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ExportFormat {
    /// CSV with semicolon delimiter
    #[default]
    Csv,

    /// JSON array of records
    Json,

    /// JSON Lines, one record per line
    Jsonl,
}

impl ExportFormat {
    /// File extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Jsonl => "jsonl",
        }
    }

    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    pub fn all() -> &'static [ExportFormat] {
        &[ExportFormat::Csv, ExportFormat::Json, ExportFormat::Jsonl]
    }

    /// Detects the format from a path's extension.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidFormat`] for an unknown or missing
    /// extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChatlensError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "jsonl" | "ndjson" => Ok(ExportFormat::Jsonl),
            _ => Err(ChatlensError::invalid_format(
                "export",
                format!("Unknown file extension: '.{ext}'. Expected one of: csv, json, jsonl"),
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "CSV"),
            ExportFormat::Json => write!(f, "JSON"),
            ExportFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "jsonl" | "ndjson" => Ok(ExportFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ExportFormat::all_names().join(", ")
            )),
        }
    }
}

fn missing_feature(format: ExportFormat) -> ChatlensError {
    ChatlensError::invalid_format(
        "export",
        format!(
            "Export format {format} requires the '{}' feature to be enabled",
            match format {
                ExportFormat::Csv => "csv-output",
                ExportFormat::Json | ExportFormat::Jsonl => "json-output",
            }
        ),
    )
}

/// Writes records to `path` using the writer for `format`.
///
/// # Errors
///
/// Fails if the writer's feature is disabled or the file cannot be written.
#[allow(unused_variables)]
pub fn write_to_format<'a, I>(
    records: I,
    path: impl AsRef<Path>,
    format: ExportFormat,
) -> Result<(), ChatlensError>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    match format {
        #[cfg(feature = "csv-output")]
        ExportFormat::Csv => crate::core::output::write_csv(records, path),
        #[cfg(feature = "json-output")]
        ExportFormat::Json => crate::core::output::write_json(records, path),
        #[cfg(feature = "json-output")]
        ExportFormat::Jsonl => crate::core::output::write_jsonl(records, path),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Renders records in `format` and returns the document.
#[allow(unused_variables)]
pub fn to_format_string<'a, I>(records: I, format: ExportFormat) -> Result<String, ChatlensError>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    match format {
        #[cfg(feature = "csv-output")]
        ExportFormat::Csv => crate::core::output::to_csv(records),
        #[cfg(feature = "json-output")]
        ExportFormat::Json => crate::core::output::to_json(records),
        #[cfg(feature = "json-output")]
        ExportFormat::Jsonl => crate::core::output::to_jsonl(records),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}
