//! Command-line interface definition using clap.
//!
//! - [`Args`] - CLI argument structure
//! - [`ReportFormat`] - how the report is printed
//! - [`ExportFormat`] - file format for `--export`, convertible to
//!   [`crate::format::ExportFormat`]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::parsing::TimestampFormat;

/// Analyze a WhatsApp chat export: activity, top users, conversation
/// starters, sentiment and emoji usage.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --user Alice --after 2023-01-01
    chatlens chat.txt -f json -o report.json
    chatlens chat.txt --export timeline.csv
    chatlens chat.txt --export timeline.out --export-format jsonl
    chatlens chat.txt --senders")]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// Restrict subset statistics to this sender (exact name)
    #[arg(short, long, value_name = "NAME")]
    pub user: Option<String>,

    /// Only messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also export the selected messages to this file
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Export format (default: from the --export file extension)
    #[arg(long, value_enum, requires = "export")]
    pub export_format: Option<ExportFormat>,

    /// Analysis settings as JSON (limits, media marker, denylist)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Force the timestamp style instead of detecting it (12h or 24h)
    #[arg(long, value_name = "STYLE")]
    pub time_format: Option<TimestampFormat>,

    /// Print the sorted list of senders and exit
    #[arg(long)]
    pub senders: bool,

    /// Show debug diagnostics on stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show errors on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

/// How the report is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable summary
    #[default]
    Text,

    /// Pretty-printed JSON with every statistic
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "JSON"),
        }
    }
}

/// Export file formats accepted by `--export-format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// CSV with semicolon delimiter
    Csv,

    /// JSON array of messages
    Json,

    /// JSON Lines, one message per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl From<ExportFormat> for crate::format::ExportFormat {
    fn from(format: ExportFormat) -> crate::format::ExportFormat {
        match format {
            ExportFormat::Csv => crate::format::ExportFormat::Csv,
            ExportFormat::Json => crate::format::ExportFormat::Json,
            ExportFormat::Jsonl => crate::format::ExportFormat::Jsonl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_args() {
        let args = Args::try_parse_from(["chatlens", "chat.txt"]).unwrap();
        assert_eq!(args.input, PathBuf::from("chat.txt"));
        assert_eq!(args.format, ReportFormat::Text);
        assert!(args.user.is_none());
        assert!(args.export.is_none());
    }

    #[test]
    fn test_full_args() {
        let args = Args::try_parse_from([
            "chatlens",
            "chat.txt",
            "--user",
            "Alice",
            "--after",
            "2023-01-01",
            "-f",
            "json",
            "--export",
            "out.data",
            "--export-format",
            "ndjson",
            "--time-format",
            "24h",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.user.as_deref(), Some("Alice"));
        assert_eq!(args.format, ReportFormat::Json);
        assert_eq!(args.export_format, Some(ExportFormat::Jsonl));
        assert_eq!(args.time_format, Some(TimestampFormat::TwentyFourHour));
        assert!(args.verbose);
    }

    #[test]
    fn test_conflicts() {
        assert!(Args::try_parse_from(["chatlens", "chat.txt", "-v", "-q"]).is_err());
        assert!(Args::try_parse_from(["chatlens", "chat.txt", "--export-format", "csv"]).is_err());
        assert!(Args::try_parse_from(["chatlens"]).is_err());
    }

    #[test]
    fn test_export_format_conversion() {
        let lib: crate::format::ExportFormat = ExportFormat::Jsonl.into();
        assert_eq!(lib, crate::format::ExportFormat::Jsonl);
    }

    #[test]
    fn test_report_format_serde() {
        let json = serde_json::to_string(&ReportFormat::Json).unwrap();
        assert_eq!(json, "\"json\"");
    }
}
