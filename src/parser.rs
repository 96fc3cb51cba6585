//! Chat export parser.
//!
//! Turns the raw text of a WhatsApp export into a [`Timeline`]: the ordered
//! sequence of [`MessageRecord`]s the metrics are computed over.
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::ChatParser;
//!
//! let raw = "5/1/2023, 10:15 AM - Alice: Hello!\n\
//!            5/1/2023, 10:16 AM - Bob: Hi Alice\n\
//!            how are you?";
//!
//! let timeline = ChatParser::new().parse_str(raw);
//! assert_eq!(timeline.len(), 2);
//! assert_eq!(timeline[1].body, "Hi Alice\nhow are you?");
//! ```
//!
//! # Format detection
//!
//! The whole input is first scanned with the 12-hour pattern. If any line
//! matches, the entire export is read as 12-hour; otherwise the 24-hour
//! pattern is used. Mixed-format exports are not supported.
//!
//! # Known limitation
//!
//! The sender is everything between ` - ` and the first colon, so a display
//! name that itself contains a colon is truncated there and the rest of the
//! name becomes part of the body.

use std::collections::BTreeSet;
use std::fs;
use std::ops::Deref;
use std::path::Path;

use regex::Regex;
use serde::Serialize;
use tracing::{debug, warn};

use crate::MessageRecord;
use crate::config::ParserConfig;
use crate::error::ChatlensError;
use crate::parsing::{TimestampFormat, entry_prefix_regex};

/// Ordered sequence of parsed messages from one export.
///
/// Order is the order of appearance in the source text, which is not
/// necessarily chronological.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Timeline {
    records: Vec<MessageRecord>,
    format: Option<TimestampFormat>,
}

impl Timeline {
    /// Creates a timeline from already-built records.
    pub fn new(records: Vec<MessageRecord>, format: Option<TimestampFormat>) -> Self {
        Self { records, format }
    }

    /// Timestamp format the export was read with; `None` if nothing matched.
    pub fn format(&self) -> Option<TimestampFormat> {
        self.format
    }

    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<MessageRecord> {
        self.records
    }

    /// Distinct senders, sorted ascending.
    pub fn senders(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.sender.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Records sent by `sender` (exact match), in timeline order.
    pub fn by_sender(&self, sender: &str) -> Vec<&MessageRecord> {
        self.records.iter().filter(|r| r.sender == sender).collect()
    }
}

impl Deref for Timeline {
    type Target = [MessageRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a MessageRecord;
    type IntoIter = std::slice::Iter<'a, MessageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Parser for WhatsApp TXT exports.
///
/// Holds only immutable configuration and compiled patterns, so one parser
/// can serve any number of independent exports.
///
/// # Example
///
/// ```rust,no_run
/// use chatlens::parser::ChatParser;
///
/// let timeline = ChatParser::new().parse_file("WhatsApp Chat with Alice.txt".as_ref())?;
/// println!("{} messages", timeline.len());
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ChatParser {
    config: ParserConfig,
    twelve_hour: Regex,
    twenty_four_hour: Regex,
    entry_prefix: Regex,
}

impl ChatParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            twelve_hour: TimestampFormat::TwelveHour.regex(),
            twenty_four_hour: TimestampFormat::TwentyFourHour.regex(),
            entry_prefix: entry_prefix_regex(),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    fn regex_for(&self, format: TimestampFormat) -> &Regex {
        match format {
            TimestampFormat::TwelveHour => &self.twelve_hour,
            TimestampFormat::TwentyFourHour => &self.twenty_four_hour,
        }
    }

    /// Picks the timestamp format for the whole input.
    ///
    /// 12-hour wins as soon as a single line matches it.
    pub fn detect_format(&self, content: &str) -> Option<TimestampFormat> {
        if let Some(forced) = self.config.format {
            return Some(forced);
        }
        TimestampFormat::detection_order().iter().copied().find(|&format| {
            let regex = self.regex_for(format);
            content.lines().any(|line| regex.is_match(line))
        })
    }

    /// Parses export text. Never fails: unmatched lines are skipped.
    pub fn parse_str(&self, content: &str) -> Timeline {
        let Some(format) = self.detect_format(content) else {
            debug!("no line matched a known timestamp format");
            return Timeline::default();
        };
        debug!(%format, "detected timestamp format");

        let regex = self.regex_for(format);
        let mut records: Vec<MessageRecord> = Vec::new();
        // (sender, body, timestamp) of the message still collecting lines
        let mut pending: Option<(String, String, Option<chrono::NaiveDateTime>)> = None;
        let mut blank_senders = 0usize;
        let mut invalid_timestamps = 0usize;

        for line in content.lines() {
            if let Some(caps) = regex.captures(line) {
                flush(&mut pending, &mut records);

                let date_str = caps.get(1).map_or("", |m| m.as_str());
                let time_str = caps.get(2).map_or("", |m| m.as_str());
                let sender = caps.get(3).map_or("", |m| m.as_str().trim());
                let body = caps.get(4).map_or("", |m| m.as_str());

                if sender.is_empty() {
                    blank_senders += 1;
                    continue;
                }

                let timestamp = format.parse_timestamp(date_str, time_str);
                if timestamp.is_none() {
                    invalid_timestamps += 1;
                }
                pending = Some((sender.to_string(), body.to_string(), timestamp));
            } else if self.entry_prefix.is_match(line) {
                // System notice or a line in the other clock style
                flush(&mut pending, &mut records);
            } else if self.config.join_multiline {
                if let Some((_, body, _)) = pending.as_mut() {
                    body.push('\n');
                    body.push_str(line);
                }
                // No open message: orphan line, skipped
            }
        }
        flush(&mut pending, &mut records);

        if blank_senders > 0 {
            warn!(count = blank_senders, "dropped messages with a blank sender");
        }
        if invalid_timestamps > 0 {
            warn!(
                count = invalid_timestamps,
                "kept messages whose timestamp could not be normalized"
            );
        }
        debug!(records = records.len(), "parsed chat export");

        Timeline::new(records, Some(format))
    }

    /// Decodes bytes as UTF-8 and parses them.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Timeline, ChatlensError> {
        let content =
            std::str::from_utf8(bytes).map_err(|e| ChatlensError::utf8("chat export", e))?;
        Ok(self.parse_str(content))
    }

    /// Reads and parses an export file.
    pub fn parse_file(&self, path: &Path) -> Result<Timeline, ChatlensError> {
        let bytes = fs::read(path)?;
        let content = std::str::from_utf8(&bytes)
            .map_err(|e| ChatlensError::utf8(path.display().to_string(), e))?;
        Ok(self.parse_str(content))
    }
}

impl Default for ChatParser {
    fn default() -> Self {
        Self::new()
    }
}

fn flush(
    pending: &mut Option<(String, String, Option<chrono::NaiveDateTime>)>,
    records: &mut Vec<MessageRecord>,
) {
    if let Some((sender, body, timestamp)) = pending.take() {
        records.push(MessageRecord::new(sender, body, timestamp));
    }
}

/// Parses export text with the default configuration.
///
/// ```rust
/// let timeline = chatlens::parse("5/1/2023, 10:15 AM - Alice: Hello!");
/// assert_eq!(timeline[0].sender, "Alice");
/// assert_eq!(timeline[0].hour(), Some(10));
/// ```
pub fn parse(raw_text: &str) -> Timeline {
    ChatParser::new().parse_str(raw_text)
}

/// Decodes and parses export bytes with the default configuration.
pub fn parse_bytes(bytes: &[u8]) -> Result<Timeline, ChatlensError> {
    ChatParser::new().parse_bytes(bytes)
}

/// Reads and parses an export file with the default configuration.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Timeline, ChatlensError> {
    ChatParser::new().parse_file(path.as_ref())
}
