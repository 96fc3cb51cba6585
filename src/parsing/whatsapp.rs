//! WhatsApp export line patterns and timestamp normalization.
//!
//! Android-style exports prefix every message with `date, time - `:
//!
//! - 12-hour: `5/1/2023, 10:15 AM - Alice: Hello!`
//! - 24-hour: `5/1/2023, 22:15 - Bob: Hello!`
//!
//! Dates are read day-first.

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use serde::{Deserialize, Serialize};

// Exports sometimes start with a BOM or carry a left-to-right mark.
const LINE_START: &str = r"^[\u{FEFF}\u{200E}]?";

/// Timestamp layout used throughout one export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimestampFormat {
    /// `D/M/Y, H:MM AM - sender: message`
    TwelveHour,
    /// `D/M/Y, HH:MM - sender: message`
    TwentyFourHour,
}

impl TimestampFormat {
    /// Formats in detection order.
    pub fn detection_order() -> &'static [TimestampFormat] {
        &[TimestampFormat::TwelveHour, TimestampFormat::TwentyFourHour]
    }

    /// Returns the full message-line pattern for this format.
    ///
    /// Capture groups: date, time, sender, body.
    pub fn pattern(self) -> String {
        let body = match self {
            // 5/1/2023, 10:15 AM - Alice: Hello!
            TimestampFormat::TwelveHour => {
                r"(\d{1,4}/\d{1,4}/\d{1,4}),\s(\d{1,2}:\d{2}\s?[APap][Mm])\s-\s([^:\r\n]+):\s?(.*)"
            }
            // 5/1/2023, 22:15 - Bob: Hello!
            TimestampFormat::TwentyFourHour => {
                r"(\d{1,4}/\d{1,4}/\d{1,4}),\s(\d{2}:\d{2})\s-\s([^:\r\n]+):\s?(.*)"
            }
        };
        format!("{LINE_START}{body}")
    }

    /// Compiles [`pattern`](Self::pattern).
    pub fn regex(self) -> Regex {
        Regex::new(&self.pattern()).expect("message pattern is valid")
    }

    /// Parses a matched date and time into a timestamp.
    pub fn parse_timestamp(self, date_str: &str, time_str: &str) -> Option<NaiveDateTime> {
        let date = parse_day_first_date(date_str)?;
        let (hour, minute) = match self {
            TimestampFormat::TwelveHour => parse_twelve_hour(time_str)?,
            TimestampFormat::TwentyFourHour => parse_twenty_four_hour(time_str)?,
        };
        date.and_hms_opt(hour, minute, 0)
    }
}

impl std::fmt::Display for TimestampFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimestampFormat::TwelveHour => write!(f, "12-hour"),
            TimestampFormat::TwentyFourHour => write!(f, "24-hour"),
        }
    }
}

impl std::str::FromStr for TimestampFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "12" | "12h" | "12-hour" | "twelve-hour" => Ok(TimestampFormat::TwelveHour),
            "24" | "24h" | "24-hour" | "twenty-four-hour" => Ok(TimestampFormat::TwentyFourHour),
            _ => Err(format!(
                "Unknown timestamp format: '{}'. Expected 12h or 24h",
                s
            )),
        }
    }
}

/// Pattern for any `date, time - ` prefix, whatever the clock style.
///
/// A line carrying this prefix starts a new entry in the export (a message
/// or a system notice), so it is never a continuation of the previous body.
/// The ` - ` separator is required: a body line such as `12/1/2023, 10:30
/// instead?` stays part of the message.
pub fn entry_prefix_regex() -> Regex {
    let pattern = format!(
        r"{LINE_START}\d{{1,4}}/\d{{1,4}}/\d{{1,4}},\s\d{{1,2}}:\d{{2}}(?:\s?[APap][Mm])?\s-\s"
    );
    Regex::new(&pattern).expect("entry prefix pattern is valid")
}

/// Resolves a one- or two-digit year: 00-68 is 20xx, 69-99 is 19xx.
pub fn expand_year(year: i32, digits: usize) -> i32 {
    if digits > 2 {
        year
    } else if year <= 68 {
        2000 + year
    } else {
        1900 + year
    }
}

/// Parses `D/M/Y` with 1-4 digit groups.
fn parse_day_first_date(date_str: &str) -> Option<NaiveDate> {
    let mut parts = date_str.split('/');
    let day: u32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let year_str = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    let year = expand_year(year_str.parse().ok()?, year_str.len());
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parses `H:MM AM`, `H:MMpm`, `H:MM\u{202f}AM` and similar.
fn parse_twelve_hour(time_str: &str) -> Option<(u32, u32)> {
    let time_str = time_str.trim();
    let split = time_str.len().checked_sub(2)?;
    let (clock, meridiem) = time_str.split_at_checked(split)?;
    let (hour, minute) = split_clock(clock.trim_end())?;
    if !(1..=12).contains(&hour) {
        return None;
    }
    let pm = match meridiem.to_ascii_lowercase().as_str() {
        "am" => false,
        "pm" => true,
        _ => return None,
    };
    let hour = match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h,
        (h, true) => h + 12,
    };
    Some((hour, minute))
}

fn parse_twenty_four_hour(time_str: &str) -> Option<(u32, u32)> {
    let (hour, minute) = split_clock(time_str.trim())?;
    (hour < 24).then_some((hour, minute))
}

fn split_clock(clock: &str) -> Option<(u32, u32)> {
    let (hour, minute) = clock.split_once(':')?;
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    (minute < 60).then_some((hour, minute))
}
