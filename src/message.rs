//! Parsed chat message records.
//!
//! A [`MessageRecord`] is one conversation turn taken from a chat export:
//! who sent it, what they wrote and when. Calendar fields used by the
//! metrics (year, month, weekday, hour, minute) are derived once when the
//! record is built and cached on it.
//!
//! # Example
//!
//! ```
//! use chatlens::MessageRecord;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 1, 5)
//!     .unwrap()
//!     .and_hms_opt(10, 15, 0)
//!     .unwrap();
//! let msg = MessageRecord::new("Alice", "Hello!", Some(ts));
//!
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.hour(), Some(10));
//! assert_eq!(msg.day_name(), Some("Thursday"));
//! assert_eq!(msg.month_name(), Some("January"));
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::Serialize;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekdays in the order reports present them.
pub const WEEK_ORDER: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English name of a weekday ("Monday", ...).
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Full English name of a month, `1` being January.
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
}

/// Calendar fields cached from a valid timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedTime {
    pub year: i32,
    /// Month number, 1-12.
    pub month: u32,
    pub weekday: Weekday,
    pub hour: u32,
    pub minute: u32,
}

impl DerivedTime {
    fn from_timestamp(ts: NaiveDateTime) -> Self {
        Self {
            year: ts.year(),
            month: ts.month(),
            weekday: ts.weekday(),
            hour: ts.hour(),
            minute: ts.minute(),
        }
    }
}

/// A single parsed chat message.
///
/// Records are immutable once built. `timestamp` is `None` when the line
/// matched the export pattern but its date or time could not be
/// normalized; such records still count towards message totals but are
/// ignored by date-dependent statistics.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `sender` | `String` | Trimmed display name, never empty |
/// | `body` | `String` | Message text, may span several lines |
/// | `timestamp` | `Option<NaiveDateTime>` | When the message was sent |
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageRecord {
    /// Display name of the author, trimmed.
    pub sender: String,

    /// Text of the message, continuation lines joined with `\n`.
    pub body: String,

    /// Normalized send time, if the export's date and time were valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<NaiveDateTime>,

    #[serde(skip)]
    derived: Option<DerivedTime>,
}

impl MessageRecord {
    /// Creates a record and derives its calendar fields from `timestamp`.
    pub fn new(
        sender: impl Into<String>,
        body: impl Into<String>,
        timestamp: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            sender: sender.into(),
            body: body.into(),
            timestamp,
            derived: timestamp.map(DerivedTime::from_timestamp),
        }
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the normalized timestamp, if any.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamp
    }

    /// Returns the calendar date of the message, if the timestamp is valid.
    pub fn date(&self) -> Option<NaiveDate> {
        self.timestamp.map(|ts| ts.date())
    }

    /// Returns all cached calendar fields at once.
    pub fn derived(&self) -> Option<&DerivedTime> {
        self.derived.as_ref()
    }

    pub fn year(&self) -> Option<i32> {
        self.derived.map(|d| d.year)
    }

    /// Month name, e.g. `"January"`.
    pub fn month_name(&self) -> Option<&'static str> {
        self.derived.and_then(|d| month_name(d.month))
    }

    pub fn weekday(&self) -> Option<Weekday> {
        self.derived.map(|d| d.weekday)
    }

    /// Day-of-week name, e.g. `"Monday"`.
    pub fn day_name(&self) -> Option<&'static str> {
        self.derived.map(|d| weekday_name(d.weekday))
    }

    pub fn hour(&self) -> Option<u32> {
        self.derived.map(|d| d.hour)
    }

    pub fn minute(&self) -> Option<u32> {
        self.derived.map(|d| d.minute)
    }

    /// Returns `true` if the body is longer than one line.
    pub fn is_multiline(&self) -> bool {
        self.body.contains('\n')
    }
}
