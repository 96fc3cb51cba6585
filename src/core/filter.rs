//! Select records by date range and sender.
//!
//! [`FilterConfig`] describes the criteria and [`apply_filters`] borrows the
//! matching records out of a slice, so the full timeline stays intact for the
//! metrics that ignore the filter.
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Records on or after the date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Records on or before the date |
//! | Sender | [`with_sender`](FilterConfig::with_sender) | Records from exactly this sender |
//!
//! # Examples
//!
//! ```
//! use chatlens::core::filter::{FilterConfig, apply_filters};
//!
//! # fn main() -> chatlens::Result<()> {
//! let timeline = chatlens::parse(
//!     "1/1/2024, 09:00 - Alice: Old\n15/6/2024, 09:00 - Alice: New\n15/6/2024, 09:01 - Bob: Hi",
//! );
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .with_sender("Alice");
//!
//! let selected = apply_filters(&timeline, &config);
//! assert_eq!(selected.len(), 1);
//! assert_eq!(selected[0].body, "New");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Records without a timestamp are **excluded** when a date filter is active
//! - Sender matching is exact and case-sensitive
//! - Multiple filters are combined with AND logic

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::MessageRecord;
use crate::error::ChatlensError;

/// Criteria for narrowing a timeline down to a subset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Include only records at or after this instant.
    pub after: Option<NaiveDateTime>,

    /// Include only records at or before this instant.
    pub before: Option<NaiveDateTime>,

    /// Include only records from this sender.
    pub sender: Option<String>,
}

impl FilterConfig {
    /// Creates a filter that lets everything through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps records from the start of `date_str` (`YYYY-MM-DD`) onwards.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the date does not parse.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        self.after = Some(parse_date(date_str)?.and_time(NaiveTime::MIN));
        Ok(self)
    }

    /// Keeps records up to the end of `date_str` (`YYYY-MM-DD`).
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the date does not parse.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        let end_of_day = NaiveTime::from_hms_opt(23, 59, 59)
            .ok_or_else(|| ChatlensError::invalid_date(date_str))?;
        self.before = Some(parse_date(date_str)?.and_time(end_of_day));
        Ok(self)
    }

    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    #[must_use]
    pub fn with_after(mut self, dt: NaiveDateTime) -> Self {
        self.after = Some(dt);
        self
    }

    #[must_use]
    pub fn with_before(mut self, dt: NaiveDateTime) -> Self {
        self.before = Some(dt);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || self.sender.is_some()
    }

    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Whether a single record passes every active filter.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        if self
            .sender
            .as_deref()
            .is_some_and(|sender| record.sender != sender)
        {
            return false;
        }

        if self.has_date_filter() {
            let Some(ts) = record.timestamp else {
                return false;
            };
            if self.after.is_some_and(|after| ts < after) {
                return false;
            }
            if self.before.is_some_and(|before| ts > before) {
                return false;
            }
        }

        true
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate, ChatlensError> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
        .map_err(|_| ChatlensError::invalid_date(date_str))
}

/// Borrows the records that match `config`, preserving timeline order.
pub fn apply_filters<'a>(records: &'a [MessageRecord], config: &FilterConfig) -> Vec<&'a MessageRecord> {
    if !config.is_active() {
        return records.iter().collect();
    }
    records.iter().filter(|r| config.matches(r)).collect()
}
