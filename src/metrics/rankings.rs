//! Sender rankings.

use std::collections::{BTreeMap, HashMap};

use chrono::{NaiveDate, NaiveDateTime};

use super::{RankEntry, rank};
use crate::MessageRecord;

/// Messages per sender.
pub fn message_counts<'a, I>(records: I) -> HashMap<&'a str, usize>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let mut counts = HashMap::new();
    for record in records {
        *counts.entry(record.sender.as_str()).or_insert(0) += 1;
    }
    counts
}

/// The `limit` most active senders, by message count.
///
/// Ties are broken by sender name ascending.
pub fn top_users<'a, I>(records: I, limit: usize) -> Vec<RankEntry>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    rank(message_counts(records), Some(limit))
}

/// How many days each sender opened the conversation.
///
/// For every calendar date, the sender of the chronologically first message
/// that day starts it; when two messages share the earliest timestamp the
/// one appearing first in the timeline wins. Records without a timestamp
/// are ignored, so a timeline with no valid timestamps yields an empty
/// ranking.
pub fn conversation_starters<'a, I>(records: I) -> Vec<RankEntry>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let mut first_of_day: BTreeMap<NaiveDate, (NaiveDateTime, &str)> = BTreeMap::new();

    for record in records {
        let Some(ts) = record.timestamp else {
            continue;
        };
        first_of_day
            .entry(ts.date())
            .and_modify(|(earliest, sender)| {
                if ts < *earliest {
                    *earliest = ts;
                    *sender = record.sender.as_str();
                }
            })
            .or_insert((ts, record.sender.as_str()));
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for (_, sender) in first_of_day.values() {
        *counts.entry(*sender).or_insert(0) += 1;
    }
    rank(counts, None)
}
