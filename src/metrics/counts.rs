//! Scalar counts over message bodies.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::MessageRecord;

static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://\S+|www\.\S+|\b[a-zA-Z0-9.-]+\.(?:com|org|net|in|gov|edu|info)\b")
        .expect("link pattern is valid")
});

/// Number of records.
pub fn total_messages<'a, I>(records: I) -> usize
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    records.into_iter().count()
}

/// Sum of whitespace-delimited tokens over all bodies.
pub fn total_words<'a, I>(records: I) -> usize
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    records
        .into_iter()
        .map(|r| r.body.split_whitespace().count())
        .sum()
}

/// Number of bodies containing `marker` (normally `<Media omitted>`).
pub fn media_messages<'a, I>(records: I, marker: &str) -> usize
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    records
        .into_iter()
        .filter(|r| r.body.contains(marker))
        .count()
}

/// Returns `true` if `text` contains something that looks like a link.
///
/// Matches `http(s)://...`, `www....` and bare domains ending in
/// com/org/net/in/gov/edu/info.
pub fn contains_link(text: &str) -> bool {
    LINK_PATTERN.is_match(text)
}

/// Number of bodies containing at least one link.
pub fn links_shared<'a, I>(records: I) -> usize
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    records
        .into_iter()
        .filter(|r| contains_link(&r.body))
        .count()
}

/// Body with the most characters; the earliest wins ties.
pub fn longest_message<'a, I>(records: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let mut longest: Option<(&str, usize)> = None;
    for record in records {
        let len = record.body.chars().count();
        if longest.is_none_or(|(_, best)| len > best) {
            longest = Some((&record.body, len));
        }
    }
    longest.map(|(body, _)| body)
}

/// Timestamp of the first record in timeline order.
///
/// Positional, not chronological: `None` if the timeline is empty or its
/// first record has no valid timestamp.
pub fn first_message_date(records: &[MessageRecord]) -> Option<NaiveDateTime> {
    records.first().and_then(|r| r.timestamp)
}

/// Timestamp of the last record in timeline order.
pub fn last_message_date(records: &[MessageRecord]) -> Option<NaiveDateTime> {
    records.last().and_then(|r| r.timestamp)
}
