//! Derived statistics over parsed messages.
//!
//! Every function here is pure: it reads the records it is given and
//! returns plain data. Functions that take "records" accept any iterator of
//! `&MessageRecord`, so both a whole [`Timeline`](crate::Timeline) and a
//! filtered subset can be passed:
//!
//! ```rust
//! use chatlens::metrics::{total_messages, total_words};
//!
//! let timeline = chatlens::parse(
//!     "5/1/2023, 10:15 AM - Alice: Hello there\n5/1/2023, 10:16 AM - Bob: Hi",
//! );
//! assert_eq!(total_messages(&timeline), 2);
//!
//! let alice: Vec<_> = timeline.by_sender("Alice");
//! assert_eq!(total_words(alice.iter().copied()), 2);
//! ```
//!
//! | Module | Statistics |
//! |--------|------------|
//! | [`counts`] | messages, words, media, links, longest message, first/last date |
//! | [`sentiment`] | positive / negative / neutral buckets |
//! | [`offensive`] | denylist hits |
//! | [`rankings`] | top users, conversation starters |
//! | [`activity`] | weekday distribution, weekday x hour heatmap |
//! | [`emoji`] | emoji frequency |

pub mod activity;
pub mod counts;
pub mod emoji;
pub mod offensive;
pub mod rankings;
pub mod sentiment;

use std::collections::HashMap;

use serde::Serialize;

pub use activity::{ActiveDays, ActivityHeatmap, DayActivity, active_days, activity_heatmap};
pub use counts::{
    first_message_date, last_message_date, links_shared, longest_message, media_messages,
    total_messages, total_words,
};
pub use emoji::{emoji_usage, top_emojis};
pub use offensive::offensive_words;
pub use rankings::{conversation_starters, message_counts, top_users};
pub use sentiment::{SentimentCounts, sentiment};

/// One row of a ranking: a label and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankEntry {
    pub name: String,
    pub count: usize,
}

impl RankEntry {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Sorts counts by count descending, then name ascending, keeping at most `limit`.
pub(crate) fn rank<K: AsRef<str>>(counts: HashMap<K, usize>, limit: Option<usize>) -> Vec<RankEntry> {
    let mut entries: Vec<RankEntry> = counts
        .into_iter()
        .map(|(name, count)| RankEntry::new(name.as_ref(), count))
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    if let Some(limit) = limit {
        entries.truncate(limit);
    }
    entries
}
