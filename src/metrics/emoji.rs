//! Emoji frequency.

use std::collections::{BTreeMap, HashMap};

use super::{RankEntry, rank};
use crate::MessageRecord;
use crate::classify::EmojiClassifier;

/// Counts every character the classifier accepts, across all bodies.
///
/// Characters are counted one by one, so a multi-code-point sequence such
/// as a flag contributes each of its emoji code points separately.
pub fn emoji_usage<'a, I>(records: I, classifier: &dyn EmojiClassifier) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        for c in record.body.chars().filter(|c| classifier.is_emoji(*c)) {
            *counts.entry(c.to_string()).or_insert(0) += 1;
        }
    }
    counts
}

/// The `limit` most used emojis from an [`emoji_usage`] map.
pub fn top_emojis(usage: &BTreeMap<String, usize>, limit: usize) -> Vec<RankEntry> {
    let counts: HashMap<&str, usize> = usage.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    rank(counts, Some(limit))
}
