//! Offensive-word detection.

use std::collections::{BTreeMap, HashSet};

use crate::MessageRecord;

/// Counts denylisted tokens across all bodies.
///
/// Bodies are split on whitespace and each token is lowercased and compared
/// whole against `denylist` (which must already be lowercase). Punctuation
/// attached to a token prevents a match. Only words seen at least once
/// appear in the result.
pub fn offensive_words<'a, I>(records: I, denylist: &HashSet<String>) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let mut counts = BTreeMap::new();
    if denylist.is_empty() {
        return counts;
    }
    for record in records {
        for token in record.body.split_whitespace() {
            let token = token.to_lowercase();
            if denylist.contains(&token) {
                *counts.entry(token).or_insert(0) += 1;
            }
        }
    }
    counts
}
