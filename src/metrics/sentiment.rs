//! Sentiment buckets.

use serde::Serialize;

use crate::MessageRecord;
use crate::classify::{Sentiment, SentimentClassifier};

/// Number of messages in each sentiment bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentCounts {
    pub fn get(&self, bucket: Sentiment) -> usize {
        match bucket {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    fn record(&mut self, bucket: Sentiment) {
        match bucket {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }
}

/// Classifies every body and counts the buckets.
pub fn sentiment<'a, I>(records: I, classifier: &dyn SentimentClassifier) -> SentimentCounts
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let mut counts = SentimentCounts::default();
    for record in records {
        counts.record(Sentiment::from_polarity(classifier.polarity(&record.body)));
    }
    counts
}
