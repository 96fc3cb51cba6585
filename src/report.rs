//! Whole-chat analysis.
//!
//! [`Analyzer`] runs every metric over a [`Timeline`] and collects the results
//! into a [`ChatReport`]. Most statistics describe the filtered subset; the
//! ones that characterise the chat as a whole (top users, conversation
//! starters, first and last message date) always use the full timeline.
//!
//! ```rust
//! use chatlens::core::FilterConfig;
//! use chatlens::report::Analyzer;
//!
//! let timeline = chatlens::parse(
//!     "5/1/2023, 10:15 AM - Alice: Hello!\n\
//!      5/1/2023, 10:16 AM - Bob: <Media omitted>\n\
//!      6/1/2023, 9:00 AM - Bob: morning",
//! );
//!
//! let report = Analyzer::new().analyze(&timeline, &FilterConfig::new().with_sender("Bob"));
//! assert_eq!(report.total_messages, 2);
//! assert_eq!(report.media_messages, 1);
//! // full-timeline statistic
//! assert_eq!(report.conversation_starters[0].name, "Alice");
//! ```

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::debug;

use crate::classify::{EmojiClassifier, LexiconSentiment, SentimentClassifier, UnicodeEmoji};
use crate::config::AnalysisConfig;
use crate::core::filter::{FilterConfig, apply_filters};
use crate::metrics::{self, ActiveDays, ActivityHeatmap, RankEntry, SentimentCounts};
use crate::parser::Timeline;
use crate::parsing::TimestampFormat;

/// Every statistic for one timeline and filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReport {
    /// Timestamp format the export was read with.
    pub format: Option<TimestampFormat>,
    /// Filter the subset statistics were computed with.
    pub filter: FilterConfig,
    /// Distinct senders of the full timeline, sorted.
    pub senders: Vec<String>,

    pub total_messages: usize,
    pub total_words: usize,
    pub media_messages: usize,
    pub links_shared: usize,
    pub first_message_date: Option<NaiveDateTime>,
    pub last_message_date: Option<NaiveDateTime>,
    /// Empty when the subset is empty.
    pub longest_message: String,
    pub sentiment: SentimentCounts,
    pub offensive_words: BTreeMap<String, usize>,
    pub top_users: Vec<RankEntry>,
    pub conversation_starters: Vec<RankEntry>,
    pub active_days: ActiveDays,
    pub emoji_usage: BTreeMap<String, usize>,
    pub top_emojis: Vec<RankEntry>,
    pub activity_heatmap: ActivityHeatmap,
}

impl ChatReport {
    /// Serializes the report as pretty-printed JSON.
    #[cfg(feature = "json-output")]
    pub fn to_json(&self) -> Result<String, crate::ChatlensError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Computes [`ChatReport`]s with a fixed configuration and classifiers.
///
/// The analyzer holds no per-run state, so one instance can serve any
/// number of timelines, from several threads if needed.
pub struct Analyzer {
    config: AnalysisConfig,
    sentiment: Box<dyn SentimentClassifier>,
    emoji: Box<dyn EmojiClassifier>,
}

impl Analyzer {
    /// Analyzer with the default configuration, [`LexiconSentiment`] and
    /// [`UnicodeEmoji`].
    pub fn new() -> Self {
        Self::with_config(AnalysisConfig::default())
    }

    pub fn with_config(config: AnalysisConfig) -> Self {
        Self {
            config,
            sentiment: Box::new(LexiconSentiment::new()),
            emoji: Box::new(UnicodeEmoji),
        }
    }

    /// Replaces the sentiment classifier.
    ///
    /// ```rust
    /// use chatlens::report::Analyzer;
    ///
    /// let analyzer = Analyzer::new().with_sentiment_classifier(|_: &str| 0.0);
    /// let report = analyzer.analyze(&chatlens::parse("1/1/24, 10:00 - A: great"), &Default::default());
    /// assert_eq!(report.sentiment.neutral, 1);
    /// ```
    #[must_use]
    pub fn with_sentiment_classifier(mut self, classifier: impl SentimentClassifier + 'static) -> Self {
        self.sentiment = Box::new(classifier);
        self
    }

    /// Replaces the emoji classifier.
    #[must_use]
    pub fn with_emoji_classifier(mut self, classifier: impl EmojiClassifier + 'static) -> Self {
        self.emoji = Box::new(classifier);
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Runs every metric. Never fails: empty inputs produce zero/empty
    /// statistics.
    pub fn analyze(&self, timeline: &Timeline, filter: &FilterConfig) -> ChatReport {
        let selected = apply_filters(timeline.records(), filter);
        debug!(
            total = timeline.len(),
            selected = selected.len(),
            filtered = filter.is_active(),
            "analyzing timeline"
        );

        let subset = || selected.iter().copied();
        let emoji_usage = metrics::emoji_usage(subset(), self.emoji.as_ref());
        let top_emojis = metrics::top_emojis(&emoji_usage, self.config.top_emojis_limit);

        ChatReport {
            format: timeline.format(),
            filter: filter.clone(),
            senders: timeline.senders().into_iter().map(str::to_string).collect(),

            total_messages: metrics::total_messages(subset()),
            total_words: metrics::total_words(subset()),
            media_messages: metrics::media_messages(subset(), &self.config.media_marker),
            links_shared: metrics::links_shared(subset()),
            first_message_date: metrics::first_message_date(timeline.records()),
            last_message_date: metrics::last_message_date(timeline.records()),
            longest_message: metrics::longest_message(subset())
                .unwrap_or_default()
                .to_string(),
            sentiment: metrics::sentiment(subset(), self.sentiment.as_ref()),
            offensive_words: metrics::offensive_words(subset(), &self.config.denylist_set()),
            top_users: metrics::top_users(timeline, self.config.top_users_limit),
            conversation_starters: metrics::conversation_starters(timeline),
            active_days: metrics::active_days(subset()),
            emoji_usage,
            top_emojis,
            activity_heatmap: metrics::activity_heatmap(subset()),
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyzer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn write_ranking(f: &mut fmt::Formatter<'_>, title: &str, entries: &[RankEntry]) -> fmt::Result {
    writeln!(f, "{title}:")?;
    if entries.is_empty() {
        return writeln!(f, "  (none)");
    }
    for (i, entry) in entries.iter().enumerate() {
        writeln!(f, "  {}. {} ({})", i + 1, entry.name, entry.count)?;
    }
    Ok(())
}

fn fmt_date(ts: Option<NaiveDateTime>) -> String {
    ts.map_or_else(|| "-".to_string(), |ts| ts.format("%Y-%m-%d %H:%M").to_string())
}

/// Plain-text rendering used by the CLI's default output.
impl fmt::Display for ChatReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📊 Chat summary")?;
        if let Some(format) = self.format {
            writeln!(f, "   Timestamp format: {format}")?;
        }
        if let Some(sender) = &self.filter.sender {
            writeln!(f, "   Sender: {sender}")?;
        }
        writeln!(f, "   Messages:      {}", self.total_messages)?;
        writeln!(f, "   Words:         {}", self.total_words)?;
        writeln!(f, "   Media shared:  {}", self.media_messages)?;
        writeln!(f, "   Links shared:  {}", self.links_shared)?;
        writeln!(f, "   First message: {}", fmt_date(self.first_message_date))?;
        writeln!(f, "   Last message:  {}", fmt_date(self.last_message_date))?;
        writeln!(f)?;

        writeln!(
            f,
            "Sentiment: {} positive, {} negative, {} neutral",
            self.sentiment.positive, self.sentiment.negative, self.sentiment.neutral
        )?;
        writeln!(f)?;

        write_ranking(f, "Top users", &self.top_users)?;
        writeln!(f)?;
        write_ranking(f, "Conversation starters", &self.conversation_starters)?;
        writeln!(f)?;

        writeln!(f, "Active days:")?;
        for day in &self.active_days.days {
            writeln!(f, "  {:<9} {:>6} ({:.2}%)", day.day, day.count, day.percentage)?;
        }
        if let Some(hour) = self.activity_heatmap.peak_hour() {
            writeln!(f, "  Peak hour: {hour:02}:00")?;
        }
        writeln!(f)?;

        write_ranking(f, "Top emojis", &self.top_emojis)?;
        writeln!(f)?;

        writeln!(f, "Offensive words:")?;
        if self.offensive_words.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for (word, count) in &self.offensive_words {
            writeln!(f, "  {word}: {count}")?;
        }

        if !self.longest_message.is_empty() {
            writeln!(f)?;
            writeln!(f, "Longest message ({} chars):", self.longest_message.chars().count())?;
            for line in self.longest_message.lines() {
                writeln!(f, "  {line}")?;
            }
        }
        Ok(())
    }
}
