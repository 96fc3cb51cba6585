//! Pluggable text classifiers.
//!
//! Sentiment and emoji detection are capabilities handed to the analyzer
//! rather than baked into it. Any closure of the right shape works, which
//! keeps tests deterministic:
//!
//! ```rust
//! use chatlens::classify::{EmojiClassifier, SentimentClassifier};
//!
//! let always_happy = |_: &str| 1.0;
//! assert_eq!(always_happy.polarity("whatever"), 1.0);
//!
//! let only_hearts = |c: char| c == '❤';
//! assert!(only_hearts.is_emoji('❤'));
//! ```
//!
//! The defaults are [`LexiconSentiment`] and [`UnicodeEmoji`].

use std::collections::HashMap;

use serde::Serialize;

/// Produces a polarity score for a piece of text.
///
/// Positive scores mean positive sentiment, negative scores negative, and
/// zero neutral. The magnitude is not interpreted.
pub trait SentimentClassifier: Send + Sync {
    fn polarity(&self, text: &str) -> f64;
}

impl<F> SentimentClassifier for F
where
    F: Fn(&str) -> f64 + Send + Sync,
{
    fn polarity(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Decides whether a single character is an emoji.
pub trait EmojiClassifier: Send + Sync {
    fn is_emoji(&self, c: char) -> bool;
}

impl<F> EmojiClassifier for F
where
    F: Fn(char) -> bool + Send + Sync,
{
    fn is_emoji(&self, c: char) -> bool {
        self(c)
    }
}

/// Sentiment bucket derived from a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// `> 0` is positive, `< 0` negative, anything else (including NaN) neutral.
    pub fn from_polarity(score: f64) -> Self {
        if score > 0.0 {
            Sentiment::Positive
        } else if score < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Negative => write!(f, "Negative"),
            Sentiment::Neutral => write!(f, "Neutral"),
        }
    }
}

const POSITIVE_WORDS: &[(&str, f64)] = &[
    ("good", 0.7),
    ("great", 0.8),
    ("awesome", 1.0),
    ("amazing", 0.6),
    ("excellent", 1.0),
    ("love", 0.5),
    ("loved", 0.7),
    ("like", 0.2),
    ("nice", 0.6),
    ("happy", 0.8),
    ("glad", 0.5),
    ("thanks", 0.2),
    ("thank", 0.2),
    ("best", 1.0),
    ("beautiful", 0.85),
    ("cool", 0.35),
    ("fun", 0.3),
    ("funny", 0.25),
    ("perfect", 1.0),
    ("wonderful", 1.0),
    ("congrats", 0.5),
    ("congratulations", 0.5),
    ("yay", 0.5),
    ("lol", 0.8),
    ("haha", 0.2),
    ("welcome", 0.8),
    ("sweet", 0.35),
    ("fantastic", 0.4),
    ("well", 0.1),
    ("better", 0.5),
];

const NEGATIVE_WORDS: &[(&str, f64)] = &[
    ("bad", -0.7),
    ("worse", -0.4),
    ("worst", -1.0),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("hate", -0.8),
    ("sad", -0.5),
    ("angry", -0.5),
    ("sorry", -0.5),
    ("sick", -0.7),
    ("boring", -1.0),
    ("stupid", -0.8),
    ("annoying", -0.8),
    ("horrible", -1.0),
    ("wrong", -0.5),
    ("ugly", -0.7),
    ("poor", -0.4),
    ("tired", -0.4),
    ("disappointed", -0.75),
    ("upset", -0.3),
    ("problem", -0.2),
    ("fail", -0.5),
    ("failed", -0.5),
    ("miss", -0.1),
    ("crazy", -0.6),
    ("fool", -0.4),
];

const NEGATIONS: &[&str] = &["not", "no", "never", "don't", "dont", "isn't", "isnt", "can't", "cant", "won't"];

/// Word-lexicon sentiment scorer.
///
/// Tokens are lowercased and stripped of surrounding punctuation, looked up
/// in a small polarity lexicon, and averaged over the scored tokens. A
/// negation directly before a scored word flips its sign and halves it.
#[derive(Debug, Clone)]
pub struct LexiconSentiment {
    lexicon: HashMap<String, f64>,
}

impl LexiconSentiment {
    /// Creates a scorer with the built-in English lexicon.
    pub fn new() -> Self {
        let lexicon = POSITIVE_WORDS
            .iter()
            .chain(NEGATIVE_WORDS)
            .map(|(word, score)| ((*word).to_string(), *score))
            .collect();
        Self { lexicon }
    }

    /// Adds or overrides a lexicon entry.
    #[must_use]
    pub fn with_word(mut self, word: impl Into<String>, score: f64) -> Self {
        self.lexicon.insert(word.into().to_lowercase(), score);
        self
    }
}

impl Default for LexiconSentiment {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentClassifier for LexiconSentiment {
    fn polarity(&self, text: &str) -> f64 {
        let mut total = 0.0;
        let mut scored = 0usize;
        let mut negate = false;

        for raw in text.split_whitespace() {
            let token = raw
                .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .to_lowercase();
            if NEGATIONS.contains(&token.as_str()) {
                negate = true;
                continue;
            }
            if let Some(score) = self.lexicon.get(&token) {
                total += if negate { -score * 0.5 } else { *score };
                scored += 1;
            }
            negate = false;
        }

        if scored == 0 { 0.0 } else { total / scored as f64 }
    }
}

/// Emoji detection by Unicode code-point ranges.
///
/// Covers the pictographic blocks (emoticons, symbols and pictographs,
/// transport, supplemental symbols) and regional indicators. In the older
/// symbol blocks only code points that Unicode lists as emoji count, so
/// plain marks like `✓` or `➔` are ignored. Joiners, variation selectors
/// and skin-tone modifiers are not counted on their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeEmoji;

impl EmojiClassifier for UnicodeEmoji {
    fn is_emoji(&self, c: char) -> bool {
        matches!(
            c as u32,
            0x1F300..=0x1F3FA
                | 0x1F400..=0x1F64F
                | 0x1F680..=0x1F6C5
                | 0x1F6CB..=0x1F6D2
                | 0x1F6D5..=0x1F6D7
                | 0x1F6DC..=0x1F6E5
                | 0x1F6E9
                | 0x1F6EB..=0x1F6EC
                | 0x1F6F0
                | 0x1F6F3..=0x1F6FC
                | 0x1F7E0..=0x1F7EB
                | 0x1F90C..=0x1F9FF
                | 0x1FA70..=0x1FAFF
                | 0x1F004
                | 0x1F0CF
                | 0x1F18E
                | 0x1F191..=0x1F19A
                | 0x1F1E6..=0x1F1FF
                | 0x1F201..=0x1F202
                | 0x1F232..=0x1F23A
                // Miscellaneous symbols and dingbats: emoji code points only
                | 0x2600..=0x2604
                | 0x260E
                | 0x2611
                | 0x2614..=0x2615
                | 0x2618
                | 0x261D
                | 0x2620
                | 0x2622..=0x2623
                | 0x2626
                | 0x262A
                | 0x262E..=0x262F
                | 0x2638..=0x263A
                | 0x2640
                | 0x2642
                | 0x2648..=0x2653
                | 0x265F..=0x2660
                | 0x2663
                | 0x2665..=0x2666
                | 0x2668
                | 0x267B
                | 0x267E..=0x267F
                | 0x2692..=0x2697
                | 0x2699
                | 0x269B..=0x269C
                | 0x26A0..=0x26A1
                | 0x26A7
                | 0x26AA..=0x26AB
                | 0x26B0..=0x26B1
                | 0x26BD..=0x26BE
                | 0x26C4..=0x26C5
                | 0x26C8
                | 0x26CE..=0x26CF
                | 0x26D1
                | 0x26D3..=0x26D4
                | 0x26E9..=0x26EA
                | 0x26F0..=0x26F5
                | 0x26F7..=0x26FA
                | 0x26FD
                | 0x2702
                | 0x2705
                | 0x2708..=0x270D
                | 0x270F
                | 0x2712
                | 0x2714
                | 0x2716
                | 0x271D
                | 0x2721
                | 0x2728
                | 0x2733..=0x2734
                | 0x2744
                | 0x2747
                | 0x274C
                | 0x274E
                | 0x2753..=0x2755
                | 0x2757
                | 0x2763..=0x2764
                | 0x2795..=0x2797
                | 0x27A1
                | 0x27B0
                | 0x27BF
                | 0x2B50
                | 0x2B55
                | 0x2B1B..=0x2B1C
                | 0x2934..=0x2935
                | 0x231A..=0x231B
                | 0x23E9..=0x23F3
                | 0x203C
                | 0x2049
                | 0x00A9
                | 0x00AE
                | 0x2122
                | 0x3030
                | 0x303D
        )
    }
}
