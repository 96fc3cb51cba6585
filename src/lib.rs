//! # Chatlens
//!
//! A Rust library for parsing WhatsApp chat exports and computing
//! conversation statistics from them.
//!
//! ## Overview
//!
//! A WhatsApp "export chat" text file is read into a [`Timeline`] of
//! [`MessageRecord`]s. Both the 12-hour (`5/1/2023, 10:15 AM - Alice: Hi`)
//! and 24-hour (`5/1/2023, 22:15 - Bob: Hi`) export styles are detected
//! automatically. From a timeline the [`metrics`] module derives message and
//! word counts, media and link shares, sentiment buckets, offensive-word
//! hits, top users, conversation starters, weekday activity and emoji usage.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! let timeline = chatlens::parse(
//!     "5/1/2023, 10:15 AM - Alice: Hello!\n\
//!      5/1/2023, 10:16 AM - Bob: Hi Alice 😀",
//! );
//!
//! let report = Analyzer::new().analyze(&timeline, &FilterConfig::new());
//! assert_eq!(report.total_messages, 2);
//! assert_eq!(report.conversation_starters[0].name, "Alice");
//! assert_eq!(report.emoji_usage["😀"], 1);
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`ChatParser`](parser::ChatParser), [`Timeline`], [`parse`], [`parse_bytes`], [`parse_file`]
//! - [`parsing`] - export line patterns and timestamp normalization
//! - [`message`] - [`MessageRecord`] and its derived calendar fields
//! - [`metrics`] - pure statistics over records
//! - [`classify`] - pluggable sentiment and emoji classifiers
//! - [`report`] - [`Analyzer`](report::Analyzer) and [`ChatReport`](report::ChatReport)
//! - [`core`] - record filtering and timeline export writers
//! - [`config`] - [`ParserConfig`](config::ParserConfig), [`AnalysisConfig`](config::AnalysisConfig)
//! - [`format`] - export format selection
//! - [`error`] - [`ChatlensError`] and [`Result`]
//! - [`prelude`] - convenient re-exports

pub mod classify;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
#[cfg(feature = "cli")]
pub mod logging;
pub mod message;
pub mod metrics;
pub mod parser;
pub mod parsing;
pub mod report;

pub use error::{ChatlensError, Result};
pub use message::MessageRecord;
pub use parser::{Timeline, parse, parse_bytes, parse_file};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::MessageRecord;
    pub use crate::error::{ChatlensError, Result};

    // Parsing
    pub use crate::parser::{ChatParser, Timeline, parse, parse_bytes, parse_file};
    pub use crate::parsing::TimestampFormat;

    // Configuration
    pub use crate::config::{AnalysisConfig, ParserConfig};

    // Filtering
    pub use crate::core::filter::{FilterConfig, apply_filters};

    // Analysis
    pub use crate::classify::{
        EmojiClassifier, LexiconSentiment, Sentiment, SentimentClassifier, UnicodeEmoji,
    };
    pub use crate::metrics::RankEntry;
    pub use crate::report::{Analyzer, ChatReport};

    // Export
    pub use crate::format::{ExportFormat, to_format_string, write_to_format};
}
