//! Configuration types for parsing and analysis.
//!
//! Plain serde structs with builder methods; no CLI framework types.
//!
//! - [`ParserConfig`] - how the export text is read
//! - [`AnalysisConfig`] - ranking sizes, media marker and offensive-word denylist
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{AnalysisConfig, ParserConfig};
//! use chatlens::parsing::TimestampFormat;
//!
//! let parser = ParserConfig::new().with_format(TimestampFormat::TwentyFourHour);
//! let analysis = AnalysisConfig::new()
//!     .with_top_users_limit(10)
//!     .with_denylist(["spam", "scam"]);
//!
//! assert_eq!(analysis.top_users_limit, 10);
//! assert!(analysis.is_denied("SPAM"));
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ChatlensError;
use crate::parsing::TimestampFormat;

/// Marker WhatsApp writes in place of attachments when exporting without media.
pub const MEDIA_OMITTED: &str = "<Media omitted>";

/// Default offensive-word denylist, matched case-insensitively per token.
pub const DEFAULT_DENYLIST: &[&str] = &[
    "nude",
    "sex",
    "fuck",
    "bitch",
    "asshole",
    "porn",
    "fool",
    "dick",
    "boobs",
    "slut",
    "madharchod",
    "nigger",
    "nigga",
    "cunt",
    "pussy",
    "lund",
    "lora",
    "chode",
    "mc",
    "gandmara",
];

/// Configuration for reading chat exports.
///
/// # Example
///
/// ```rust
/// use chatlens::config::ParserConfig;
///
/// let config = ParserConfig::new().with_join_multiline(false);
/// assert!(config.format.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Force a timestamp format instead of detecting it (default: detect)
    pub format: Option<TimestampFormat>,

    /// Append continuation lines to the previous message (default: true)
    pub join_multiline: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            format: None,
            join_multiline: true,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forces the given timestamp format.
    #[must_use]
    pub fn with_format(mut self, format: TimestampFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Sets whether continuation lines are joined into the message body.
    #[must_use]
    pub fn with_join_multiline(mut self, join: bool) -> Self {
        self.join_multiline = join;
        self
    }
}

/// Configuration for the metrics engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of senders in the top-users ranking (default: 5)
    pub top_users_limit: usize,

    /// Number of emojis in the top-emoji ranking (default: 5)
    pub top_emojis_limit: usize,

    /// Body substring that marks a media placeholder (default: `<Media omitted>`)
    pub media_marker: String,

    /// Offensive words, compared lowercase against whole tokens
    pub denylist: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_users_limit: 5,
            top_emojis_limit: 5,
            media_marker: MEDIA_OMITTED.to_string(),
            denylist: DEFAULT_DENYLIST.iter().map(|w| (*w).to_string()).collect(),
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration from JSON. Missing keys keep their defaults.
    ///
    /// ```rust
    /// use chatlens::config::AnalysisConfig;
    ///
    /// let config = AnalysisConfig::from_json(r#"{"top_users_limit": 3}"#)?;
    /// assert_eq!(config.top_users_limit, 3);
    /// assert_eq!(config.top_emojis_limit, 5);
    /// # Ok::<(), chatlens::ChatlensError>(())
    /// ```
    #[cfg(feature = "json-output")]
    pub fn from_json(json: &str) -> Result<Self, ChatlensError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ChatlensError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the limits are usable.
    pub fn validate(&self) -> Result<(), ChatlensError> {
        if self.top_users_limit == 0 {
            return Err(ChatlensError::config("top_users_limit must be at least 1"));
        }
        if self.top_emojis_limit == 0 {
            return Err(ChatlensError::config("top_emojis_limit must be at least 1"));
        }
        if self.media_marker.is_empty() {
            return Err(ChatlensError::config("media_marker must not be empty"));
        }
        Ok(())
    }

    /// Sets the size of the top-users ranking.
    #[must_use]
    pub fn with_top_users_limit(mut self, limit: usize) -> Self {
        self.top_users_limit = limit;
        self
    }

    /// Sets the size of the top-emoji ranking.
    #[must_use]
    pub fn with_top_emojis_limit(mut self, limit: usize) -> Self {
        self.top_emojis_limit = limit;
        self
    }

    /// Sets the media placeholder marker.
    #[must_use]
    pub fn with_media_marker(mut self, marker: impl Into<String>) -> Self {
        self.media_marker = marker.into();
        self
    }

    /// Replaces the denylist.
    #[must_use]
    pub fn with_denylist<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.denylist = words.into_iter().map(Into::into).collect();
        self
    }

    /// Returns `true` if `word` is on the denylist (case-insensitive).
    pub fn is_denied(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.denylist.iter().any(|w| w.to_lowercase() == word)
    }

    /// Lowercased denylist as a set, for per-token lookups.
    pub fn denylist_set(&self) -> HashSet<String> {
        self.denylist.iter().map(|w| w.to_lowercase()).collect()
    }
}
