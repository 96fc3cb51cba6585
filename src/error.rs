//! Unified error types for chatlens.
//!
//! Parsing itself never fails: unmatched lines are skipped and bad timestamps
//! become `None`. The variants here cover the boundaries around the core:
//! decoding the uploaded bytes, reading and writing files, loading
//! configuration and validating user-supplied filter dates.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::Timeline;
///
/// fn load() -> Result<Timeline> {
///     chatlens::parse_bytes(b"5/1/2023, 10:15 AM - Alice: Hello!")
/// }
/// # assert_eq!(load().unwrap().len(), 1);
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input export doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid UTF-8.
    ///
    /// This is the only condition under which the parser reports an error.
    #[error("UTF-8 decoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::str::Utf8Error,
    },

    /// An output or input format was not recognized.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The kind of format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Invalid date in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// Analysis configuration could not be loaded.
    #[error("Invalid configuration: {message}")]
    Config {
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "output conversion".to_string(),
            source: err.utf8_error(),
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates a UTF-8 decoding error with context.
    pub fn utf8(context: impl Into<String>, source: std::str::Utf8Error) -> Self {
        ChatlensError::Utf8 {
            context: context.into(),
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatlensError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        ChatlensError::Config {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if the input could not be decoded as UTF-8.
    pub fn is_utf8(&self) -> bool {
        matches!(self, ChatlensError::Utf8 { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatlensError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatlensError::InvalidDate { .. })
    }

    /// Returns `true` if this is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self, ChatlensError::Config { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf8_error() -> std::str::Utf8Error {
        let bytes = vec![0xff, 0xfe];
        std::str::from_utf8(&bytes).unwrap_err()
    }

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChatlensError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_utf8_error_display() {
        let err = ChatlensError::utf8("chat export", utf8_error());
        let display = err.to_string();
        assert!(display.contains("UTF-8"));
        assert!(display.contains("chat export"));
    }

    #[test]
    fn test_invalid_format_display() {
        let err = ChatlensError::invalid_format("output", "unknown extension '.xml'");
        let display = err.to_string();
        assert!(display.contains("output"));
        assert!(display.contains(".xml"));
    }

    #[test]
    fn test_invalid_date_display() {
        let err = ChatlensError::invalid_date("not-a-date");
        let display = err.to_string();
        assert!(display.contains("not-a-date"));
        assert!(display.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_config_display() {
        let err = ChatlensError::config("top_users_limit must be positive");
        assert!(err.to_string().contains("top_users_limit"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let err = ChatlensError::utf8("input", utf8_error());
        assert!(err.source().is_some());

        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        assert!(ChatlensError::from(io_err).source().is_some());
    }

    #[test]
    fn test_is_methods() {
        let io_err = ChatlensError::Io(io::Error::new(io::ErrorKind::NotFound, ""));
        assert!(io_err.is_io());
        assert!(!io_err.is_utf8());
        assert!(!io_err.is_invalid_format());
        assert!(!io_err.is_invalid_date());

        let date_err = ChatlensError::invalid_date("bad");
        assert!(date_err.is_invalid_date());
        assert!(!date_err.is_io());
        assert!(!date_err.is_config());

        assert!(ChatlensError::utf8("x", utf8_error()).is_utf8());
        assert!(ChatlensError::config("x").is_config());
        assert!(ChatlensError::invalid_format("output", "x").is_invalid_format());
    }

    #[test]
    fn test_from_string_utf8_error() {
        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err: ChatlensError = utf8_err.into();
        assert!(err.is_utf8());
        assert!(err.to_string().contains("output conversion"));
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: ChatlensError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_error_debug() {
        let err = ChatlensError::invalid_date("bad");
        let debug = format!("{:?}", err);
        assert!(debug.contains("InvalidDate"));
    }
}
