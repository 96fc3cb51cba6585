//! Record selection and export.
//!
//! - [`filter`] - narrowing a timeline by date range and sender
//! - [`output`] - timeline export writers (CSV, JSON, JSONL)
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() {
//! use chatlens::core::{FilterConfig, apply_filters, to_csv, to_json, to_jsonl};
//! # }
//! ```

pub mod filter;
pub mod output;

pub use filter::{FilterConfig, apply_filters};

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
