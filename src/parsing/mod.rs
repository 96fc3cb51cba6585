//! Export-format parsing utilities.
//!
//! Line patterns and timestamp normalization live here so that the parser
//! and the benchmarks share one definition of the export format.

pub mod whatsapp;

pub use whatsapp::{TimestampFormat, entry_prefix_regex, expand_year};
