//! Tolerant parser for archive catalog exports
//!
//! This module turns the raw text of one catalog export into an ordered
//! sequence of header-keyed rows. Parsing is best-effort: malformed lines
//! become warnings and are excluded, never aborting the whole parse.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`sanitizer`] - Comment line removal
//! - [`parser`] - Header analysis and row extraction
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use exocatalog::app::services::catalog_parser::{sanitizer, parser};
//!
//! let text = "# archive comment\nkepid,koi_period\n10797460,9.488\n";
//! let cleaned = sanitizer::strip_comments(text);
//! let result = parser::parse(&cleaned);
//!
//! assert_eq!(result.rows.len(), 1);
//! assert_eq!(result.stats.rows_parsed, 1);
//! ```

pub mod parser;
pub mod sanitizer;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::parse;
pub use sanitizer::strip_comments;
pub use stats::{ParseResult, ParseStats};
