//! Parsing statistics and result structures for catalog text processing
//!
//! This module provides types for tracking how much of a source survived
//! parsing and for carrying the rows to the standardization stage.

use crate::app::models::RawRow;

/// Parsing result with raw rows and basic statistics
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    /// Successfully parsed rows, in source order
    pub rows: Vec<RawRow>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of data lines encountered
    pub total_lines: usize,

    /// Number of rows successfully parsed
    pub rows_parsed: usize,

    /// Number of lines skipped as malformed
    pub lines_skipped: usize,

    /// Non-fatal warnings collected while parsing
    pub warnings: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_lines == 0 {
            100.0
        } else {
            (self.rows_parsed as f64 / self.total_lines as f64) * 100.0
        }
    }

    /// Check if parsing was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }
}
