//! Load statistics and failure diagnostics
//!
//! Every load cycle produces one [`LoadStats`]: per-source counts for the
//! sources that were read, and a failure entry for each source that could
//! not be retrieved or parsed at all. Validation drops are silent per row
//! but counted here per source, so the loss stays observable.

use serde::{Deserialize, Serialize};

use crate::app::models::SourceTag;

/// Counts for one successfully retrieved source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceLoadStats {
    /// The source these counts describe
    pub source: SourceTag,

    /// Data rows the parser saw
    pub rows_seen: usize,

    /// Rows that survived standardization
    pub records_standardized: usize,

    /// Rows dropped for missing or non-finite numeric fields
    pub rows_rejected: usize,

    /// Warnings collected during tabular parsing
    pub parse_warnings: Vec<String>,
}

impl SourceLoadStats {
    /// Create empty counts for a source
    pub fn new(source: SourceTag) -> Self {
        Self {
            source,
            rows_seen: 0,
            records_standardized: 0,
            rows_rejected: 0,
            parse_warnings: Vec::new(),
        }
    }

    /// Fraction of seen rows that became records, as a percentage
    pub fn yield_rate(&self) -> f64 {
        if self.rows_seen == 0 {
            0.0
        } else {
            (self.records_standardized as f64 / self.rows_seen as f64) * 100.0
        }
    }
}

/// A source that failed outright during a load cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceFailure {
    /// The source that failed
    pub source: SourceTag,

    /// Human-readable failure description
    pub message: String,
}

/// Aggregate statistics for one load cycle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadStats {
    /// Counts per successfully read source, in source-list order
    pub sources: Vec<SourceLoadStats>,

    /// Sources that failed retrieval or parsing entirely
    pub failures: Vec<SourceFailure>,
}

impl LoadStats {
    /// Create empty load statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Total records merged across all sources
    pub fn total_records(&self) -> usize {
        self.sources.iter().map(|s| s.records_standardized).sum()
    }

    /// Total rows silently rejected during standardization
    pub fn total_rejected(&self) -> usize {
        self.sources.iter().map(|s| s.rows_rejected).sum()
    }

    /// Whether any source failed outright
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Aggregated human-readable diagnostic, if any source failed
    ///
    /// Failure messages are joined in source order, mirroring how partial
    /// load problems are surfaced to the consumer.
    pub fn diagnostics(&self) -> Option<String> {
        if self.failures.is_empty() {
            return None;
        }
        Some(
            self.failures
                .iter()
                .map(|f| format!("{}: {}", f.source, f.message))
                .collect::<Vec<_>>()
                .join(" | "),
        )
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Load summary: {} records from {} sources ({} rows rejected, {} sources failed)",
            self.total_records(),
            self.sources.len(),
            self.total_rejected(),
            self.failures.len()
        )
    }
}
