//! Multi-source catalog loading and merging
//!
//! This module orchestrates one load cycle: every configured source is
//! retrieved, sanitized, parsed, and standardized independently, then the
//! surviving records are merged into a single sequence with stable ids.
//!
//! ## Architecture
//!
//! - [`fetcher`] - Source text retrieval over HTTP or from the filesystem
//! - [`loader`] - Load cycle orchestration, identity assignment, cancellation
//! - [`stats`] - Per-source load statistics and failure diagnostics
//!
//! A failure retrieving one source never aborts the cycle; it is captured
//! as a diagnostic alongside whatever the other sources produced.

pub mod fetcher;
pub mod loader;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use fetcher::SourceFetcher;
pub use loader::{CatalogLoader, LoadResult};
pub use stats::{LoadStats, SourceFailure, SourceLoadStats};
