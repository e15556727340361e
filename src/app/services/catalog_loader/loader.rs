//! Load cycle orchestration
//!
//! Sources are retrieved one at a time, in descriptor-list order. The
//! ordering is deliberate but not load-bearing: identity assignment runs
//! over the accumulated sequence after the last source, so it follows
//! source-list position either way, and the three archive exports are
//! small enough that parallel retrieval would buy nothing.

use indicatif::{ProgressBar, ProgressStyle};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use super::fetcher::SourceFetcher;
use super::stats::{LoadStats, SourceFailure, SourceLoadStats};
use crate::app::models::{CanonicalRecord, SourceDescriptor};
use crate::app::services::catalog_parser::{parse, strip_comments};
use crate::app::services::standardizer::standardize_row;
use crate::{Error, Result};

/// Result of one complete load cycle
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Merged records with ids 1..N in source-list-then-row order
    pub records: Vec<CanonicalRecord>,

    /// Per-source counts and failure diagnostics
    pub stats: LoadStats,
}

/// Loader for the configured source catalogs
///
/// One loader performs one load cycle at a time; the resulting record set
/// is returned whole, never exposed partially built.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    fetcher: SourceFetcher,
    sources: Vec<SourceDescriptor>,
}

impl CatalogLoader {
    /// Create a loader over the given sources
    pub fn new(sources: Vec<SourceDescriptor>) -> Self {
        Self {
            fetcher: SourceFetcher::new(),
            sources,
        }
    }

    /// Replace the fetcher (shared HTTP client reuse)
    pub fn with_fetcher(mut self, fetcher: SourceFetcher) -> Self {
        self.fetcher = fetcher;
        self
    }

    /// The sources this loader reads, in merge order
    pub fn sources(&self) -> &[SourceDescriptor] {
        &self.sources
    }

    /// Run one load cycle
    ///
    /// Each source is attempted independently: a retrieval or parse
    /// failure becomes a [`SourceFailure`] diagnostic and the remaining
    /// sources still load. After the last attempt, ids are assigned
    /// sequentially over the full accumulated sequence.
    ///
    /// Cancellation is checked between sources and once more before the
    /// result is committed; a cancelled cycle returns [`Error::Cancelled`]
    /// and publishes nothing.
    pub async fn load(
        &self,
        cancellation_token: &CancellationToken,
        show_progress: bool,
    ) -> Result<LoadResult> {
        info!("Starting load cycle over {} sources", self.sources.len());

        let mut records: Vec<CanonicalRecord> = Vec::new();
        let mut stats = LoadStats::new();

        let progress_bar = if show_progress {
            let pb = ProgressBar::new(self.sources.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .unwrap()
                    .progress_chars("#>-"),
            );
            pb.set_message("Loading catalogs...");
            Some(pb)
        } else {
            None
        };

        for descriptor in &self.sources {
            if cancellation_token.is_cancelled() {
                return Err(Error::cancelled("load cycle discarded before completion"));
            }

            if let Some(pb) = &progress_bar {
                pb.set_message(format!("Loading {}", descriptor.tag));
            }

            match self.load_source(descriptor).await {
                Ok((source_records, source_stats)) => {
                    info!(
                        "Loaded {}: {} records from {} rows ({} rejected)",
                        descriptor.tag,
                        source_stats.records_standardized,
                        source_stats.rows_seen,
                        source_stats.rows_rejected
                    );
                    records.extend(source_records);
                    stats.sources.push(source_stats);
                }
                Err(e) => {
                    warn!("Source {} failed: {}", descriptor.tag, e);
                    stats.failures.push(SourceFailure {
                        source: descriptor.tag,
                        message: e.to_string(),
                    });
                }
            }

            if let Some(pb) = &progress_bar {
                pb.inc(1);
            }
        }

        if let Some(pb) = &progress_bar {
            pb.finish_with_message("Catalog loading complete");
        }

        // In-flight work above is allowed to finish, but a cancelled cycle
        // must not commit its result
        if cancellation_token.is_cancelled() {
            return Err(Error::cancelled("load cycle discarded before completion"));
        }

        for (index, record) in records.iter_mut().enumerate() {
            record.id = (index + 1) as u32;
        }

        info!("{}", stats.summary());

        Ok(LoadResult { records, stats })
    }

    /// Retrieve and standardize one source
    async fn load_source(
        &self,
        descriptor: &SourceDescriptor,
    ) -> Result<(Vec<CanonicalRecord>, SourceLoadStats)> {
        let text = self.fetcher.fetch(&descriptor.location).await?;

        let cleaned = strip_comments(&text);
        if cleaned.trim().is_empty() {
            return Err(Error::catalog_format(
                descriptor.tag.name(),
                "no header line found after comment stripping",
            ));
        }

        let parsed = parse(&cleaned);

        let mut source_stats = SourceLoadStats::new(descriptor.tag);
        source_stats.rows_seen = parsed.stats.total_lines;
        source_stats.parse_warnings = parsed.stats.warnings;

        let mut records = Vec::with_capacity(parsed.rows.len());
        for row in &parsed.rows {
            match standardize_row(row, descriptor.tag) {
                Some(record) => records.push(record),
                None => source_stats.rows_rejected += 1,
            }
        }
        source_stats.records_standardized = records.len();

        Ok((records, source_stats))
    }
}
