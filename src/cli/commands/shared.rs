//! Shared helpers for CLI commands
//!
//! Logging initialization, source override resolution, and the table
//! rendering used by the load and query commands.

use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::app::models::{CanonicalRecord, Disposition};
use crate::app::services::catalog_loader::LoadStats;
use crate::cli::args::SourceOverride;
use crate::config::CatalogConfig;

/// Initialize tracing with the requested default level
///
/// `RUST_LOG` wins when set, so `-v` flags only pick the fallback filter.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Apply CLI source overrides on top of the default configuration
pub fn resolve_config(overrides: &[SourceOverride]) -> CatalogConfig {
    let mut config = CatalogConfig::default();
    for source_override in overrides {
        config = config.with_source_location(
            source_override.tag,
            source_override.location.clone(),
        );
    }
    config
}

/// Render records as a fixed-width table
pub fn render_records_table(records: &[&CanonicalRecord]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<5} {:<24} {:<8} {:>10} {:>12} {:>8}  {}\n",
        "ID", "NAME", "SOURCE", "RADIUS", "PERIOD", "TEMP", "STATUS"
    ));

    for record in records {
        out.push_str(&format!(
            "{:<5} {:<24} {:<8} {:>10.2} {:>12.2} {:>8.0}  {}\n",
            record.id,
            truncate(&record.name, 24),
            record.source.to_string(),
            record.radius,
            record.period,
            record.temperature,
            colored_disposition(record.disposition),
        ));
    }

    out
}

/// Print a human-readable load summary
pub fn print_load_summary(stats: &LoadStats) {
    println!("{}", "Catalog load complete".bold());
    for source in &stats.sources {
        println!(
            "  {:<8} {} records from {} rows ({} rejected, {} parse warnings)",
            source.source.to_string(),
            source.records_standardized.to_string().green(),
            source.rows_seen,
            source.rows_rejected,
            source.parse_warnings.len()
        );
    }
    for failure in &stats.failures {
        println!(
            "  {:<8} {} {}",
            failure.source.to_string(),
            "failed:".red(),
            failure.message
        );
    }
    println!(
        "  {:<8} {} records merged",
        "total",
        stats.total_records().to_string().bold()
    );

    if let Some(diagnostics) = stats.diagnostics() {
        println!("{} {}", "Data load issue:".red().bold(), diagnostics);
    }
}

fn colored_disposition(disposition: Disposition) -> String {
    let label = disposition.to_string();
    match disposition {
        Disposition::Confirmed => label.green().to_string(),
        Disposition::Candidate => label.yellow().to_string(),
        Disposition::FalsePositive => label.red().to_string(),
    }
}

fn truncate(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        name.to_string()
    } else {
        let kept: String = name.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
