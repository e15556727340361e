//! Load command implementation
//!
//! Loads every configured catalog and reports per-source merge
//! statistics. Partial failures are reported alongside whatever data did
//! load; the command only fails outright when the cycle is cancelled.

use tokio_util::sync::CancellationToken;
use tracing::info;

use super::shared::{init_logging, print_load_summary, resolve_config};
use crate::Result;
use crate::app::services::catalog_loader::CatalogLoader;
use crate::cli::args::{LoadArgs, OutputFormat};

/// Execute the load command
pub async fn run_load(args: LoadArgs, cancellation_token: CancellationToken) -> Result<()> {
    init_logging(args.get_log_level());

    let config = resolve_config(&args.locations);
    config.validate()?;

    info!("Loading {} sources", config.sources.len());
    let loader = CatalogLoader::new(config.sources);
    let result = loader
        .load(&cancellation_token, args.show_progress())
        .await?;

    match args.output_format {
        OutputFormat::Human => print_load_summary(&result.stats),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result.stats)?);
        }
    }

    Ok(())
}
