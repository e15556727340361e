//! Query command implementation
//!
//! Loads the catalogs, applies the filter criteria from the CLI, and
//! prints one page of the filtered view. A requested page outside the
//! valid range is ignored and the first page is shown instead.

use colored::Colorize;
use tokio_util::sync::CancellationToken;

use super::shared::{init_logging, render_records_table, resolve_config};
use crate::Result;
use crate::app::services::catalog_loader::CatalogLoader;
use crate::app::state::ExplorerState;
use crate::cli::args::{OutputFormat, QueryArgs};

/// Execute the query command
pub async fn run_query(args: QueryArgs, cancellation_token: CancellationToken) -> Result<()> {
    init_logging(args.get_log_level());
    args.validate()?;

    let config = resolve_config(&args.locations);
    config.validate()?;

    let loader = CatalogLoader::new(config.sources);
    let result = loader
        .load(&cancellation_token, args.show_progress())
        .await?;

    let mut state = ExplorerState::new(args.page_size)?;
    state.publish(result);
    state.apply_filters(args.to_criteria()?);
    state.set_page(args.page);

    match args.output_format {
        OutputFormat::Human => print_page(&state),
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&state.current_page_records())?
            );
        }
    }

    Ok(())
}

fn print_page(state: &ExplorerState) {
    if let Some(diagnostics) = state.diagnostics() {
        println!("{} {}", "Data load issue:".red().bold(), diagnostics);
    }

    let filtered = state.filtered_len();
    if filtered == 0 {
        println!("No records match the given filters");
        return;
    }

    let page = state.current_page_records();
    print!("{}", render_records_table(&page));

    let window_start = (state.current_page() - 1) * state.page_size();
    println!(
        "Showing {} to {} of {} results (page {}/{})",
        window_start + 1,
        window_start + page.len(),
        filtered,
        state.current_page(),
        state.total_pages()
    );
}
