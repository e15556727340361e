//! Command implementations for the catalog unifier CLI
//!
//! This module contains the command execution logic and output rendering
//! for the CLI interface. Each command is implemented in its own module:
//! - `load`: load every configured catalog and report merge statistics
//! - `query`: load, filter, and paginate the merged set
//! - `classify`: submit light curves to the classification service

pub mod classify;
pub mod load;
pub mod query;
pub mod shared;

use tokio_util::sync::CancellationToken;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
/// The cancellation token aborts an in-flight load cycle without
/// committing its result.
pub async fn run(args: Args, cancellation_token: CancellationToken) -> Result<()> {
    match args.get_command() {
        Commands::Load(load_args) => load::run_load(load_args, cancellation_token).await,
        Commands::Query(query_args) => query::run_query(query_args, cancellation_token).await,
        Commands::Classify(classify_args) => classify::run_classify(classify_args).await,
    }
}
