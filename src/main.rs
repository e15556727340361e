use clap::Parser;
use exocatalog::cli::{args::Args, commands};
use std::process;
use tokio_util::sync::CancellationToken;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic with signal handling
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        // Cancellation token coordinates graceful shutdown; a cancelled
        // load cycle finishes its in-flight retrieval but commits nothing
        let cancellation_token = CancellationToken::new();

        let shutdown_signal = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install CTRL+C signal handler");

            cancellation_token.cancel();
        };

        tokio::select! {
            result = commands::run(args, cancellation_token.clone()) => {
                result
            }
            _ = shutdown_signal => {
                eprintln!("\nReceived CTRL+C, shutting down gracefully...");
                Err(exocatalog::Error::cancelled(
                    "interrupted by user".to_string()
                ))
            }
        }
    });

    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Exocatalog - Unified Exoplanet Catalog Explorer");
    println!("===============================================");
    println!();
    println!("Merge the NASA Kepler, K2, and TESS archive exports into one");
    println!("canonical dataset and query it with range and source filters.");
    println!();
    println!("USAGE:");
    println!("    exocatalog <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    load        Load all configured catalogs and report merge statistics");
    println!("    query       Load, filter, and paginate the merged catalog");
    println!("    classify    Submit light-curve files to the classification service");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Load the default catalog locations:");
    println!("    exocatalog load");
    println!();
    println!("    # Query confirmed-size planets from TESS, second page:");
    println!("    exocatalog query --source tess --min-radius 0.8 --max-radius 2.0 --page 2");
    println!();
    println!("    # Point one source at a remote export:");
    println!("    exocatalog query -l kepler=https://example.org/kepler.csv");
    println!();
    println!("    # Classify light curves:");
    println!("    exocatalog classify lc1.csv lc2.csv --endpoint http://localhost:8000");
    println!();
    println!("For detailed help on any command, use:");
    println!("    exocatalog <COMMAND> --help");
}
