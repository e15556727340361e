//! Classify command implementation
//!
//! Sends light-curve files to the remote classification service. One file
//! uses the single-item route; several files go through the batch route,
//! where individual items may fail without failing the request.

use colored::Colorize;

use super::shared::init_logging;
use crate::Result;
use crate::app::services::predict_client::{BatchOutcome, PredictClient, Prediction};
use crate::cli::args::{ClassifyArgs, OutputFormat};
use crate::constants::DEFAULT_PREDICT_ENDPOINT;

/// Execute the classify command
pub async fn run_classify(args: ClassifyArgs) -> Result<()> {
    init_logging(args.get_log_level());
    args.validate()?;

    let endpoint = args
        .endpoint
        .clone()
        .unwrap_or_else(|| DEFAULT_PREDICT_ENDPOINT.to_string());
    let client = PredictClient::new(endpoint);

    let outcomes: Vec<(String, BatchOutcome)> = if args.files.len() == 1 {
        let file = &args.files[0];
        let prediction = client.predict(file).await?;
        vec![(display_name(file), BatchOutcome::Predicted(prediction))]
    } else {
        let results = client.predict_batch(&args.files).await?;
        args.files
            .iter()
            .map(display_name)
            .zip(results)
            .collect()
    };

    match args.output_format {
        OutputFormat::Human => {
            for (file, outcome) in &outcomes {
                print_outcome(file, outcome);
            }
        }
        OutputFormat::Json => {
            let payload: Vec<_> = outcomes
                .iter()
                .map(|(file, outcome)| serde_json::json!({ "file": file, "result": outcome }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }

    Ok(())
}

fn display_name(path: impl AsRef<std::path::Path>) -> String {
    path.as_ref().display().to_string()
}

fn print_outcome(file: &str, outcome: &BatchOutcome) {
    match outcome {
        BatchOutcome::Predicted(Prediction {
            prediction,
            probability,
            confidence,
            data_points,
            original_label,
        }) => {
            let label = match prediction.as_str() {
                "CONFIRMED" => prediction.green(),
                "FALSE POSITIVE" => prediction.red(),
                _ => prediction.yellow(),
            };
            print!(
                "{:<30} {} (probability {:.1}%, confidence {:.1}%, {} points",
                file,
                label,
                probability * 100.0,
                confidence * 100.0,
                data_points
            );
            match original_label {
                Some(original) => println!(", labeled {})", original),
                None => println!(")"),
            }
        }
        BatchOutcome::Failed { error } => {
            println!("{:<30} {} {}", file, "failed:".red(), error);
        }
    }
}
