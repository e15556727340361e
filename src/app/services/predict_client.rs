//! Client for the light-curve classification service
//!
//! The service itself is external; this module only implements its HTTP
//! contract. Single files go to the lightcurve route as a multipart `file`
//! field; batches repeat a `files` field. Successful responses carry one
//! prediction (or an array of them); failures carry an `{error}` body with
//! a non-2xx status. Batch responses mix per-item predictions and errors.

use std::path::Path;

use reqwest::multipart;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{PREDICT_BATCH_ROUTE, PREDICT_ROUTE};
use crate::{Error, Result};

/// One classification result returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted class label
    pub prediction: String,

    /// Class probability reported by the model
    pub probability: f64,

    /// Model confidence in the prediction
    pub confidence: f64,

    /// Number of light-curve samples the model saw
    pub data_points: u64,

    /// Ground-truth label when the upload carried one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_label: Option<String>,
}

/// Per-item outcome within a batch response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BatchOutcome {
    /// The item was classified
    Predicted(Prediction),

    /// The item failed; the service reports why
    Failed {
        /// Error description for this item
        error: String,
    },
}

/// Single-item responses arrive as one object or a one-element array
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SingleResponse {
    One(Prediction),
    Many(Vec<Prediction>),
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the classification service
#[derive(Debug, Clone)]
pub struct PredictClient {
    client: reqwest::Client,
    base_url: String,
}

impl PredictClient {
    /// Create a client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// The configured service base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Classify a single light-curve file
    pub async fn predict(&self, path: &Path) -> Result<Prediction> {
        let form = multipart::Form::new().part("file", file_part(path).await?);
        let url = format!("{}{}", self.base_url, PREDICT_ROUTE);
        debug!("Submitting {} to {}", path.display(), url);

        let response = self.client.post(&url).multipart(form).send().await?;
        let response = check_status(response).await?;

        match response.json::<SingleResponse>().await? {
            SingleResponse::One(prediction) => Ok(prediction),
            SingleResponse::Many(predictions) => predictions
                .into_iter()
                .next()
                .ok_or_else(|| Error::prediction("service returned an empty prediction array")),
        }
    }

    /// Classify a batch of light-curve files in one request
    pub async fn predict_batch(&self, paths: &[impl AsRef<Path>]) -> Result<Vec<BatchOutcome>> {
        let mut form = multipart::Form::new();
        for path in paths {
            form = form.part("files", file_part(path.as_ref()).await?);
        }

        let url = format!("{}{}", self.base_url, PREDICT_BATCH_ROUTE);
        debug!("Submitting {} files to {}", paths.len(), url);

        let response = self.client.post(&url).multipart(form).send().await?;
        let response = check_status(response).await?;

        Ok(response.json::<Vec<BatchOutcome>>().await?)
    }
}

/// Build a multipart part from a file on disk
async fn file_part(path: &Path) -> Result<multipart::Part> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| Error::io(format!("Failed to read light curve {}", path.display()), e))?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "lightcurve.csv".to_string());

    Ok(multipart::Part::bytes(bytes).file_name(file_name))
}

/// Turn a non-2xx response into a prediction error, decoding `{error}` if present
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("service returned status {}", status),
    };
    Err(Error::prediction(message))
}
