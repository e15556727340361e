//! Exoplanet Catalog Unifier
//!
//! A Rust library for merging the NASA Kepler, K2, and TESS exoplanet
//! archive catalogs into a single queryable in-memory dataset.
//!
//! This library provides tools for:
//! - Parsing archive CSV exports with embedded comment lines
//! - Mapping each catalog's column conventions onto one canonical schema
//! - Validating records and silently excluding rows with unusable numerics
//! - Merging all sources with stable sequential identity assignment
//! - Filtering and paginating the merged set
//! - Submitting light curves to the remote classification service

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod state;
    pub mod services {
        pub mod catalog_loader;
        pub mod catalog_parser;
        pub mod field_mapper;
        pub mod filter_engine;
        pub mod paginator;
        pub mod predict_client;
        pub mod standardizer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CanonicalRecord, Disposition, RawRow, SourceDescriptor, SourceTag};
pub use config::CatalogConfig;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for catalog processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A source catalog could not be retrieved
    #[error("Retrieval error for source '{source_name}': {message}")]
    Retrieval {
        source_name: String,
        message: String,
    },

    /// A source catalog's text could not be interpreted at all
    #[error("Catalog format error in source '{source_name}': {message}")]
    CatalogFormat {
        source_name: String,
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Classification service rejected the request or returned an error body
    #[error("Prediction error: {message}")]
    Prediction { message: String },

    /// HTTP transport failure
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// JSON serialization failure
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Load cycle discarded by the caller
    #[error("Load cancelled: {reason}")]
    Cancelled { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a retrieval error for a named source
    pub fn retrieval(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Retrieval {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create a catalog format error for a named source
    pub fn catalog_format(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CatalogFormat {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a prediction error
    pub fn prediction(message: impl Into<String>) -> Self {
        Self::Prediction {
            message: message.into(),
        }
    }

    /// Create a cancellation error
    pub fn cancelled(reason: impl Into<String>) -> Self {
        Self::Cancelled {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Http {
            message: "HTTP request failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
