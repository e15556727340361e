//! Configuration for catalog loading and querying
//!
//! Provides the static configuration consumed by the loader and the CLI:
//! which sources to read, how pages are sized, and where the
//! classification service lives.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::app::models::{SourceDescriptor, SourceTag};
use crate::constants::{DEFAULT_PAGE_SIZE, DEFAULT_PREDICT_ENDPOINT, DEFAULT_SOURCE_LOCATIONS};
use crate::{Error, Result};

/// Global configuration for the catalog unifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Source catalogs in merge order
    pub sources: Vec<SourceDescriptor>,

    /// Records per page for query output
    pub page_size: usize,

    /// Base URL of the light-curve classification service
    pub predict_endpoint: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let sources = DEFAULT_SOURCE_LOCATIONS
            .iter()
            .map(|(name, location)| {
                let tag = SourceTag::from_str(name)
                    .expect("default source table only contains known tags");
                SourceDescriptor::new(tag, *location)
            })
            .collect();

        Self {
            sources,
            page_size: DEFAULT_PAGE_SIZE,
            predict_endpoint: DEFAULT_PREDICT_ENDPOINT.to_string(),
        }
    }
}

impl CatalogConfig {
    /// Replace the source list
    pub fn with_sources(mut self, sources: Vec<SourceDescriptor>) -> Self {
        self.sources = sources;
        self
    }

    /// Override the location of one source, keeping merge order
    pub fn with_source_location(mut self, tag: SourceTag, location: impl Into<String>) -> Self {
        let location = location.into();
        match self.sources.iter_mut().find(|s| s.tag == tag) {
            Some(descriptor) => descriptor.location = location,
            None => self.sources.push(SourceDescriptor::new(tag, location)),
        }
        self
    }

    /// Set the page size
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the classification service endpoint
    pub fn with_predict_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.predict_endpoint = endpoint.into();
        self
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.sources.is_empty() {
            return Err(Error::configuration(
                "At least one source must be configured".to_string(),
            ));
        }

        for (index, descriptor) in self.sources.iter().enumerate() {
            if descriptor.location.trim().is_empty() {
                return Err(Error::configuration(format!(
                    "Source {} has an empty location",
                    descriptor.tag
                )));
            }
            if self.sources[..index].iter().any(|s| s.tag == descriptor.tag) {
                return Err(Error::configuration(format!(
                    "Source {} is configured more than once",
                    descriptor.tag
                )));
            }
        }

        if self.page_size == 0 {
            return Err(Error::configuration(
                "Page size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
