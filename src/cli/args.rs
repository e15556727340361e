//! Command-line argument definitions for the catalog unifier
//!
//! This module defines the complete CLI interface using the clap derive
//! API: loading the configured catalogs, querying the merged set, and
//! submitting light curves to the classification service.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

use crate::app::models::SourceTag;
use crate::app::services::filter_engine::{FilterCriteria, RangeFilter};
use crate::constants::{DEFAULT_PAGE_SIZE, PAGE_SIZE_CHOICES};
use crate::{Error, Result};

/// CLI arguments for the exoplanet catalog unifier
///
/// Merges the Kepler, K2, and TESS archive exports into one canonical
/// dataset and serves range/category queries with pagination over it.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "exocatalog",
    version,
    about = "Unify the Kepler, K2, and TESS exoplanet catalogs into one queryable dataset",
    long_about = "Loads the three NASA exoplanet archive exports, reconciles their divergent \
                  column conventions into one canonical record type, and serves filtered, \
                  paginated views of the merged set. Light curves can additionally be sent \
                  to the remote classification service."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Load all configured catalogs and report merge statistics
    Load(LoadArgs),
    /// Load the catalogs, then filter and paginate the merged set
    Query(QueryArgs),
    /// Submit light-curve files to the classification service
    Classify(ClassifyArgs),
}

/// Arguments for the load command
#[derive(Debug, Clone, Parser)]
pub struct LoadArgs {
    /// Override a source location (repeatable)
    ///
    /// Format: TAG=LOCATION, where TAG is kepler, k2, or tess and LOCATION
    /// is an http(s) URL or a filesystem path.
    #[arg(
        short = 'l',
        long = "location",
        value_name = "TAG=LOCATION",
        help = "Override a source location, e.g. kepler=data/kepler.csv"
    )]
    pub locations: Vec<SourceOverride>,

    /// Output format for the load report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the query command
#[derive(Debug, Clone, Parser)]
pub struct QueryArgs {
    /// Override a source location (repeatable)
    #[arg(
        short = 'l',
        long = "location",
        value_name = "TAG=LOCATION",
        help = "Override a source location, e.g. tess=https://example.org/tess.csv"
    )]
    pub locations: Vec<SourceOverride>,

    /// Restrict results to one source catalog
    #[arg(
        short = 's',
        long = "source",
        value_name = "SOURCE",
        default_value = "all",
        help = "Source catalog to include: kepler, k2, tess, or all"
    )]
    pub source: String,

    /// Minimum planetary radius (Earth radii), inclusive
    #[arg(long = "min-radius", value_name = "R")]
    pub min_radius: Option<f64>,

    /// Maximum planetary radius (Earth radii), inclusive
    #[arg(long = "max-radius", value_name = "R")]
    pub max_radius: Option<f64>,

    /// Minimum orbital period (days), inclusive
    #[arg(long = "min-period", value_name = "DAYS")]
    pub min_period: Option<f64>,

    /// Maximum orbital period (days), inclusive
    #[arg(long = "max-period", value_name = "DAYS")]
    pub max_period: Option<f64>,

    /// Minimum equilibrium temperature (Kelvin), inclusive
    #[arg(long = "min-temp", value_name = "K")]
    pub min_temp: Option<f64>,

    /// Maximum equilibrium temperature (Kelvin), inclusive
    #[arg(long = "max-temp", value_name = "K")]
    pub max_temp: Option<f64>,

    /// Page to display (1-based)
    #[arg(
        short = 'p',
        long = "page",
        value_name = "N",
        default_value_t = 1,
        help = "Page of results to display"
    )]
    pub page: usize,

    /// Records per page
    #[arg(
        long = "page-size",
        value_name = "N",
        default_value_t = DEFAULT_PAGE_SIZE,
        help = "Number of records per page (10, 25, 50, or 100)"
    )]
    pub page_size: usize,

    /// Output format for query results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the classify command
#[derive(Debug, Clone, Parser)]
pub struct ClassifyArgs {
    /// Light-curve CSV files to classify
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Base URL of the classification service
    #[arg(
        long = "endpoint",
        value_name = "URL",
        help = "Base URL of the classification service"
    )]
    pub endpoint: Option<String>,

    /// Output format for classification results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// One `TAG=LOCATION` source override
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOverride {
    pub tag: SourceTag,
    pub location: String,
}

impl FromStr for SourceOverride {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (tag, location) = s.split_once('=').ok_or_else(|| {
            Error::configuration(format!(
                "Invalid source override '{}': expected TAG=LOCATION",
                s
            ))
        })?;

        let location = location.trim();
        if location.is_empty() {
            return Err(Error::configuration(format!(
                "Source override '{}' has an empty location",
                s
            )));
        }

        Ok(SourceOverride {
            tag: SourceTag::from_str(tag)?,
            location: location.to_string(),
        })
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl LoadArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl QueryArgs {
    /// Validate the query command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        self.parse_source_filter()?;

        if self.page == 0 {
            return Err(Error::configuration(
                "Page numbers start at 1".to_string(),
            ));
        }

        if !PAGE_SIZE_CHOICES.contains(&self.page_size) {
            return Err(Error::configuration(format!(
                "Page size must be one of: {}",
                PAGE_SIZE_CHOICES
                    .iter()
                    .map(|size| size.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            )));
        }

        for (name, min, max) in [
            ("radius", self.min_radius, self.max_radius),
            ("period", self.min_period, self.max_period),
            ("temp", self.min_temp, self.max_temp),
        ] {
            if let (Some(min), Some(max)) = (min, max) {
                if min > max {
                    return Err(Error::configuration(format!(
                        "min-{} must not exceed max-{}",
                        name, name
                    )));
                }
            }
        }

        Ok(())
    }

    /// Parse the source filter, where "all" means no restriction
    pub fn parse_source_filter(&self) -> Result<Option<SourceTag>> {
        if self.source.trim().eq_ignore_ascii_case("all") {
            Ok(None)
        } else {
            SourceTag::from_str(&self.source).map(Some)
        }
    }

    /// Build filter criteria from the range arguments
    pub fn to_criteria(&self) -> Result<FilterCriteria> {
        Ok(FilterCriteria {
            source: self.parse_source_filter()?,
            radius: RangeFilter::new(self.min_radius, self.max_radius),
            period: RangeFilter::new(self.min_period, self.max_period),
            temperature: RangeFilter::new(self.min_temp, self.max_temp),
        })
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.output_format == OutputFormat::Human
    }
}

impl ClassifyArgs {
    /// Validate the classify command arguments
    pub fn validate(&self) -> Result<()> {
        for file in &self.files {
            if !file.exists() {
                return Err(Error::configuration(format!(
                    "Light-curve file does not exist: {}",
                    file.display()
                )));
            }
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, false)
    }
}

fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_args() -> QueryArgs {
        QueryArgs {
            locations: Vec::new(),
            source: "all".to_string(),
            min_radius: None,
            max_radius: None,
            min_period: None,
            max_period: None,
            min_temp: None,
            max_temp: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn test_source_override_parsing() {
        let parsed = SourceOverride::from_str("kepler=data/kepler.csv").unwrap();
        assert_eq!(parsed.tag, SourceTag::Kepler);
        assert_eq!(parsed.location, "data/kepler.csv");

        // URLs keep their internal '=' characters
        let url = SourceOverride::from_str("tess=https://example.org/t.csv?q=1").unwrap();
        assert_eq!(url.location, "https://example.org/t.csv?q=1");

        assert!(SourceOverride::from_str("no-separator").is_err());
        assert!(SourceOverride::from_str("hubble=x.csv").is_err());
        assert!(SourceOverride::from_str("k2=  ").is_err());
    }

    #[test]
    fn test_source_filter_parsing() {
        let mut args = query_args();
        assert_eq!(args.parse_source_filter().unwrap(), None);

        args.source = "Kepler".to_string();
        assert_eq!(
            args.parse_source_filter().unwrap(),
            Some(SourceTag::Kepler)
        );

        args.source = "jwst".to_string();
        assert!(args.parse_source_filter().is_err());
    }

    #[test]
    fn test_query_validation() {
        assert!(query_args().validate().is_ok());

        let mut bad_page = query_args();
        bad_page.page = 0;
        assert!(bad_page.validate().is_err());

        let mut bad_size = query_args();
        bad_size.page_size = 0;
        assert!(bad_size.validate().is_err());

        let mut inverted = query_args();
        inverted.min_period = Some(10.0);
        inverted.max_period = Some(1.0);
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn test_criteria_construction() {
        let mut args = query_args();
        args.source = "tess".to_string();
        args.min_radius = Some(1.0);
        args.max_temp = Some(400.0);

        let criteria = args.to_criteria().unwrap();
        assert_eq!(criteria.source, Some(SourceTag::Tess));
        assert_eq!(criteria.radius.min, Some(1.0));
        assert_eq!(criteria.radius.max, None);
        assert_eq!(criteria.temperature.max, Some(400.0));
        assert!(criteria.period.is_open());
    }

    #[test]
    fn test_log_level() {
        let mut args = query_args();
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");
        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");
        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }
}
