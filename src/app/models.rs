//! Data models for the unified exoplanet catalog
//!
//! This module contains the core data structures for representing source
//! catalogs and canonical records, following the unified schema shared by
//! all three archive exports.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Source Tags
// =============================================================================

/// Origin tag identifying which survey a record was drawn from
///
/// The set is closed: adding a survey means adding a variant here and a
/// field mapper in `field_mapper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceTag {
    /// Kepler Objects of Interest cumulative table
    Kepler,
    /// K2 Planets and Candidates table
    K2,
    /// TESS Objects of Interest table
    Tess,
}

impl SourceTag {
    /// All source tags in merge order
    pub fn all() -> [SourceTag; 3] {
        [SourceTag::Kepler, SourceTag::K2, SourceTag::Tess]
    }

    /// Lowercase name used in configuration and CLI arguments
    pub fn name(self) -> &'static str {
        match self {
            SourceTag::Kepler => "kepler",
            SourceTag::K2 => "k2",
            SourceTag::Tess => "tess",
        }
    }
}

impl FromStr for SourceTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "kepler" => Ok(SourceTag::Kepler),
            "k2" => Ok(SourceTag::K2),
            "tess" => Ok(SourceTag::Tess),
            other => Err(Error::configuration(format!(
                "Unknown source '{}'. Available sources: {}",
                other,
                crate::constants::SOURCE_NAMES.join(", ")
            ))),
        }
    }
}

impl fmt::Display for SourceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SourceTag::Kepler => "Kepler",
            SourceTag::K2 => "K2",
            SourceTag::Tess => "TESS",
        };
        write!(f, "{}", label)
    }
}

// =============================================================================
// Disposition
// =============================================================================

/// Three-valued classification outcome assigned to every record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disposition {
    /// Object confirmed as a planet
    Confirmed,
    /// Object awaiting confirmation (also the fallback for unknown values)
    Candidate,
    /// Object ruled out as a planet
    FalsePositive,
}

impl Disposition {
    /// Normalize a raw archive disposition string
    ///
    /// Total function: every input, including a missing value, maps to
    /// exactly one variant. Matching is case-insensitive and accepts the
    /// abbreviated forms used by some archive exports.
    pub fn normalize(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Disposition::Candidate;
        };
        match raw.trim().to_uppercase().as_str() {
            "CONFIRMED" | "C" => Disposition::Confirmed,
            "FALSE POSITIVE" | "FP" => Disposition::FalsePositive,
            _ => Disposition::Candidate,
        }
    }

    /// All disposition values
    pub fn all_values() -> [Disposition; 3] {
        [
            Disposition::Confirmed,
            Disposition::Candidate,
            Disposition::FalsePositive,
        ]
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Disposition::Confirmed => "CONFIRMED",
            Disposition::Candidate => "CANDIDATE",
            Disposition::FalsePositive => "FALSE POSITIVE",
        };
        write!(f, "{}", label)
    }
}

// =============================================================================
// Raw Rows
// =============================================================================

/// One raw catalog row, preserved verbatim
///
/// Field order follows the source header. Lookups return the first value
/// for a name, which also resolves duplicate headers the way the archive
/// exports expect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    fields: Vec<(String, String)>,
}

impl RawRow {
    /// Create an empty row
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Build a row by zipping header names with record values
    ///
    /// Cells beyond the header arity are dropped; a short record simply
    /// leaves the trailing columns absent.
    pub fn from_header_and_values<'a, I, J>(header: I, values: J) -> Self
    where
        I: IntoIterator<Item = &'a str>,
        J: IntoIterator<Item = &'a str>,
    {
        let fields = header
            .into_iter()
            .zip(values)
            .map(|(name, value)| (name.trim().to_string(), value.to_string()))
            .collect();
        Self { fields }
    }

    /// Append a field (test and fixture construction)
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// Get the raw value for a field name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    /// Get a trimmed, non-empty value for a field name
    pub fn get_non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).map(str::trim).filter(|s| !s.is_empty())
    }

    /// Number of fields in the row
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the row has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over (name, value) pairs in header order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

// =============================================================================
// Canonical Records
// =============================================================================

/// The unified representation of one astronomical object
///
/// Every persisted record carries finite values for all three numeric
/// fields; rows that cannot satisfy this are dropped before they reach the
/// catalog, never stored with placeholders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalRecord {
    /// Sequential identity assigned in merge order (1..N); 0 until assigned
    pub id: u32,

    /// Display name resolved by the source-specific priority chain
    pub name: String,

    /// Originating survey
    pub source: SourceTag,

    /// Planetary radius in Earth radii
    pub radius: f64,

    /// Orbital period in days
    pub period: f64,

    /// Equilibrium temperature in Kelvin
    pub temperature: f64,

    /// Normalized classification outcome
    pub disposition: Disposition,

    /// The original source row, retained verbatim for inspection
    #[serde(skip)]
    pub raw: RawRow,
}

impl CanonicalRecord {
    /// Create a new record with validation
    ///
    /// The id starts at 0 and is assigned by the loader during the merge.
    pub fn new(
        name: String,
        source: SourceTag,
        radius: f64,
        period: f64,
        temperature: f64,
        disposition: Disposition,
        raw: RawRow,
    ) -> Result<Self> {
        let record = Self {
            id: 0,
            name,
            source,
            radius,
            period,
            temperature,
            disposition,
            raw,
        };

        record.validate()?;
        Ok(record)
    }

    /// Validate record invariants
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::data_validation(
                "Record name cannot be empty".to_string(),
            ));
        }

        for (field, value) in [
            ("radius", self.radius),
            ("period", self.period),
            ("temperature", self.temperature),
        ] {
            if !value.is_finite() {
                return Err(Error::data_validation(format!(
                    "Record '{}' has non-finite {}: {}",
                    self.name, field, value
                )));
            }
        }

        Ok(())
    }
}

// =============================================================================
// Source Descriptors
// =============================================================================

/// Static description of one configured source catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDescriptor {
    /// Origin tag stamped on every record from this source
    pub tag: SourceTag,

    /// Where the catalog text lives: an http(s) URL or a filesystem path
    pub location: String,
}

impl SourceDescriptor {
    /// Create a new source descriptor
    pub fn new(tag: SourceTag, location: impl Into<String>) -> Self {
        Self {
            tag,
            location: location.into(),
        }
    }
}
