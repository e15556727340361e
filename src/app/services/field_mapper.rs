//! Per-source field mapping onto the canonical schema
//!
//! Each survey publishes the same physical quantities under different
//! column names and resolves object names through a different identifier
//! chain. One mapper per [`SourceTag`] captures those conventions; the
//! closed dispatch table in [`mapper_for`] is the only place a new survey
//! has to be registered.

use crate::app::models::{RawRow, SourceTag};
use crate::constants::{columns, fallback_names};

/// Canonical fields extracted from one raw row
///
/// Numeric fields stay as raw strings at this layer; the standardizer owns
/// parsing and validation.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedFields {
    /// Resolved display name, never empty
    pub name: String,

    /// Raw orbital period cell, if present and non-empty
    pub period: Option<String>,

    /// Raw planetary radius cell, if present and non-empty
    pub radius: Option<String>,

    /// Raw equilibrium temperature cell, if present and non-empty
    pub temperature: Option<String>,

    /// Raw disposition cell before normalization
    pub raw_disposition: Option<String>,
}

/// Field-mapping capability implemented once per survey
pub trait FieldMap: Send + Sync {
    /// The survey this mapper understands
    fn source(&self) -> SourceTag;

    /// Extract canonical fields from a raw row
    fn map(&self, row: &RawRow) -> MappedFields;
}

/// Look up the mapper for a source tag
///
/// Adding a survey is one new mapper plus one arm here; no conditional
/// chains elsewhere branch on the tag.
pub fn mapper_for(tag: SourceTag) -> &'static dyn FieldMap {
    match tag {
        SourceTag::Kepler => &KeplerMapper,
        SourceTag::K2 => &K2Mapper,
        SourceTag::Tess => &TessMapper,
    }
}

fn owned(row: &RawRow, column: &str) -> Option<String> {
    row.get_non_empty(column).map(str::to_string)
}

/// Mapper for the Kepler Objects of Interest cumulative table
struct KeplerMapper;

impl FieldMap for KeplerMapper {
    fn source(&self) -> SourceTag {
        SourceTag::Kepler
    }

    fn map(&self, row: &RawRow) -> MappedFields {
        // Prefer the confirmed planet name, then the KOI designation,
        // then synthesize from the catalog id
        let name = row
            .get_non_empty(columns::KEPLER_NAME)
            .or_else(|| row.get_non_empty(columns::KEPOI_NAME))
            .map(str::to_string)
            .unwrap_or_else(|| match row.get_non_empty(columns::KEPID) {
                Some(kepid) => format!("{}{}", fallback_names::KEPID_PREFIX, kepid),
                None => fallback_names::KEPLER_UNKNOWN.to_string(),
            });

        MappedFields {
            name,
            period: owned(row, columns::KOI_PERIOD),
            radius: owned(row, columns::KOI_PRAD),
            temperature: owned(row, columns::KOI_TEQ),
            raw_disposition: owned(row, columns::KOI_DISPOSITION),
        }
    }
}

/// Mapper for the K2 Planets and Candidates table
struct K2Mapper;

impl FieldMap for K2Mapper {
    fn source(&self) -> SourceTag {
        SourceTag::K2
    }

    fn map(&self, row: &RawRow) -> MappedFields {
        // Planet names already carry their EPIC prefix; fall back to the
        // host star, then the literal placeholder
        let name = row
            .get_non_empty(columns::PL_NAME)
            .or_else(|| row.get_non_empty(columns::HOSTNAME))
            .unwrap_or(fallback_names::K2_OBJECT)
            .to_string();

        MappedFields {
            name,
            period: owned(row, columns::PL_ORBPER),
            radius: owned(row, columns::PL_RADE),
            temperature: owned(row, columns::PL_EQT),
            raw_disposition: owned(row, columns::DISPOSITION)
                .or_else(|| owned(row, columns::K2_DISPOSITION)),
        }
    }
}

/// Mapper for the TESS Objects of Interest table
struct TessMapper;

impl FieldMap for TessMapper {
    fn source(&self) -> SourceTag {
        SourceTag::Tess
    }

    fn map(&self, row: &RawRow) -> MappedFields {
        // TOI id first, then TIC id (both prefixed), then planet name,
        // host star, and finally the literal placeholder
        let name = row
            .get_non_empty(columns::TOI)
            .map(|toi| format!("{}{}", fallback_names::TOI_PREFIX, toi))
            .or_else(|| {
                row.get_non_empty(columns::TID)
                    .map(|tid| format!("{}{}", fallback_names::TIC_PREFIX, tid))
            })
            .or_else(|| row.get_non_empty(columns::PL_NAME).map(str::to_string))
            .or_else(|| row.get_non_empty(columns::HOSTNAME).map(str::to_string))
            .unwrap_or_else(|| fallback_names::TESS_OBJECT.to_string());

        MappedFields {
            name,
            period: owned(row, columns::PL_ORBPER),
            radius: owned(row, columns::PL_RADE),
            temperature: owned(row, columns::PL_EQT),
            raw_disposition: owned(row, columns::TFOPWG_DISP)
                .or_else(|| owned(row, columns::DISPOSITION)),
        }
    }
}
