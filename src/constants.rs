//! Application constants for the catalog unifier
//!
//! This module contains column name mappings, disposition values,
//! and default settings used throughout the application.

// =============================================================================
// Source Catalogs
// =============================================================================

/// Supported source catalog names (CLI spelling)
pub const SOURCE_NAMES: &[&str] = &["kepler", "k2", "tess"];

/// Default source locations, in merge order
///
/// Each entry pairs a source name with the archive export shipped alongside
/// the binary. Any entry can be overridden with a URL or path on the CLI.
pub const DEFAULT_SOURCE_LOCATIONS: &[(&str, &str)] = &[
    ("kepler", "data/kepler.csv"),
    ("k2", "data/k2.csv"),
    ("tess", "data/tess.csv"),
];

/// Comment marker used by NASA Exoplanet Archive exports
pub const COMMENT_MARKER: char = '#';

// =============================================================================
// Column Name Constants
// =============================================================================

/// Column names as they appear in each source catalog
pub mod columns {
    // Kepler Objects of Interest columns
    pub const KOI_PERIOD: &str = "koi_period";
    pub const KOI_PRAD: &str = "koi_prad";
    pub const KOI_TEQ: &str = "koi_teq";
    pub const KOI_DISPOSITION: &str = "koi_disposition";
    pub const KEPLER_NAME: &str = "kepler_name";
    pub const KEPOI_NAME: &str = "kepoi_name";
    pub const KEPID: &str = "kepid";

    // Planetary Systems columns shared by the K2 and TESS exports
    pub const PL_ORBPER: &str = "pl_orbper";
    pub const PL_RADE: &str = "pl_rade";
    pub const PL_EQT: &str = "pl_eqt";
    pub const PL_NAME: &str = "pl_name";
    pub const HOSTNAME: &str = "hostname";

    // Disposition columns
    pub const DISPOSITION: &str = "disposition";
    pub const K2_DISPOSITION: &str = "k2_disposition";
    pub const TFOPWG_DISP: &str = "tfopwg_disp";

    // TESS identifier columns
    pub const TOI: &str = "toi";
    pub const TID: &str = "tid";
}

/// Fallback object names when a source row carries no usable identifier
pub mod fallback_names {
    /// Prefix for names synthesized from the Kepler catalog id
    pub const KEPID_PREFIX: &str = "KepID-";

    /// Synthesized Kepler name when even the catalog id is missing
    pub const KEPLER_UNKNOWN: &str = "KepID-unknown";

    /// Placeholder for unnamed K2 objects
    pub const K2_OBJECT: &str = "K2-Object";

    /// Placeholder for unnamed TESS objects
    pub const TESS_OBJECT: &str = "TESS-Object";

    /// Prefix applied to TESS Object of Interest ids
    pub const TOI_PREFIX: &str = "TOI-";

    /// Prefix applied to TESS Input Catalog ids
    pub const TIC_PREFIX: &str = "TIC-";
}

// =============================================================================
// Pagination Defaults
// =============================================================================

/// Default number of records shown per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page sizes offered by the interactive consumers
pub const PAGE_SIZE_CHOICES: &[usize] = &[10, 25, 50, 100];

// =============================================================================
// Classification Service
// =============================================================================

/// Default base URL of the light-curve classification service
pub const DEFAULT_PREDICT_ENDPOINT: &str = "http://localhost:8000";

/// Single-item prediction route
pub const PREDICT_ROUTE: &str = "/api/predict/lightcurve";

/// Batch prediction route
pub const PREDICT_BATCH_ROUTE: &str = "/api/predict/lightcurve/batch";

// =============================================================================
// Helper Functions
// =============================================================================

/// Check whether a raw catalog line is an archive comment
pub fn is_comment_line(line: &str) -> bool {
    line.trim_start().starts_with(COMMENT_MARKER)
}
