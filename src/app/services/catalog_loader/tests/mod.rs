//! Test fixtures for catalog loader testing
//!
//! Builds a temporary directory holding one export per source, with
//! archive comments and a few rows that fail numeric validation.


use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::app::models::{SourceDescriptor, SourceTag};

/// Kepler export: comments, three valid rows, one with a blank radius
pub const KEPLER_FIXTURE: &str = "\
# This file was produced by the NASA Exoplanet Archive
# Kepler Objects of Interest (cumulative)
kepid,kepoi_name,kepler_name,koi_disposition,koi_period,koi_prad,koi_teq
10797460,K00752.01,Kepler-227 b,CONFIRMED,9.48803557,2.26,793
10797460,K00752.02,Kepler-227 c,CONFIRMED,54.4183827,2.83,443
10811496,K00753.01,,CANDIDATE,19.899140,2.75,638
10848459,K00754.01,,FALSE POSITIVE,1.736952,,1395
";

/// K2 export: one valid row, one row with a non-numeric temperature
pub const K2_FIXTURE: &str = "\
# K2 Planets and Candidates
pl_name,hostname,disposition,pl_orbper,pl_rade,pl_eqt
K2-18 b,K2-18,CONFIRMED,32.939623,2.610,284
,EPIC 201367065,CANDIDATE,10.054490,1.450,none
";

/// TESS export: two valid rows
pub const TESS_FIXTURE: &str = "\
# TESS Objects of Interest
toi,tid,pl_name,hostname,tfopwg_disp,pl_orbper,pl_rade,pl_eqt
700.01,150428135,,TOI-700,CP,37.425,1.073,268
101.01,231663901,,TOI-101,FP,1.430370,13.26,1690
";

/// Write the three fixture exports and return descriptors in merge order
pub fn create_fixture_sources(dir: &TempDir) -> Vec<SourceDescriptor> {
    write_fixture(dir.path(), "kepler.csv", KEPLER_FIXTURE);
    write_fixture(dir.path(), "k2.csv", K2_FIXTURE);
    write_fixture(dir.path(), "tess.csv", TESS_FIXTURE);

    vec![
        descriptor_for(dir, SourceTag::Kepler, "kepler.csv"),
        descriptor_for(dir, SourceTag::K2, "k2.csv"),
        descriptor_for(dir, SourceTag::Tess, "tess.csv"),
    ]
}

/// Descriptor pointing at a file inside the fixture directory
pub fn descriptor_for(dir: &TempDir, tag: SourceTag, filename: &str) -> SourceDescriptor {
    SourceDescriptor::new(tag, dir.path().join(filename).to_string_lossy().to_string())
}

fn write_fixture(dir: &Path, filename: &str, content: &str) {
    fs::write(dir.join(filename), content).unwrap();
}
