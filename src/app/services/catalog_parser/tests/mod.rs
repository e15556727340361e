//! Test utilities for catalog parser testing
//!
//! Shared fixture text used across the parser test modules.

mod parser_tests;
mod stats_tests;

/// A small Kepler-style export with a leading comment block
pub fn create_commented_catalog() -> String {
    r#"# This file was produced by the NASA Exoplanet Archive
# http://exoplanetarchive.ipac.caltech.edu
# Thu Sep 25 10:12:33 2025
# COLUMN kepid: KepID
# COLUMN koi_period: Orbital Period [days]
kepid,kepoi_name,kepler_name,koi_disposition,koi_period,koi_prad,koi_teq
10797460,K00752.01,Kepler-227 b,CONFIRMED,9.48803557,2.26,793
10797460,K00752.02,Kepler-227 c,CONFIRMED,54.4183827,2.83,443"#
        .to_string()
}

/// Catalog text with one line that does not match the header arity
pub fn create_catalog_with_bad_line() -> String {
    "name,period\nalpha,1.0\ntruncated-line\nbeta,3.0".to_string()
}
