//! Tests for sanitization and row extraction

use crate::app::services::catalog_parser::{parse, strip_comments};

use super::{create_catalog_with_bad_line, create_commented_catalog};

#[test]
fn test_comment_block_then_header_then_rows() {
    // Five comment lines, a header, and two data lines parse to two rows
    let cleaned = strip_comments(&create_commented_catalog());
    let result = parse(&cleaned);

    assert_eq!(result.rows.len(), 2);
    assert_eq!(result.stats.rows_parsed, 2);
    assert_eq!(result.stats.lines_skipped, 0);
    assert_eq!(result.rows[0].get("kepler_name"), Some("Kepler-227 b"));
    assert_eq!(result.rows[1].get("koi_period"), Some("54.4183827"));
}

#[test]
fn test_rows_preserve_source_order() {
    let result = parse("name\nfirst\nsecond\nthird");
    let names: Vec<_> = result.rows.iter().map(|r| r.get("name").unwrap()).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn test_parse_is_pure() {
    let text = strip_comments(&create_commented_catalog());
    let first = parse(&text);
    let second = parse(&text);
    assert_eq!(first.rows, second.rows);
    assert_eq!(first.stats, second.stats);
}

#[test]
fn test_arity_mismatch_becomes_warning() {
    let result = parse(&create_catalog_with_bad_line());

    // The short line is excluded with a warning; parsing continues
    assert_eq!(result.rows.len(), 2);
    assert_eq!(result.rows[0].get("name"), Some("alpha"));
    assert_eq!(result.rows[1].get("name"), Some("beta"));
    assert_eq!(result.stats.lines_skipped, 1);
    assert_eq!(result.stats.warnings.len(), 1);
    assert!(result.stats.warnings[0].contains("line 3"));
}

#[test]
fn test_blank_lines_are_skipped() {
    let result = parse("name,period\nalpha,1.0\n\n\nbeta,2.0\n");
    assert_eq!(result.rows.len(), 2);
    assert_eq!(result.stats.lines_skipped, 0);
}

#[test]
fn test_empty_cells_are_kept_as_empty_strings() {
    let result = parse("a,b,c\n1,,3\n");
    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.rows[0].get("b"), Some(""));
    assert_eq!(result.rows[0].get_non_empty("b"), None);
}

#[test]
fn test_empty_and_header_only_input() {
    assert!(parse("").rows.is_empty());

    let header_only = parse("kepid,koi_period");
    assert!(header_only.rows.is_empty());
    assert_eq!(header_only.stats.total_lines, 0);
}
