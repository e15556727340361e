//! Tests for parsing statistics

use crate::app::services::catalog_parser::ParseStats;

#[test]
fn test_success_rate_calculation() {
    let stats = ParseStats {
        total_lines: 10,
        rows_parsed: 9,
        lines_skipped: 1,
        warnings: vec!["line 4: bad".to_string()],
    };
    assert!((stats.success_rate() - 90.0).abs() < f64::EPSILON);
    assert!(!stats.is_successful());
}

#[test]
fn test_empty_stats_count_as_successful() {
    let stats = ParseStats::new();
    assert_eq!(stats.success_rate(), 100.0);
    assert!(stats.is_successful());
}

#[test]
fn test_serde_round_trip() {
    let stats = ParseStats {
        total_lines: 3,
        rows_parsed: 3,
        lines_skipped: 0,
        warnings: Vec::new(),
    };
    let json = serde_json::to_string(&stats).unwrap();
    let back: ParseStats = serde_json::from_str(&json).unwrap();
    assert_eq!(stats, back);
}
