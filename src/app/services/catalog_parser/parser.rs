//! Header analysis and row extraction for sanitized catalog text
//!
//! The first line of the sanitized text names the columns; every following
//! non-empty line is split as CSV and zipped with the header into a
//! [`RawRow`]. The function is pure: the same text always yields the same
//! row sequence.

use tracing::debug;

use super::stats::{ParseResult, ParseStats};
use crate::app::models::RawRow;

/// Parse sanitized catalog text into header-keyed rows
///
/// Malformed lines, in particular lines whose field count does not match
/// the header arity, are recorded as warnings and excluded rather than
/// aborting the parse. Blank lines are skipped. Text without a header
/// yields no rows.
pub fn parse(text: &str) -> ParseResult {
    let mut stats = ParseStats::new();
    let mut rows = Vec::new();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let header: Vec<String> = match reader.headers() {
        Ok(header) => header.iter().map(|name| name.trim().to_string()).collect(),
        Err(e) => {
            stats
                .warnings
                .push(format!("header line unreadable: {}", e));
            return ParseResult { rows, stats };
        }
    };

    if header.is_empty() || (header.len() == 1 && header[0].is_empty()) {
        return ParseResult { rows, stats };
    }

    for (index, result) in reader.records().enumerate() {
        stats.total_lines += 1;

        match result {
            Ok(record) => {
                rows.push(RawRow::from_header_and_values(
                    header.iter().map(String::as_str),
                    record.iter(),
                ));
                stats.rows_parsed += 1;
            }
            Err(e) => {
                stats.lines_skipped += 1;
                // Header line is line 1, so data line N is N + 1
                stats.warnings.push(format!("line {}: {}", index + 2, e));
                debug!("Skipped malformed catalog line {}: {}", index + 2, e);
            }
        }
    }

    ParseResult { rows, stats }
}
