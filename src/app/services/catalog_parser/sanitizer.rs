//! Comment stripping for archive catalog text
//!
//! Archive exports intersperse `#`-prefixed comment lines with the header
//! and data. The sanitizer removes them so the parser only ever sees the
//! header line followed by data lines.

use crate::constants::is_comment_line;

/// Remove every comment line from a raw catalog blob
///
/// A line is a comment when its first non-whitespace character is the
/// archive comment marker. Remaining lines keep their original order.
/// Empty input yields empty output; there are no error conditions.
pub fn strip_comments(text: &str) -> String {
    text.lines()
        .filter(|line| !is_comment_line(line))
        .collect::<Vec<_>>()
        .join("\n")
}
