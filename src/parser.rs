//! Line-based parser for `.strings` files.
//!
//! The format is one entry per line: `"<key>" = "<value>";`. Comment and
//! blank lines are skipped. Keys may contain escaped quotes (`\"`), so the
//! key terminator is found with an escape-aware scan rather than a naive
//! first-quote search.

use std::fs;

use crate::model::LocalizationEntry;
use crate::reporter;

/// Byte width of `" = "` between the key's closing quote and the first
/// character of the value: the separator plus the value's opening quote.
const SEPARATOR_WIDTH: usize = 5;

/// Parse a `.strings` file into its ordered entry sequence.
///
/// An unreadable file yields an empty sequence with a diagnostic; the
/// caller decides whether that is fatal (reference file) or not.
pub fn parse_file(path: &str, verbose: bool) -> Vec<LocalizationEntry> {
    match fs::read_to_string(path) {
        Ok(content) => parse_content(path, &content, verbose),
        Err(err) => {
            reporter::warn(&format!("Cannot read {}: {}", path, err));
            Vec::new()
        }
    }
}

/// Parse raw file content into its ordered entry sequence.
///
/// Malformed assignment lines are skipped with a diagnostic; they never
/// abort the rest of the file.
pub fn parse_content(path: &str, content: &str, verbose: bool) -> Vec<LocalizationEntry> {
    let mut entries = Vec::new();

    for (index, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();

        // Comments, blank lines and block delimiters never start with a quote.
        let Some(rest) = line.strip_prefix('"') else {
            continue;
        };

        let Some(key_end) = find_key_terminator(rest) else {
            skipped_line(path, index + 1, "unterminated key", verbose);
            continue;
        };
        let key = &rest[..key_end];

        let value_start = key_end + SEPARATOR_WIDTH;
        let Some(value) = rest
            .rfind('"')
            .filter(|closing| *closing >= value_start)
            .and_then(|closing| rest.get(value_start..closing))
        else {
            skipped_line(path, index + 1, "no value", verbose);
            continue;
        };

        entries.push(LocalizationEntry::new(
            path,
            key.to_string(),
            value.to_string(),
        ));
    }

    entries
}

/// Find the byte index of the quote that terminates the key.
///
/// A quote immediately preceded by a backslash is part of the key, so the
/// scan tracks the previous character instead of matching the first quote.
fn find_key_terminator(rest: &str) -> Option<usize> {
    let mut previous: Option<char> = None;
    for (index, c) in rest.char_indices() {
        if c == '"' && previous != Some('\\') {
            return Some(index);
        }
        previous = Some(c);
    }
    None
}

fn skipped_line(path: &str, line_number: usize, reason: &str, verbose: bool) {
    if verbose {
        reporter::warn(&format!(
            "Skipping malformed line {}:{} ({})",
            path, line_number, reason
        ));
    }
}
