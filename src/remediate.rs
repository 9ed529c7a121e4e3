//! Placeholder appending for missing entries.
//!
//! Remediation reproduces the exact `"key" = "value";` line format so a
//! re-parse of the touched file picks the new entries up unchanged. The
//! reference value serves as the placeholder until a translation lands.

use std::fs::{self, OpenOptions};
use std::io::Write;

use crate::model::LocalizationEntry;
use crate::reporter;

/// Append placeholder entries for `missing` keys to the target file.
///
/// Values are taken from the reference entries. Failures are per-key and
/// non-fatal: they are logged and the remaining keys are still attempted.
/// Returns the number of entries actually written.
pub fn append_missing(
    target_path: &str,
    missing: &[String],
    reference: &[LocalizationEntry],
) -> usize {
    // Appending to a file whose last line has no newline would glue the
    // first placeholder onto it.
    let needs_leading_newline = fs::read_to_string(target_path)
        .map(|content| !content.is_empty() && !content.ends_with('\n'))
        .unwrap_or(false);

    let mut file = match OpenOptions::new().append(true).open(target_path) {
        Ok(file) => file,
        Err(err) => {
            reporter::warn(&format!("Cannot open {} for append: {}", target_path, err));
            return 0;
        }
    };

    if needs_leading_newline && writeln!(file).is_err() {
        reporter::warn(&format!("Cannot write to {}", target_path));
        return 0;
    }

    let mut appended = 0;
    for key in missing {
        // Duplicate singular/other markers aside, reference keys are unique;
        // the first match carries the value to copy over.
        let Some(entry) = reference.iter().find(|entry| entry.key == *key) else {
            continue;
        };
        match writeln!(file, "{}", format_entry_line(&entry.key, &entry.value)) {
            Ok(()) => {
                reporter::appended_key(key, target_path);
                appended += 1;
            }
            Err(err) => {
                reporter::warn(&format!(
                    "Failed to append {} to {}: {}",
                    key, target_path, err
                ));
            }
        }
    }
    appended
}

/// One `.strings` assignment line, without the trailing newline.
pub fn format_entry_line(key: &str, value: &str) -> String {
    format!("\"{}\" = \"{}\";", key, value)
}
