//! Console output formatting.
//!
//! Separate from the scan logic so the library can be used without
//! printing side effects.

use colored::Colorize;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a progress step, e.g. "Searching for localization files...".
pub fn step(message: &str) {
    println!("{}", message);
}

/// Print an indented detail line under the current step.
pub fn detail(message: &str) {
    println!("\t{}", message);
}

/// Print a non-fatal diagnostic to stderr.
pub fn warn(message: &str) {
    eprintln!("{} {}", "warning:".bold().yellow(), message);
}

/// Print one missing-key finding.
pub fn missing_key(key: &str, language: &str, file: &str) {
    println!(
        "\tMissing {} for {} in {}",
        key.bold().red(),
        language,
        file
    );
}

/// Print the confirmation for one appended placeholder entry.
pub fn appended_key(key: &str, file: &str) {
    println!("\tAppended {} to {}", key.bold().green(), file);
}

/// Print the end-of-run summary line.
pub fn summary(missing_entries: usize) {
    if missing_entries == 0 {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            "Finished, no missing localization entries.".green()
        );
    } else {
        println!(
            "{} Finished, missing {} {}",
            FAILURE_MARK.red(),
            missing_entries.to_string().bold().red(),
            if missing_entries == 1 {
                "entry"
            } else {
                "entries"
            }
        );
    }
}
