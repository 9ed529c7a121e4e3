//! The scan pipeline: discover, parse, diff, remediate, render.

use std::fs;

use anyhow::{Context, Result};

use super::args::Arguments;
use crate::model::{AggregateReport, LanguageReport, LocalizationEntry};
use crate::{diff, discovery, locale, parser, remediate, report, reporter};

/// How a scan ended, short of an internal error.
pub enum RunOutcome {
    /// The full pipeline ran; the aggregate report holds the findings.
    Completed(AggregateReport),
    /// No `en.lproj/Localizable.strings` anywhere under the root.
    ReferenceNotFound,
}

/// Run one full scan.
///
/// Only two conditions are fatal and surface as `Err`: an unreadable
/// root directory and an unreadable reference file. Everything else is
/// logged and skipped so one bad file never hides findings in the rest
/// of the tree.
pub fn run(args: &Arguments) -> Result<RunOutcome> {
    reporter::step("Searching for the reference localization file...");
    let files = discovery::find_localization_files(&args.root)?;

    // When several reference files exist the last one discovered wins.
    let Some(reference_path) = files
        .iter()
        .rev()
        .find(|file| file.ends_with(locale::REFERENCE_SUFFIX))
        .cloned()
    else {
        reporter::detail("Reference localization file not found.");
        return Ok(RunOutcome::ReferenceNotFound);
    };
    reporter::detail(&format!(
        "Reference localization file found:\n\t {}",
        reference_path
    ));

    reporter::step("Parsing all keys in the reference localization file...");
    let reference_content = fs::read_to_string(&reference_path)
        .with_context(|| format!("Failed to read reference file: {}", reference_path))?;
    let reference = parser::parse_content(&reference_path, &reference_content, args.verbose);
    reporter::detail("Done");

    reporter::step("Searching for missing keys in non-reference localization files...");
    let mut aggregate = AggregateReport::default();
    for file in &files {
        if *file == reference_path {
            continue;
        }
        let Some(language_report) = audit_file(file, &reference, args) else {
            continue;
        };
        aggregate.language_reports.push(language_report);
    }

    report::write_report(&aggregate, args.format);
    reporter::summary(aggregate.missing_entries_count());

    Ok(RunOutcome::Completed(aggregate))
}

/// Diff one non-reference file against the reference set.
///
/// Returns `None` for files the diff pass does not apply to: the Base
/// bucket and files whose locale cannot be derived from the path.
fn audit_file(
    file: &str,
    reference: &[LocalizationEntry],
    args: &Arguments,
) -> Option<LanguageReport> {
    let Some(code) = locale::locale_code(file) else {
        reporter::warn(&format!("Cannot determine locale of {}", file));
        return None;
    };
    if code == locale::BASE_LOCALE {
        return None;
    }
    let language_name = locale::display_name(code);

    // An unreadable target is skipped entirely; treating it as empty
    // would flag every reference key as missing.
    let content = match fs::read_to_string(file) {
        Ok(content) => content,
        Err(err) => {
            reporter::warn(&format!("Cannot read {}: {}", file, err));
            return None;
        }
    };
    let entries = parser::parse_content(file, &content, args.verbose);
    let missing = diff::missing_keys(reference, &entries, code);

    for key in &missing {
        reporter::missing_key(key, &language_name, file);
    }
    if args.append && !missing.is_empty() {
        remediate::append_missing(file, &missing, reference);
    }

    Some(LanguageReport {
        language_name,
        source_path: file.to_string(),
        missing_keys: missing,
    })
}
