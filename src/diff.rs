//! Missing-key computation against the reference entry set.

use std::collections::HashSet;

use crate::model::LocalizationEntry;
use crate::plural;

/// Keys from the reference set that a target file must but does not carry.
///
/// Membership is exact string equality on the key. Results preserve
/// reference-entry order (the reference file's line order), not sorted.
///
/// For locales that collapse plurals, a missing singular-form key is
/// suppressed when the target carries the matching `other` form.
pub fn missing_keys(
    reference: &[LocalizationEntry],
    target: &[LocalizationEntry],
    locale_code: &str,
) -> Vec<String> {
    let target_keys: HashSet<&str> = target.iter().map(|entry| entry.key.as_str()).collect();
    let exempt_singular_forms = plural::collapses_plurals(locale_code);

    let mut missing = Vec::new();
    for entry in reference {
        if target_keys.contains(entry.key.as_str()) {
            continue;
        }
        if exempt_singular_forms
            && let Some(other) = plural::other_form(&entry.key)
            && target_keys.contains(other.as_str())
        {
            continue;
        }
        missing.push(entry.key.clone());
    }
    missing
}
