//! Pluralization-suffix suppression.
//!
//! Keys that carry a plural-form marker come in pairs, e.g.
//! `items##{one}` / `items##{other}`. Locales whose grammar does not
//! distinguish singular from plural only translate the `other` form, so a
//! missing `one` form is not a finding there as long as the `other` form
//! is present.

/// Marker carried by the singular-form variant of a pluralized key.
pub const SINGULAR_MARKER: &str = "##{one}";

/// Marker carried by the language-neutral "other" variant.
pub const OTHER_MARKER: &str = "##{other}";

/// Locales that collapse singular and plural into one form.
///
/// Kept as a flat list so new locales are a one-line change that never
/// touches the diff logic.
const PLURAL_COLLAPSING_LOCALES: &[&str] = &[
    "zh-Hans", "zh-Hant", "zh-HK", "ja", "ko", "th", "vi", "id", "ms",
];

/// Whether a locale's grammar collapses singular and plural forms.
pub fn collapses_plurals(locale_code: &str) -> bool {
    PLURAL_COLLAPSING_LOCALES.contains(&locale_code)
}

/// The `other`-form counterpart of a singular-form key, if the key
/// carries the singular marker at all.
pub fn other_form(key: &str) -> Option<String> {
    if key.contains(SINGULAR_MARKER) {
        Some(key.replace(SINGULAR_MARKER, OTHER_MARKER))
    } else {
        None
    }
}
