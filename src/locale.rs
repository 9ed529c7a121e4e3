//! Locale code extraction and display-name lookup.
//!
//! Localization files live in directories named `<code>.lproj`, e.g.
//! `fr-CA.lproj/Localizable.strings`. The code is derived purely from the
//! path; the file content is never consulted.

use std::collections::HashMap;
use std::sync::LazyLock;

/// File name every `.lproj` container is expected to hold.
pub const RESOURCE_FILE_NAME: &str = "Localizable.strings";

/// Path suffix identifying the reference (English) localization file.
pub const REFERENCE_SUFFIX: &str = "en.lproj/Localizable.strings";

/// The unlocalized "Base" bucket. Base files are development-language
/// placeholders, so the diff pass skips them.
pub const BASE_LOCALE: &str = "Base";

const CONTAINER_SUFFIX: &str = ".lproj/Localizable.strings";

static CODE_TO_LANGUAGE: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("en", "English"),
        ("en-GB", "English (British)"),
        ("en-AU", "English (Australian)"),
        ("en-CA", "English (Canadian)"),
        ("en-IN", "English (Indian)"),
        ("fr", "French"),
        ("fr-CA", "French (Canadian)"),
        ("es", "Spanish"),
        ("es-MX", "Spanish (Mexico)"),
        ("pt", "Portuguese"),
        ("pt-BR", "Portuguese (Brazil)"),
        ("it", "Italian"),
        ("de", "German"),
        ("zh-Hans", "Chinese (Simplified)"),
        ("zh-Hant", "Chinese (Traditional)"),
        ("zh-HK", "Chinese (Hong Kong)"),
        ("nl", "Dutch"),
        ("ja", "Japanese"),
        ("ko", "Korean"),
        ("vi", "Vietnamese"),
        ("ru", "Russian"),
        ("sv", "Swedish"),
        ("da", "Danish"),
        ("fi", "Finnish"),
        ("nb", "Norwegian (Bokmal)"),
        ("tr", "Turkish"),
        ("el", "Greek"),
        ("id", "Indonesian"),
        ("ms", "Malay"),
        ("th", "Thai"),
        ("hi", "Hindi"),
        ("hu", "Hungarian"),
        ("pl", "Polish"),
        ("cs", "Czech"),
        ("sk", "Slovak"),
        ("uk", "Ukrainian"),
        ("hr", "Croatian"),
        ("ca", "Catalan"),
        ("ro", "Romanian"),
        ("he", "Hebrew"),
        ("ar", "Arabic"),
    ])
});

/// Extract the raw locale code from a localization file path.
///
/// Strips the trailing `.lproj/Localizable.strings` and takes the path
/// segment after the last remaining separator. Returns `None` when the
/// path does not end with the expected container suffix or has no
/// separator left in front of the code (malformed path).
pub fn locale_code(path: &str) -> Option<&str> {
    let stem = path.strip_suffix(CONTAINER_SUFFIX)?;
    let separator = stem.rfind('/')?;
    Some(&stem[separator + 1..])
}

/// Human-readable language name for a locale code.
///
/// Unknown codes fall back to the raw code itself so that new or exotic
/// locales degrade gracefully instead of failing the run.
pub fn display_name(code: &str) -> String {
    CODE_TO_LANGUAGE
        .get(code)
        .map_or_else(|| code.to_string(), |name| (*name).to_string())
}
