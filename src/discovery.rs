//! Recursive discovery of `.strings` files.

use std::path::Path;

use anyhow::{Result, bail};
use walkdir::WalkDir;

use crate::reporter;

/// Extension of localization resource files.
pub const STRINGS_EXTENSION: &str = ".strings";

/// Collect every `.strings` file under `root`, in directory-traversal
/// order. No locale filtering happens here.
///
/// An unreadable or missing root is fatal for the run; individual
/// entries that cannot be accessed inside the tree are logged and
/// skipped.
pub fn find_localization_files(root: &Path) -> Result<Vec<String>> {
    if !root.is_dir() {
        bail!("root directory not readable: {}", root.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                reporter::warn(&format!("Cannot access path: {}", err));
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path().to_string_lossy();
        if path.ends_with(STRINGS_EXTENSION) {
            files.push(path.into_owned());
        }
    }
    Ok(files)
}
