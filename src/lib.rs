//! Stringlint - missing-key auditor for Apple `.strings` localization files
//!
//! Stringlint scans a project tree for `<locale>.lproj/Localizable.strings`
//! files, takes the English file as the source of truth, and reports every
//! reference key that is missing from the other locales. It can optionally
//! append placeholder entries for missing keys and writes a standalone
//! report artifact (HTML or JSON) next to the console output.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, run loop, exit codes)
//! - `discovery`: Recursive `.strings` file discovery
//! - `locale`: Locale code extraction from `.lproj` paths and display names
//! - `parser`: Line-based `.strings` entry parser
//! - `diff`: Missing-key computation against the reference entry set
//! - `plural`: Pluralization-suffix suppression for plural-collapsing locales
//! - `remediate`: Placeholder appending for missing entries
//! - `report`: Report artifact rendering (HTML/JSON)
//! - `reporter`: Console output formatting
//! - `model`: Shared data types

pub mod cli;
pub mod diff;
pub mod discovery;
pub mod locale;
pub mod model;
pub mod parser;
pub mod plural;
pub mod remediate;
pub mod report;
pub mod reporter;
