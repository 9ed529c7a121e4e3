use std::process::ExitCode;

/// Exit status for the CLI, following common conventions for linter tools.
///
/// - `Success` (0): Scan completed, no missing entries
/// - `Failure` (1): Missing entries found, or the reference file was not found
/// - `Error` (2): The run failed due to an internal error (unreadable root, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Scan completed, no missing entries.
    Success,
    /// Missing entries found, or no reference localization file.
    Failure,
    /// The run failed due to an internal error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
