use super::exit_status::ExitStatus;
use super::run::RunOutcome;

pub fn exit_status_from_outcome(outcome: &RunOutcome) -> ExitStatus {
    match outcome {
        RunOutcome::Completed(report) if report.missing_entries_count() == 0 => {
            ExitStatus::Success
        }
        RunOutcome::Completed(_) | RunOutcome::ReferenceNotFound => ExitStatus::Failure,
    }
}
