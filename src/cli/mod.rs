use anyhow::Result;

pub use args::Arguments;
pub use exit_status::ExitStatus;

mod args;
mod exit_code;
mod exit_status;
mod run;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let outcome = run::run(&args)?;
    Ok(exit_code::exit_status_from_outcome(&outcome))
}
