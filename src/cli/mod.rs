use anyhow::Result;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use report::{print_diagnostics, print_diagnostics_to};

mod args;
mod exit_status;
mod report;
mod run;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    run::run(args)
}
