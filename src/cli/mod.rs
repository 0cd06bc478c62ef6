use anyhow::Result;

pub mod args;
mod exit_status;
pub mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;

use crate::core::PathNotFound;

/// Run the CLI.
///
/// A missing scan root is reported here and becomes [`ExitStatus::Usage`];
/// every other failure is returned to the caller.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    match run::run(args) {
        Ok(status) => Ok(status),
        Err(err) => match err.downcast_ref::<PathNotFound>() {
            Some(PathNotFound(path)) => {
                report::print_missing_path(path);
                Ok(ExitStatus::Usage)
            }
            None => Err(err),
        },
    }
}
