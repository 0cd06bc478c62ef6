use std::process::ExitCode;

/// Exit status of a run.
///
/// - `Success` (0): catalogs written, or all up to date in `--check` mode
/// - `Failure` (1): `--check` found out-of-date catalogs
/// - `Error` (2): configuration or I/O failure
/// - `Usage` (64): the scanned directory does not exist (`EX_USAGE`)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
    Usage,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
            ExitStatus::Usage => ExitCode::from(64),
        }
    }
}
