use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): extraction completed; directive warnings may have been
///   printed but are advisory and never change the status
/// - `Error` (2): the run failed (unreadable input, invalid schema JSON,
///   output not writable)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
