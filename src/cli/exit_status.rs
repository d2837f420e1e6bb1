use std::process::ExitCode;

/// Process exit status of `glotcs`.
///
/// Scripts and CI jobs tell "found issues" apart from "could not check":
/// a missing source root, a missing or keyless localization file and an
/// invalid config all end in [`ExitStatus::Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// No issues found (or `init` succeeded).
    Success,
    /// At least one issue was reported.
    Failure,
    /// The command could not run to completion.
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
