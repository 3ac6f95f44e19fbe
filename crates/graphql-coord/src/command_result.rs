use std::process::ExitCode;

#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    /// Output for a command that failed outright.
    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }

    /// Output for a command that reports on several inputs, some of which may
    /// have failed. Exits non-zero if any did.
    pub fn report(stdout: String, any_failed: bool) -> Self {
        Self {
            exit_code: if any_failed { ExitCode::FAILURE } else { ExitCode::SUCCESS },
            stderr: None,
            stdout: Some(stdout),
        }
    }
}
