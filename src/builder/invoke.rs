//! Hands assembled command lines to the host shell.
use std::io;
use std::process::{Command, ExitStatus};

use crate::error::{BuildError, Result};
use crate::platform::OsFamily;
use crate::utils::log::{log, LogLevel};

/// Interpreter program and the flag that makes it run one command string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    pub program: String,
    pub flag: String,
}

impl Shell {
    pub fn for_os(os: OsFamily) -> Self {
        let (program, flag) = if os.is_posix() { ("sh", "-c") } else { ("cmd", "/C") };
        Shell {
            program: program.to_string(),
            flag: flag.to_string(),
        }
    }
}

/// Line printed for a command, tagged by whether it is actually run.
pub(crate) fn echo_line(dry_run: bool, cmd: &str) -> String {
    let marker = if dry_run { "[DRYRUN]" } else { "[INVOKE]" };
    format!("{} {}", marker, cmd)
}

/// Runs `cmd` through `shell` and blocks until it finishes.
///
/// Only failures to start the shell are errors. The exit status of the
/// command itself is returned for logging and never inspected here.
pub(crate) fn run(shell: &Shell, cmd: &str) -> Result<ExitStatus> {
    let mut command = Command::new(&shell.program);
    command.arg(&shell.flag);
    #[cfg(windows)]
    {
        // cmd.exe does its own parsing, the command must reach it untouched
        use std::os::windows::process::CommandExt;
        command.raw_arg(cmd);
    }
    #[cfg(not(windows))]
    command.arg(cmd);

    let status = command.status().map_err(|source| classify(shell, cmd, source))?;
    log(LogLevel::Debug, &format!("  Exit status: {}", status));
    Ok(status)
}

fn classify(shell: &Shell, cmd: &str, source: io::Error) -> BuildError {
    match source.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => BuildError::ShellInvocation {
            shell: shell.program.clone(),
            source,
        },
        _ => BuildError::Invocation {
            command: cmd.to_string(),
            source,
        },
    }
}
