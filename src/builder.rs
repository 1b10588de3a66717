//! The [`Builder`]: build configuration plus the operations that assemble
//! and run tool command lines.
use std::fmt;

use crate::error::Result;
use crate::platform::OsFamily;

mod files;
mod invoke;
pub mod printf;

pub use invoke::Shell;

/// Holds the configuration of one build session.
///
/// Every field except the last executed command can be changed between
/// operations. Changes apply to the next command assembled.
#[derive(Debug, Clone)]
pub struct Builder {
    /// Print commands without running them. On by default.
    pub dry_run: bool,
    /// Echo every command as `[DRYRUN] ...` or `[INVOKE] ...`.
    pub print_command_to_stdout: bool,
    pub cc_command: String,
    /// Passed as `-std=<value>` to the C compiler when not empty.
    pub c_language_standard: String,
    pub cxx_command: String,
    /// Passed as `-std=<value>` to the C++ compiler when not empty.
    pub cxx_language_standard: String,
    pub ar_command: String,
    pub ld_command: String,
    pub move_command: String,
    pub copy_command: String,
    pub remove_command: String,
    /// Interpreter live commands are handed to.
    pub shell: Shell,
    last_exec_command: String,
    os: OsFamily,
}

impl Builder {
    /// Creates a builder with the defaults of the host OS family.
    ///
    /// Fails with [`BuildError::UnknownOs`](crate::error::BuildError::UnknownOs)
    /// on a host that is not classified.
    pub fn new() -> Result<Self> {
        Ok(Self::for_os(OsFamily::detect()?))
    }

    /// Creates a builder with the defaults of the given OS family.
    pub fn for_os(os: OsFamily) -> Self {
        let (move_command, copy_command, remove_command) = match os {
            OsFamily::Windows => ("move", "copy", "del"),
            OsFamily::MacOs | OsFamily::Linux | OsFamily::Unix => ("mv", "cp", "rm -f"),
        };
        Builder {
            dry_run: true,
            print_command_to_stdout: true,
            cc_command: "gcc".to_string(),
            c_language_standard: String::new(),
            cxx_command: "g++".to_string(),
            cxx_language_standard: String::new(),
            ar_command: "ar".to_string(),
            ld_command: "ld".to_string(),
            move_command: move_command.to_string(),
            copy_command: copy_command.to_string(),
            remove_command: remove_command.to_string(),
            shell: Shell::for_os(os),
            last_exec_command: String::new(),
            os,
        }
    }

    /// The OS family the defaults were picked for.
    pub fn os(&self) -> OsFamily {
        self.os
    }

    /// The most recently assembled command line, whether or not it ran.
    pub fn last_exec_command(&self) -> &str {
        &self.last_exec_command
    }

    /// Records `cmd_expr` as the last command, echoes it, and runs it unless
    /// this is a dry run.
    ///
    /// A nonzero exit code from the command is not an error; only failing to
    /// start the shell is.
    pub fn exec_raw(&mut self, cmd_expr: impl Into<String>) -> Result<()> {
        self.last_exec_command = cmd_expr.into();
        if self.print_command_to_stdout {
            println!(
                "{}",
                invoke::echo_line(self.dry_run, &self.last_exec_command)
            );
        }
        if !self.dry_run {
            invoke::run(&self.shell, &self.last_exec_command)?;
        }
        Ok(())
    }

    fn exec_command(&mut self, base: &str, params: impl fmt::Display) -> Result<()> {
        let full_cmd = assemble_command(base, &params.to_string());
        self.exec_raw(full_cmd)
    }

    /// The C compiler command, including the language standard when set.
    pub fn cc_base(&self) -> String {
        with_standard(&self.cc_command, &self.c_language_standard)
    }

    /// The C++ compiler command, including the language standard when set.
    pub fn cxx_base(&self) -> String {
        with_standard(&self.cxx_command, &self.cxx_language_standard)
    }

    /// Runs the C compiler with `params` appended.
    ///
    /// ```
    /// use builder_script::{cc, Builder};
    ///
    /// let mut b = Builder::new().unwrap();
    /// b.print_command_to_stdout = false;
    /// cc!(b, "-c {}", "foo.c").unwrap();
    /// assert_eq!(b.last_exec_command(), "gcc -c foo.c");
    /// ```
    pub fn cc(&mut self, params: impl fmt::Display) -> Result<()> {
        let base = self.cc_base();
        self.exec_command(&base, params)
    }

    /// Runs the C++ compiler with `params` appended.
    pub fn cxx(&mut self, params: impl fmt::Display) -> Result<()> {
        let base = self.cxx_base();
        self.exec_command(&base, params)
    }

    /// Runs the archiver with `params` appended.
    pub fn ar(&mut self, params: impl fmt::Display) -> Result<()> {
        let base = self.ar_command.clone();
        self.exec_command(&base, params)
    }

    /// Runs the linker with `params` appended.
    pub fn ld(&mut self, params: impl fmt::Display) -> Result<()> {
        let base = self.ld_command.clone();
        self.exec_command(&base, params)
    }

    /// Runs `params` as the whole command.
    pub fn exec(&mut self, params: impl fmt::Display) -> Result<()> {
        self.exec_command("", params)
    }
}

/// Joins a base command and its parameters with one space.
/// An empty base leaves the parameters as the full command.
pub fn assemble_command(base: &str, params: &str) -> String {
    if base.is_empty() {
        params.to_string()
    } else {
        format!("{} {}", base, params)
    }
}

fn with_standard(command: &str, standard: &str) -> String {
    if standard.is_empty() {
        command.to_string()
    } else {
        format!("{} -std={}", command, standard)
    }
}
