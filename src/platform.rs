//! Host facts and small host helpers.
//!
//! The OS family is resolved from the target the crate was compiled for,
//! so exactly one of [`is_windows`], [`is_macos`], [`is_linux`] and
//! [`is_unix`] is true on any recognised host.
use std::env;
use std::path::Path;

use crate::error::{BuildError, Result};

/// Host platform classification used to pick default commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsFamily {
    Windows,
    MacOs,
    Linux,
    Unix,
}

impl OsFamily {
    /// Classifies the host this crate was compiled for.
    pub fn detect() -> Result<Self> {
        Self::from_target_os(env::consts::OS)
    }

    /// Classifies a `target_os` name, as found in `std::env::consts::OS`.
    pub fn from_target_os(os: &str) -> Result<Self> {
        match os {
            "windows" => Ok(OsFamily::Windows),
            "macos" | "ios" => Ok(OsFamily::MacOs),
            "linux" | "android" => Ok(OsFamily::Linux),
            "freebsd" | "dragonfly" | "openbsd" | "netbsd" | "solaris" | "illumos" | "aix"
            | "haiku" => Ok(OsFamily::Unix),
            other => Err(BuildError::UnknownOs {
                os: other.to_string(),
            }),
        }
    }

    pub fn is_posix(self) -> bool {
        self != OsFamily::Windows
    }

    /// Name of the preprocessor macro conventionally defined for this family.
    pub fn macro_name(self) -> &'static str {
        match self {
            OsFamily::Windows => "WINDOWS",
            OsFamily::MacOs => "MACOS",
            OsFamily::Linux => "LINUX",
            OsFamily::Unix => "UNIX",
        }
    }
}

pub fn is_windows() -> bool {
    matches!(OsFamily::detect(), Ok(OsFamily::Windows))
}

pub fn is_macos() -> bool {
    matches!(OsFamily::detect(), Ok(OsFamily::MacOs))
}

pub fn is_linux() -> bool {
    matches!(OsFamily::detect(), Ok(OsFamily::Linux))
}

pub fn is_unix() -> bool {
    matches!(OsFamily::detect(), Ok(OsFamily::Unix))
}

/// Prepares the console for the given code page.
///
/// Only `utf-8` is known. Rust already writes UTF-8 to the console, so the
/// only work left is turning on ANSI escape handling for Windows consoles so
/// colored log tags render.
pub fn set_console_code_page(name: &str) -> Result<()> {
    OsFamily::detect()?;
    match name.to_ascii_lowercase().as_str() {
        "utf-8" | "utf8" => {
            #[cfg(windows)]
            let _ = colored::control::set_virtual_terminal(true);
            Ok(())
        }
        _ => Err(BuildError::UnknownConsoleCodePage(name.to_string())),
    }
}

fn is_separator(c: char) -> bool {
    c == '/' || (cfg!(windows) && c == '\\')
}

/// Returns the directory part of `path` the way POSIX `dirname` does.
///
/// `"foo"` gives `"."`, `"a/b/"` gives `"a"` and `"/"` stays `"/"`.
/// An empty path has no directory to resolve.
pub fn dir_name(path: &str) -> Result<String> {
    if path.is_empty() {
        return Err(BuildError::DirName(path.to_string()));
    }
    let trimmed = path.trim_end_matches(is_separator);
    if trimmed.is_empty() {
        // only separators
        return Ok(path[..1].to_string());
    }
    match trimmed.rfind(is_separator) {
        None => Ok(".".to_string()),
        Some(idx) => {
            let parent = trimmed[..idx].trim_end_matches(is_separator);
            if parent.is_empty() {
                Ok(trimmed[..1].to_string())
            } else {
                Ok(parent.to_string())
            }
        }
    }
}

pub fn ch_dir(dir_path: impl AsRef<Path>) -> Result<()> {
    let dir_path = dir_path.as_ref();
    env::set_current_dir(dir_path).map_err(|source| BuildError::ChangeDir {
        path: dir_path.to_path_buf(),
        source,
    })
}

/// Changes into the directory holding the running program, taken from the
/// first element of `args` (usually `std::env::args()`).
pub fn ch_dir_to_program_dir<S: AsRef<str>>(args: &[S]) -> Result<()> {
    let exe_path = args.first().ok_or(BuildError::MissingExecutablePath)?;
    let exe_dir = dir_name(exe_path.as_ref())?;
    ch_dir(exe_dir)
}

pub fn current_working_dir() -> Result<String> {
    let cwd = env::current_dir().map_err(BuildError::CurrentWorkingDir)?;
    Ok(cwd.to_string_lossy().into_owned())
}

/// Appends the host's executable suffix, `.exe` on Windows and nothing elsewhere.
pub fn executable_file_name(exe_name: &str) -> String {
    if is_windows() {
        format!("{}.exe", exe_name)
    } else {
        exe_name.to_string()
    }
}
