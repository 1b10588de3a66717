//! Error types shared by the builder, the host helpers and the flat binding.
use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by the builder and the host helpers.
///
/// Every variant maps onto exactly one [`StatusCode`], see
/// [`BuildError::status`].
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("unknown OS: {os}")]
    UnknownOs { os: String },

    #[error("unknown console code page: {0}")]
    UnknownConsoleCodePage(String),

    #[error("object required")]
    ObjectRequired,

    #[error("invocation error: {command}")]
    Invocation {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("shell invocation error: could not run `{shell}`")]
    ShellInvocation {
        shell: String,
        #[source]
        source: io::Error,
    },

    #[error("unable to stat file: {}", path.display())]
    StatFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to get directory of {0:?}")]
    DirName(String),

    #[error("unable to change directory to {}", path.display())]
    ChangeDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to get current working directory")]
    CurrentWorkingDir(#[source] io::Error),

    #[error("missing executable file path")]
    MissingExecutablePath,

    #[error("invalid format string {format:?}: {reason}")]
    Format { format: String, reason: String },

    #[error("could not load config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("invalid config key {key}: {message}")]
    ConfigKey { key: String, message: String },
}

pub type Result<T> = std::result::Result<T, BuildError>;

impl BuildError {
    /// Classifies this failure into the closed status enumeration.
    pub fn status(&self) -> StatusCode {
        StatusCode::from(self)
    }
}

/// Closed enumeration of outcomes reported by the flat binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    Ok,
    OutOfMemory,
    Unknown,
    UnknownOs,
    UnknownConsoleCodePage,
    ObjectRequired,
    InvocationError,
    ShellInvocationError,
    StatFailed,
    DirectoryNameResolutionFailed,
    ChangeDirectoryFailed,
    CurrentWorkingDirectoryFailed,
    MissingExecutablePath,
}

impl StatusCode {
    pub const ALL: [StatusCode; 13] = [
        StatusCode::Ok,
        StatusCode::OutOfMemory,
        StatusCode::Unknown,
        StatusCode::UnknownOs,
        StatusCode::UnknownConsoleCodePage,
        StatusCode::ObjectRequired,
        StatusCode::InvocationError,
        StatusCode::ShellInvocationError,
        StatusCode::StatFailed,
        StatusCode::DirectoryNameResolutionFailed,
        StatusCode::ChangeDirectoryFailed,
        StatusCode::CurrentWorkingDirectoryFailed,
        StatusCode::MissingExecutablePath,
    ];

    /// Short human readable message for a status code.
    pub fn message(self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::OutOfMemory => "unable to allocate memory",
            StatusCode::Unknown => "unknown error",
            StatusCode::UnknownOs => "unknown OS",
            StatusCode::UnknownConsoleCodePage => "unknown console code page",
            StatusCode::ObjectRequired => "object required",
            StatusCode::InvocationError => "invoke failed",
            StatusCode::ShellInvocationError => "shell invoke failed",
            StatusCode::StatFailed => "stat failed",
            StatusCode::DirectoryNameResolutionFailed => "dirname failed",
            StatusCode::ChangeDirectoryFailed => "change directory failed",
            StatusCode::CurrentWorkingDirectoryFailed => "get current working directory failed",
            StatusCode::MissingExecutablePath => "missing executable path",
        }
    }

    /// Integer form used by status-returning callers: 0 on success, -1 otherwise.
    pub fn as_return_code(self) -> i32 {
        if self == StatusCode::Ok {
            0
        } else {
            -1
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl From<&BuildError> for StatusCode {
    fn from(err: &BuildError) -> Self {
        match err {
            BuildError::UnknownOs { .. } => StatusCode::UnknownOs,
            BuildError::UnknownConsoleCodePage(_) => StatusCode::UnknownConsoleCodePage,
            BuildError::ObjectRequired => StatusCode::ObjectRequired,
            BuildError::Invocation { .. } => StatusCode::InvocationError,
            BuildError::ShellInvocation { .. } => StatusCode::ShellInvocationError,
            BuildError::StatFailed { .. } => StatusCode::StatFailed,
            BuildError::DirName(_) => StatusCode::DirectoryNameResolutionFailed,
            BuildError::ChangeDir { .. } => StatusCode::ChangeDirectoryFailed,
            BuildError::CurrentWorkingDir(_) => StatusCode::CurrentWorkingDirectoryFailed,
            BuildError::MissingExecutablePath => StatusCode::MissingExecutablePath,
            BuildError::Format { .. } | BuildError::Config { .. } | BuildError::ConfigKey { .. } => {
                StatusCode::Unknown
            }
        }
    }
}

impl From<BuildError> for StatusCode {
    fn from(err: BuildError) -> Self {
        StatusCode::from(&err)
    }
}
