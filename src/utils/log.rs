use colored::Colorize;

/// Environment variable holding the minimum level that gets printed.
pub const LOG_LEVEL_VAR: &str = "BUILDER_SCRIPT_LOG_LEVEL";

//Log utils
#[derive(PartialEq, PartialOrd, Debug, Clone, Copy)]
/// This enum is used to represent the different log levels
pub enum LogLevel {
    Debug,
    Info,
    Log,
    Warn,
    Error,
}

impl LogLevel {
    /// Parses a level name as accepted in `BUILDER_SCRIPT_LOG_LEVEL`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Debug" => Some(LogLevel::Debug),
            "Info" => Some(LogLevel::Info),
            "Log" => Some(LogLevel::Log),
            "Warn" => Some(LogLevel::Warn),
            "Error" => Some(LogLevel::Error),
            _ => None,
        }
    }

    /// The threshold configured through the environment, `Log` when unset or invalid.
    pub fn threshold() -> Self {
        std::env::var(LOG_LEVEL_VAR)
            .ok()
            .and_then(|val| LogLevel::from_name(&val))
            .unwrap_or(LogLevel::Log)
    }

    fn tag(self) -> colored::ColoredString {
        match self {
            LogLevel::Debug => "[DEBUG]".purple(),
            LogLevel::Info => "[INFO]".blue(),
            LogLevel::Log => "[LOG]".green(),
            LogLevel::Warn => "[WARN]".yellow(),
            LogLevel::Error => "[ERROR]".red(),
        }
    }
}

/// This function is used to log messages to the console
/// # Arguments
/// * `level` - The log level of the message
/// * `message` - The message to log
/// # Example
/// ```
/// use builder_script::utils::{log, LogLevel};
/// log(LogLevel::Info, "Hello World!");
/// log(LogLevel::Error, &format!("Something went wrong! {}", 42));
/// ```
///
/// # Level setting
/// The log level can be set by setting the environment variable `BUILDER_SCRIPT_LOG_LEVEL`
/// to one of the following values:
/// * `Debug`
/// * `Info`
/// * `Log`
/// * `Warn`
/// * `Error`
/// If the environment variable is not set, the default log level is `Log`
pub fn log(level: LogLevel, message: &str) {
    if level >= LogLevel::threshold() {
        println!("{} {}", level.tag(), message);
    }
}
