/// Contains the config file parser
pub mod configs;
/// Contains the logger
pub mod log;

pub use configs::{ProjectConfig, ScriptConfig};
pub use log::{log, LogLevel};
