use crate::error::{BuildError, Result};
use crate::utils::configs::ScriptConfig;
use crate::utils::log::{log, LogLevel};

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Per-user defaults applied before the project's own config file.
pub struct GlobalConfig {
    path: PathBuf,
}

impl GlobalConfig {
    /// The defaults file in the platform config directory, when one can be determined.
    pub fn locate() -> Option<Self> {
        let dirs = ProjectDirs::from("", "", "builder_script")?;
        Some(GlobalConfig {
            path: dirs.config_dir().join("config.toml"),
        })
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        GlobalConfig { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the defaults file. A missing file is not an error.
    pub fn load(&self) -> Result<Option<ScriptConfig>> {
        if !self.path.is_file() {
            log(
                LogLevel::Debug,
                &format!("No global config at {}", self.path.display()),
            );
            return Ok(None);
        }
        ScriptConfig::from_file(&self.path).map(Some)
    }

    /// Stores one default, creating the file if needed.
    pub fn set_default(&self, parameter: &str, value: &str) -> Result<()> {
        let mut config = self.load()?.unwrap_or_default();
        config.set(parameter, value)?;
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| self.config_error(e))?;
        }
        std::fs::write(&self.path, config.to_toml(&self.path)?).map_err(|e| self.config_error(e))?;
        log(
            LogLevel::Log,
            &format!("Set {} = {} in {}", parameter, value, self.path.display()),
        );
        Ok(())
    }

    fn config_error(&self, e: std::io::Error) -> BuildError {
        BuildError::Config {
            path: self.path.clone(),
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let global = GlobalConfig::at(dir.path().join("config.toml"));
        assert_eq!(global.path(), dir.path().join("config.toml"));
        assert!(global.load().unwrap().is_none());
    }

    #[test]
    fn set_default_persists() {
        let dir = tempfile::tempdir().unwrap();
        let global = GlobalConfig::at(dir.path().join("nested").join("config.toml"));
        global.set_default("tools.cc", "clang").unwrap();
        global.set_default("files.remove", "rm -rf").unwrap();

        let config = global.load().unwrap().unwrap();
        assert_eq!(config.tools.cc.as_deref(), Some("clang"));
        assert_eq!(config.files.remove_command.as_deref(), Some("rm -rf"));
        assert!(global.set_default("nope", "x").is_err());
    }
}
