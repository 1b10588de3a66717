use std::path::Path;

use serde::{Deserialize, Serialize};

use super::log::{log, LogLevel};
use crate::builder::Builder;
use crate::error::{BuildError, Result};

//Toml utils
/// Settings read from a `builder_script.toml` file.
///
/// Every key is optional; only the keys present override the builder.
/// ```toml
/// [run]
/// dry_run = false
///
/// [tools]
/// cc = "clang"
/// c_standard = "c17"
///
/// [files]
/// remove = "rm -rf"
///
/// [project]
/// library = "engine"
/// sources = ["engine.c", "render.c"]
/// tests = ["test_engine.c"]
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScriptConfig {
    pub run: RunConfig,
    pub tools: ToolsConfig,
    pub files: FilesConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectConfig>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub dry_run: Option<bool>,
    pub print_commands: Option<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    pub cc: Option<String>,
    pub cxx: Option<String>,
    pub ar: Option<String>,
    pub ld: Option<String>,
    pub c_standard: Option<String>,
    pub cxx_standard: Option<String>,
    pub shell: Option<String>,
    pub shell_flag: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilesConfig {
    #[serde(rename = "move")]
    pub move_command: Option<String>,
    #[serde(rename = "copy")]
    pub copy_command: Option<String>,
    #[serde(rename = "remove")]
    pub remove_command: Option<String>,
}

/// What the example driver builds: one static library plus test and
/// example programs linked against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    pub library: String,
    pub sources: Vec<String>,
    pub tests: Vec<String>,
    pub examples: Vec<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        ProjectConfig {
            library: "build".to_string(),
            sources: Vec::new(),
            tests: Vec::new(),
            examples: Vec::new(),
        }
    }
}

fn set_if(target: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}

impl ScriptConfig {
    /// Parses the contents of a config file. `path` is only used in errors.
    pub fn parse(contents: &str, path: &Path) -> Result<Self> {
        toml::from_str(contents).map_err(|e| BuildError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// This function is used to parse the config file of a build script
    /// # Arguments
    /// * `path` - The path to the config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| BuildError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::parse(&contents, path)?;
        log(
            LogLevel::Info,
            &format!("Loaded config: {}", path.display()),
        );
        Ok(config)
    }

    /// Overrides the builder fields named in this config.
    pub fn apply(&self, builder: &mut Builder) {
        if let Some(dry_run) = self.run.dry_run {
            builder.dry_run = dry_run;
        }
        if let Some(print) = self.run.print_commands {
            builder.print_command_to_stdout = print;
        }
        set_if(&mut builder.cc_command, &self.tools.cc);
        set_if(&mut builder.cxx_command, &self.tools.cxx);
        set_if(&mut builder.ar_command, &self.tools.ar);
        set_if(&mut builder.ld_command, &self.tools.ld);
        set_if(&mut builder.c_language_standard, &self.tools.c_standard);
        set_if(&mut builder.cxx_language_standard, &self.tools.cxx_standard);
        set_if(&mut builder.shell.program, &self.tools.shell);
        set_if(&mut builder.shell.flag, &self.tools.shell_flag);
        set_if(&mut builder.move_command, &self.files.move_command);
        set_if(&mut builder.copy_command, &self.files.copy_command);
        set_if(&mut builder.remove_command, &self.files.remove_command);
    }

    /// Sets one key by its dotted name, e.g. `tools.cc` or `run.dry_run`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = |message: String| BuildError::ConfigKey {
            key: key.to_string(),
            message,
        };
        let text = Some(value.to_string());
        match key {
            "run.dry_run" | "run.print_commands" => {
                let flag = value
                    .parse::<bool>()
                    .map_err(|_| invalid(format!("expected true or false, got {:?}", value)))?;
                if key == "run.dry_run" {
                    self.run.dry_run = Some(flag);
                } else {
                    self.run.print_commands = Some(flag);
                }
            }
            "tools.cc" => self.tools.cc = text,
            "tools.cxx" => self.tools.cxx = text,
            "tools.ar" => self.tools.ar = text,
            "tools.ld" => self.tools.ld = text,
            "tools.c_standard" => self.tools.c_standard = text,
            "tools.cxx_standard" => self.tools.cxx_standard = text,
            "tools.shell" => self.tools.shell = text,
            "tools.shell_flag" => self.tools.shell_flag = text,
            "files.move" => self.files.move_command = text,
            "files.copy" => self.files.copy_command = text,
            "files.remove" => self.files.remove_command = text,
            _ => return Err(invalid("unknown config key".to_string())),
        }
        Ok(())
    }

    /// Renders this config for writing to `path`.
    pub fn to_toml(&self, path: &Path) -> Result<String> {
        toml::to_string(self).map_err(|e| BuildError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::OsFamily;

    #[test]
    fn applies_only_present_keys() {
        let config = ScriptConfig::parse(
            r#"
            [run]
            dry_run = false

            [tools]
            cc = "clang"
            c_standard = "c17"

            [files]
            remove = "rm -rf"
            "#,
            Path::new("builder_script.toml"),
        )
        .unwrap();

        let mut b = Builder::for_os(OsFamily::Linux);
        config.apply(&mut b);
        assert!(!b.dry_run);
        assert!(b.print_command_to_stdout);
        assert_eq!(b.cc_command, "clang");
        assert_eq!(b.c_language_standard, "c17");
        assert_eq!(b.cxx_command, "g++");
        assert_eq!(b.remove_command, "rm -rf");
        assert_eq!(b.move_command, "mv");
        assert!(config.project.is_none());
    }

    #[test]
    fn project_defaults() {
        let config = ScriptConfig::parse(
            "[project]\nsources = [\"a.c\"]\n",
            Path::new("builder_script.toml"),
        )
        .unwrap();
        let project = config.project.unwrap();
        assert_eq!(project.library, "build");
        assert_eq!(project.sources, vec!["a.c".to_string()]);
        assert!(project.tests.is_empty());
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = ScriptConfig::parse("[tools]\ncompiler = \"gcc\"\n", Path::new("bad.toml"))
            .unwrap_err();
        assert!(matches!(err, BuildError::Config { ref path, .. } if path == Path::new("bad.toml")));
    }

    #[test]
    fn set_and_serialize() {
        let mut config = ScriptConfig::default();
        config.set("tools.cxx", "clang++").unwrap();
        config.set("run.print_commands", "false").unwrap();
        assert!(config.set("run.dry_run", "maybe").is_err());
        assert!(matches!(
            config.set("tools.compiler", "gcc"),
            Err(BuildError::ConfigKey { key, .. }) if key == "tools.compiler"
        ));

        let text = config.to_toml(Path::new("roundtrip.toml")).unwrap();
        let back = ScriptConfig::parse(&text, Path::new("roundtrip.toml")).unwrap();
        assert_eq!(back, config);
    }
}
