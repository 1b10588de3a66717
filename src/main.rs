use builder_script::error::{BuildError, Result};
use builder_script::global_config::GlobalConfig;
use builder_script::utils::{log, LogLevel, ScriptConfig};
use builder_script::{bin_flags, platform, Builder};
use clap::Parser;
use std::path::{Path, PathBuf};

const LOCAL_CONFIG: &str = "builder_script.toml";

/// Example build driver: runs build commands through the shell, dry-run by default
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Change to this directory before doing anything else
    #[arg(short = 'C', long, value_name = "DIR")]
    directory: Option<PathBuf>,

    /// Project config file, defaults to ./builder_script.toml when present
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Ignore the per-user defaults file
    #[arg(long)]
    no_global_config: bool,

    /// Store a per-user default, e.g. --set-default tools.cc=clang
    #[arg(long, value_name = "KEY=VALUE")]
    set_default: Vec<String>,

    /// help, build, clean, build-tests, clean-tests, build-examples, clean-examples.
    /// Put `invoke` before them to actually run the commands
    commands: Vec<String>,
}

fn main() {
    let args = Args::parse();
    let exe_path = std::env::args()
        .next()
        .unwrap_or_else(|| "builder_script".to_string());

    if let Err(e) = run(args, &exe_path) {
        log(LogLevel::Error, &format!("Error: {}", e));
        std::process::exit(1);
    }
}

fn run(args: Args, exe_path: &str) -> Result<()> {
    platform::set_console_code_page("utf-8")?;
    // the caller's directory is the project root unless -C names another
    if let Some(dir) = &args.directory {
        platform::ch_dir(dir)?;
    }

    if !args.set_default.is_empty() {
        set_defaults(&args.set_default)?;
        if args.commands.is_empty() {
            return Ok(());
        }
    }

    let mut builder = Builder::new()?;

    if !args.no_global_config {
        if let Some(global) = GlobalConfig::locate() {
            if let Some(config) = global.load()? {
                config.apply(&mut builder);
            }
        }
    }

    let local = match &args.config {
        Some(path) => Some(ScriptConfig::from_file(path)?),
        None if Path::new(LOCAL_CONFIG).is_file() => {
            Some(ScriptConfig::from_file(Path::new(LOCAL_CONFIG))?)
        }
        None => None,
    };
    if let Some(config) = &local {
        config.apply(&mut builder);
    }

    bin_flags::define_os_macro(&mut builder);

    let project = local.and_then(|config| config.project).unwrap_or_default();
    bin_flags::run_commands(&mut builder, &project, exe_path, &args.commands)
}

fn set_defaults(pairs: &[String]) -> Result<()> {
    let global = GlobalConfig::locate().ok_or_else(|| BuildError::Config {
        path: PathBuf::from("config.toml"),
        message: "no user config directory on this host".to_string(),
    })?;
    log(
        LogLevel::Info,
        &format!("Updating defaults in {}", global.path().display()),
    );
    for pair in pairs {
        let (key, value) = pair.split_once('=').ok_or_else(|| BuildError::ConfigKey {
            key: pair.clone(),
            message: "expected KEY=VALUE".to_string(),
        })?;
        global.set_default(key.trim(), value.trim())?;
    }
    Ok(())
}
