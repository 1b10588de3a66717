//! A library for writing build scripts as ordinary programs.
//!
//! Instead of a declarative build file, the build logic is a Rust program
//! that drives a [`Builder`]. The builder assembles command lines for the C
//! compiler, the C++ compiler, the archiver and the linker, plus move, copy
//! and remove commands picked for the host OS, and hands them to the shell.
//!
//! Sessions start in dry-run mode: commands are printed as `[DRYRUN] ...`
//! and nothing runs until `dry_run` is switched off, after which they are
//! printed as `[INVOKE] ...` and executed. The last assembled command is
//! always available through [`Builder::last_exec_command`].
//!
//! Only a failure to start the shell is an error. A tool that runs and exits
//! with a nonzero code is not reported as a failure.
//!
//! # Examples
//! ```no_run
//! use builder_script::{ar, cc, Builder};
//!
//! fn main() -> builder_script::Result<()> {
//!     let mut b = Builder::new()?;
//!     b.c_language_standard = "c17".to_string();
//!     b.dry_run = false;
//!
//!     cc!(b, "-fPIC -c {} {}", "engine.c", "render.c")?;
//!     ar!(b, "cr {} engine.o render.o", "libengine.a")?;
//!     b.move_file("libengine.a", "out/libengine.a")?;
//!     Ok(())
//! }
//! ```
//!
//! # Config files
//! The `builder_script` binary reads `builder_script.toml` from the working
//! directory, after the per-user defaults in the platform config directory.
//!```toml
//![run]
//!print_commands = true
//!
//![tools]
//!cc = "clang"
//!c_standard = "c17"
//!
//![project]
//!library = "engine"
//!sources = ["engine.c", "render.c"]
//!examples = ["hello.c"]
//!```

/// Contains the subcommands of the example build driver
pub mod bin_flags;
/// Handle-style functions over the builder
pub mod binding;
/// Contains the builder and its command assembly
pub mod builder;
/// Error and status types
pub mod error;
/// Handles global config
pub mod global_config;
/// OS family facts and host helpers
pub mod platform;
/// Contains logger and config parser
pub mod utils;

pub use builder::Builder;
pub use error::{BuildError, Result, StatusCode};
pub use platform::OsFamily;

/// Runs the C compiler with `format!`-style parameters.
#[macro_export]
macro_rules! cc {
    ($builder:expr, $($arg:tt)*) => {
        $builder.cc(::std::format_args!($($arg)*))
    };
}

/// Runs the C++ compiler with `format!`-style parameters.
#[macro_export]
macro_rules! cxx {
    ($builder:expr, $($arg:tt)*) => {
        $builder.cxx(::std::format_args!($($arg)*))
    };
}

/// Runs the archiver with `format!`-style parameters.
#[macro_export]
macro_rules! ar {
    ($builder:expr, $($arg:tt)*) => {
        $builder.ar(::std::format_args!($($arg)*))
    };
}

/// Runs the linker with `format!`-style parameters.
#[macro_export]
macro_rules! ld {
    ($builder:expr, $($arg:tt)*) => {
        $builder.ld(::std::format_args!($($arg)*))
    };
}

/// Runs a whole command line built with `format!`-style parameters.
#[macro_export]
macro_rules! exec {
    ($builder:expr, $($arg:tt)*) => {
        $builder.exec(::std::format_args!($($arg)*))
    };
}
