use crate::builder::Builder;
use crate::error::Result;
use crate::platform;
use crate::utils::{log, LogLevel, ProjectConfig};
use itertools::Itertools;
use std::path::Path;

/// Commands understood by the driver, besides `invoke`.
pub const COMMANDS: [&str; 7] = [
    "help",
    "build",
    "clean",
    "build-tests",
    "clean-tests",
    "build-examples",
    "clean-examples",
];

///Prints the available commands
/// # Arguments
/// * `exe_path` - How the driver was invoked, used in the usage example
pub fn print_help(exe_path: &str) {
    log(LogLevel::Log, "Available commands:");
    for cmd in COMMANDS {
        log(LogLevel::Log, &format!("\t{}", cmd));
    }
    log(LogLevel::Log, "Commands are dry-run by default.");
    log(
        LogLevel::Log,
        "To actually invoke, specify `invoke` before the first command.",
    );
    log(LogLevel::Log, &format!("Example: {} invoke build", exe_path));
}

///Runs the driver commands in order
/// # Arguments
/// * `builder` - The session builder
/// * `project` - What to build
/// * `exe_path` - How the driver was invoked
/// * `commands` - The command tokens, `invoke` switches to live runs for the rest
pub fn run_commands(
    builder: &mut Builder,
    project: &ProjectConfig,
    exe_path: &str,
    commands: &[String],
) -> Result<()> {
    if commands.is_empty() {
        print_help(exe_path);
        return Ok(());
    }
    for cmd in commands {
        match cmd.as_str() {
            "invoke" => builder.dry_run = false,
            "help" => print_help(exe_path),
            "build" => build(builder, project)?,
            "clean" => clean(builder, project)?,
            "build-tests" => build_programs(builder, project, &project.tests)?,
            "clean-tests" => clean_programs(builder, &project.tests)?,
            "build-examples" => build_programs(builder, project, &project.examples)?,
            "clean-examples" => clean_programs(builder, &project.examples)?,
            other => log(LogLevel::Warn, &format!("Unknown command: {}", other)),
        }
    }
    Ok(())
}

/// Appends `-D<OS>` to both compiler commands so sources can branch on the host.
pub fn define_os_macro(builder: &mut Builder) {
    let define = format!(" -D{}", builder.os().macro_name());
    builder.cc_command.push_str(&define);
    builder.cxx_command.push_str(&define);
}

pub fn archive_name(project: &ProjectConfig) -> String {
    format!("lib{}.a", project.library)
}

// Compilers drop objects in the working directory, named after the source file
fn object_name(src: &str) -> String {
    format!("{}.o", file_stem(src))
}

fn file_stem(src: &str) -> String {
    Path::new(src)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| src.to_string())
}

fn is_c_source(src: &str) -> bool {
    Path::new(src).extension().map_or(false, |ext| ext == "c")
}

///Compiles the library sources and archives them
pub fn build(builder: &mut Builder, project: &ProjectConfig) -> Result<()> {
    if project.sources.is_empty() {
        log(LogLevel::Warn, "No library sources configured");
        return Ok(());
    }
    log(
        LogLevel::Log,
        &format!("Building library: {}", archive_name(project)),
    );
    builder.cc(format_args!("-fPIC -c {}", project.sources.iter().join(" ")))?;
    let objects = project.sources.iter().map(|src| object_name(src)).join(" ");
    builder.ar(format_args!("cr {} {}", archive_name(project), objects))
}

///Removes the library archive and its objects
pub fn clean(builder: &mut Builder, project: &ProjectConfig) -> Result<()> {
    log(
        LogLevel::Log,
        &format!("Cleaning library: {}", archive_name(project)),
    );
    builder.remove_file(&archive_name(project))?;
    for src in &project.sources {
        builder.remove_file(&object_name(src))?;
    }
    Ok(())
}

///Builds one executable per source, linked against the library
pub fn build_programs(
    builder: &mut Builder,
    project: &ProjectConfig,
    sources: &[String],
) -> Result<()> {
    for src in sources {
        let exe = platform::executable_file_name(&file_stem(src));
        log(LogLevel::Log, &format!("Building program: {}", exe));
        let params = format!("-I. -L. -o \"{}\" \"{}\" -l{}", exe, src, project.library);
        if is_c_source(src) {
            builder.cc(&params)?;
        } else {
            builder.cxx(&params)?;
        }
    }
    Ok(())
}

///Removes the executables built from `sources`
pub fn clean_programs(builder: &mut Builder, sources: &[String]) -> Result<()> {
    for src in sources {
        let exe = platform::executable_file_name(&file_stem(src));
        builder.remove_file(&exe)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::OsFamily;

    fn quiet() -> Builder {
        let mut b = Builder::for_os(OsFamily::Linux);
        b.print_command_to_stdout = false;
        b
    }

    fn project() -> ProjectConfig {
        ProjectConfig {
            library: "engine".to_string(),
            sources: vec!["src/engine.c".to_string(), "render.c".to_string()],
            tests: vec!["test_engine.cc".to_string()],
            examples: vec!["hello.c".to_string()],
        }
    }

    fn tokens(cmds: &[&str]) -> Vec<String> {
        cmds.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn build_ends_with_archive() {
        let mut b = quiet();
        run_commands(&mut b, &project(), "drv", &tokens(&["build"])).unwrap();
        assert_eq!(b.last_exec_command(), "ar cr libengine.a engine.o render.o");
        assert!(b.dry_run);
    }

    #[test]
    fn programs_pick_compiler_by_extension() {
        let mut b = quiet();
        let p = project();
        build_programs(&mut b, &p, &p.tests).unwrap();
        let exe = platform::executable_file_name("test_engine");
        assert_eq!(
            b.last_exec_command(),
            format!("g++ -I. -L. -o \"{}\" \"test_engine.cc\" -lengine", exe)
        );
        build_programs(&mut b, &p, &p.examples).unwrap();
        assert!(b.last_exec_command().starts_with("gcc -I. -L. -o "));
    }

    #[test]
    fn clean_removes_objects_last() {
        let mut b = quiet();
        run_commands(&mut b, &project(), "drv", &tokens(&["clean"])).unwrap();
        assert_eq!(b.last_exec_command(), "rm -f \"render.o\"");
    }

    #[test]
    fn invoke_switches_to_live_runs() {
        let mut b = quiet();
        let empty = ProjectConfig::default();
        run_commands(&mut b, &empty, "drv", &tokens(&["help", "invoke", "frobnicate"])).unwrap();
        assert!(!b.dry_run);
        assert_eq!(b.last_exec_command(), "");
    }

    #[test]
    fn os_macro_is_appended() {
        let mut b = quiet();
        define_os_macro(&mut b);
        b.c_language_standard = "c11".to_string();
        b.cc("-c a.c").unwrap();
        assert_eq!(b.last_exec_command(), "gcc -DLINUX -std=c11 -c a.c");
        assert_eq!(b.cxx_command, "g++ -DLINUX");
    }
}
