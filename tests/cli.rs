use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const PROJECT: &str = r#"
[run]
print_commands = true

[project]
library = "engine"
sources = ["engine.c", "render.c"]
examples = ["hello.c"]
"#;

fn driver(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("builder_script").unwrap();
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env_remove("BUILDER_SCRIPT_LOG_LEVEL")
        .arg("--no-global-config");
    cmd
}

fn project_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("builder_script.toml"), PROJECT).unwrap();
    dir
}

#[test]
fn no_commands_prints_help() {
    let dir = tempfile::tempdir().unwrap();
    driver(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Available commands:"))
        .stdout(predicate::str::contains("build-examples"));
}

#[test]
fn build_is_a_dry_run_by_default() {
    let dir = project_dir();
    driver(&dir)
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains("[DRYRUN] gcc -D"))
        .stdout(predicate::str::contains("-fPIC -c engine.c render.c"))
        .stdout(predicate::str::contains("[DRYRUN] ar cr libengine.a engine.o render.o"))
        .stdout(predicate::str::contains("[INVOKE]").not());
}

#[test]
fn unknown_commands_are_skipped() {
    let dir = project_dir();
    driver(&dir)
        .args(["frobnicate", "build-examples"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: frobnicate"))
        .stdout(predicate::str::contains("hello.c"));
}

#[test]
fn broken_config_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("builder_script.toml"), "[tools]\ncompiler = 1\n").unwrap();
    driver(&dir)
        .arg("build")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("could not load config"));
}

#[test]
fn explicit_config_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    driver(&dir)
        .args(["--config", "missing.toml", "build"])
        .assert()
        .code(1);
}

#[cfg(unix)]
#[test]
fn invoke_runs_for_real() {
    let dir = project_dir();
    fs::write(dir.path().join("libengine.a"), b"archive").unwrap();
    fs::write(dir.path().join("engine.o"), b"object").unwrap();

    driver(&dir)
        .args(["invoke", "clean"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[INVOKE] rm -f \"libengine.a\""));

    assert!(!dir.path().join("libengine.a").exists());
    assert!(!dir.path().join("engine.o").exists());
}
