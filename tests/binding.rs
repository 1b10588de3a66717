use builder_script::binding;
use builder_script::StatusCode;

#[test]
fn init_and_deinit() {
    let b = binding::init().unwrap();
    assert_eq!(binding::deinit(Some(b)), Ok(()));
}

#[test]
fn getters_setters_and_commands() {
    let mut b = binding::init().unwrap();
    assert_eq!(binding::dry_run(Some(&*b)), Ok(true));
    binding::set_print_command_to_stdout(Some(&mut *b), false).unwrap();
    assert_eq!(binding::print_command_to_stdout(Some(&*b)), Ok(false));
    assert_eq!(binding::cc_command(Some(&*b)), Ok("gcc"));

    binding::cc(Some(&mut *b), "-c %s", &["Builder.c".into()]).unwrap();
    assert_eq!(binding::last_exec_command(Some(&*b)), Ok("gcc -c Builder.c"));

    binding::set_c_language_standard(Some(&mut *b), "c17").unwrap();
    binding::cc(Some(&mut *b), "-c Builder.c", &[]).unwrap();
    assert_eq!(
        binding::last_exec_command(Some(&*b)),
        Ok("gcc -std=c17 -c Builder.c")
    );

    binding::cxx(Some(&mut *b), "-o Test_Builder Test_Builder.cc Builder.cc", &[]).unwrap();
    assert_eq!(
        binding::last_exec_command(Some(&*b)),
        Ok("g++ -o Test_Builder Test_Builder.cc Builder.cc")
    );

    binding::set_cxx_language_standard(Some(&mut *b), "c++17").unwrap();
    binding::cxx(Some(&mut *b), "-o %s %s", &["app".into(), "app.cc".into()]).unwrap();
    assert_eq!(
        binding::last_exec_command(Some(&*b)),
        Ok("g++ -std=c++17 -o app app.cc")
    );

    binding::set_ar_command(Some(&mut *b), "llvm-ar").unwrap();
    binding::ar(Some(&mut *b), "cru libbuild.a %s", &["a.o".into()]).unwrap();
    assert_eq!(
        binding::last_exec_command(Some(&*b)),
        Ok("llvm-ar cru libbuild.a a.o")
    );

    binding::ld(Some(&mut *b), "-o Test test.o", &[]).unwrap();
    assert_eq!(binding::last_exec_command(Some(&*b)), Ok("ld -o Test test.o"));

    binding::set_remove_command(Some(&mut *b), "rm -rf").unwrap();
    binding::remove_file(Some(&mut *b), "out").unwrap();
    assert_eq!(binding::last_exec_command(Some(&*b)), Ok("rm -rf \"out\""));

    assert_eq!(binding::deinit(Some(b)), Ok(()));
}

#[test]
fn every_status_has_a_message() {
    for code in StatusCode::ALL {
        assert_ne!(binding::status_code_message(code), "");
    }
    assert_eq!(binding::status_code_message(StatusCode::Ok), "OK");
}

#[test]
fn file_exists_through_binding() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(binding::file_exists(dir.path()), Ok(false));
    assert_eq!(binding::file_exists(dir.path().join("none")), Ok(false));
}

#[cfg(unix)]
#[test]
fn file_exists_stat_failure_through_binding() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("plain.o");
    std::fs::write(&file, b"obj").unwrap();
    assert_eq!(
        binding::file_exists(file.join("child")),
        Err(StatusCode::StatFailed)
    );
}

#[test]
fn host_helpers_through_binding() {
    assert_eq!(binding::dir_name("out/app"), Ok("out".to_string()));
    assert_eq!(
        binding::dir_name(""),
        Err(StatusCode::DirectoryNameResolutionFailed)
    );
    assert_eq!(
        binding::set_console_code_page("latin1"),
        Err(StatusCode::UnknownConsoleCodePage)
    );
    assert_eq!(binding::set_console_code_page("utf-8"), Ok(()));
    assert_eq!(
        binding::ch_dir_to_program_dir::<&str>(&[]),
        Err(StatusCode::MissingExecutablePath)
    );
    assert_eq!(
        binding::ch_dir("/nonexistent/builder-script-dir"),
        Err(StatusCode::ChangeDirectoryFailed)
    );
    assert!(binding::get_current_working_dir().is_ok());

    let facts = [
        binding::is_windows(),
        binding::is_macos(),
        binding::is_linux(),
        binding::is_unix(),
    ];
    assert_eq!(facts.iter().filter(|&&f| f).count(), 1);
}
