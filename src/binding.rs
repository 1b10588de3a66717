//! Handle-style surface over [`Builder`] for callers that drive it through
//! plain functions instead of methods.
//!
//! A handle is an `Option` borrow of a builder. Passing `None` to any
//! handle-based function does nothing and returns
//! [`StatusCode::ObjectRequired`]. Every function returns its outcome
//! directly, there is no last-error slot to consult.
//!
//! The host helpers from [`crate::platform`] are forwarded here as well, with
//! their failures reduced to a [`StatusCode`].
use std::path::Path;

use crate::builder::printf::{sprintf, FmtArg};
use crate::builder::Builder;
use crate::error::StatusCode;
use crate::platform;

pub type BindingResult<T> = std::result::Result<T, StatusCode>;

fn require(handle: Option<&Builder>) -> BindingResult<&Builder> {
    handle.ok_or(StatusCode::ObjectRequired)
}

fn require_mut(handle: Option<&mut Builder>) -> BindingResult<&mut Builder> {
    handle.ok_or(StatusCode::ObjectRequired)
}

/// Allocates a builder with host defaults.
pub fn init() -> BindingResult<Box<Builder>> {
    Ok(Box::new(Builder::new()?))
}

/// Releases a builder obtained from [`init`].
pub fn deinit(handle: Option<Box<Builder>>) -> BindingResult<()> {
    handle.map(drop).ok_or(StatusCode::ObjectRequired)
}

pub fn status_code_message(code: StatusCode) -> &'static str {
    code.message()
}

pub fn set_dry_run(handle: Option<&mut Builder>, dry_run: bool) -> BindingResult<()> {
    require_mut(handle)?.dry_run = dry_run;
    Ok(())
}

pub fn dry_run(handle: Option<&Builder>) -> BindingResult<bool> {
    Ok(require(handle)?.dry_run)
}

pub fn set_print_command_to_stdout(handle: Option<&mut Builder>, print: bool) -> BindingResult<()> {
    require_mut(handle)?.print_command_to_stdout = print;
    Ok(())
}

pub fn print_command_to_stdout(handle: Option<&Builder>) -> BindingResult<bool> {
    Ok(require(handle)?.print_command_to_stdout)
}

pub fn last_exec_command(handle: Option<&Builder>) -> BindingResult<&str> {
    Ok(require(handle)?.last_exec_command())
}

macro_rules! string_field {
    ($field:ident, $setter:ident) => {
        pub fn $field(handle: Option<&Builder>) -> BindingResult<&str> {
            Ok(require(handle)?.$field.as_str())
        }

        pub fn $setter(handle: Option<&mut Builder>, value: &str) -> BindingResult<()> {
            require_mut(handle)?.$field = value.to_string();
            Ok(())
        }
    };
}

string_field!(cc_command, set_cc_command);
string_field!(c_language_standard, set_c_language_standard);
string_field!(cxx_command, set_cxx_command);
string_field!(cxx_language_standard, set_cxx_language_standard);
string_field!(ar_command, set_ar_command);
string_field!(ld_command, set_ld_command);
string_field!(move_command, set_move_command);
string_field!(copy_command, set_copy_command);
string_field!(remove_command, set_remove_command);

/// Runs the C compiler with a printf-style template.
pub fn cc(handle: Option<&mut Builder>, fmt: &str, args: &[FmtArg]) -> BindingResult<()> {
    let b = require_mut(handle)?;
    let params = sprintf(fmt, args)?;
    b.cc(params).map_err(StatusCode::from)
}

pub fn cxx(handle: Option<&mut Builder>, fmt: &str, args: &[FmtArg]) -> BindingResult<()> {
    let b = require_mut(handle)?;
    let params = sprintf(fmt, args)?;
    b.cxx(params).map_err(StatusCode::from)
}

pub fn ar(handle: Option<&mut Builder>, fmt: &str, args: &[FmtArg]) -> BindingResult<()> {
    let b = require_mut(handle)?;
    let params = sprintf(fmt, args)?;
    b.ar(params).map_err(StatusCode::from)
}

pub fn ld(handle: Option<&mut Builder>, fmt: &str, args: &[FmtArg]) -> BindingResult<()> {
    let b = require_mut(handle)?;
    let params = sprintf(fmt, args)?;
    b.ld(params).map_err(StatusCode::from)
}

pub fn exec(handle: Option<&mut Builder>, fmt: &str, args: &[FmtArg]) -> BindingResult<()> {
    let b = require_mut(handle)?;
    let params = sprintf(fmt, args)?;
    b.exec(params).map_err(StatusCode::from)
}

pub fn move_file(handle: Option<&mut Builder>, src: &str, dest: &str) -> BindingResult<()> {
    require_mut(handle)?.move_file(src, dest).map_err(StatusCode::from)
}

pub fn copy_file(handle: Option<&mut Builder>, src: &str, dest: &str) -> BindingResult<()> {
    require_mut(handle)?.copy_file(src, dest).map_err(StatusCode::from)
}

pub fn remove_file(handle: Option<&mut Builder>, path: &str) -> BindingResult<()> {
    require_mut(handle)?.remove_file(path).map_err(StatusCode::from)
}

pub fn file_exists(path: impl AsRef<Path>) -> BindingResult<bool> {
    Builder::file_exists(path).map_err(StatusCode::from)
}

pub fn executable_file_name(exe_name: &str) -> String {
    platform::executable_file_name(exe_name)
}

pub fn is_windows() -> bool {
    platform::is_windows()
}

pub fn is_macos() -> bool {
    platform::is_macos()
}

pub fn is_linux() -> bool {
    platform::is_linux()
}

pub fn is_unix() -> bool {
    platform::is_unix()
}

pub fn set_console_code_page(name: &str) -> BindingResult<()> {
    platform::set_console_code_page(name).map_err(StatusCode::from)
}

pub fn dir_name(path: &str) -> BindingResult<String> {
    platform::dir_name(path).map_err(StatusCode::from)
}

pub fn ch_dir(dir_path: impl AsRef<Path>) -> BindingResult<()> {
    platform::ch_dir(dir_path).map_err(StatusCode::from)
}

/// Changes into the directory of `args[0]`, see [`platform::ch_dir_to_program_dir`].
pub fn ch_dir_to_program_dir<S: AsRef<str>>(args: &[S]) -> BindingResult<()> {
    platform::ch_dir_to_program_dir(args).map_err(StatusCode::from)
}

pub fn get_current_working_dir() -> BindingResult<String> {
    platform::current_working_dir().map_err(StatusCode::from)
}
