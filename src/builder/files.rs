use std::fs;
use std::io;
use std::path::Path;

use super::Builder;
use crate::error::{BuildError, Result};

impl Builder {
    /// Moves `src` to `dest` with the configured move command.
    /// Paths are double quoted so they may contain spaces.
    pub fn move_file(&mut self, src: &str, dest: &str) -> Result<()> {
        let full_cmd = format!("{} \"{}\" \"{}\"", self.move_command, src, dest);
        self.exec_raw(full_cmd)
    }

    /// Copies `src` to `dest` with the configured copy command.
    pub fn copy_file(&mut self, src: &str, dest: &str) -> Result<()> {
        let full_cmd = format!("{} \"{}\" \"{}\"", self.copy_command, src, dest);
        self.exec_raw(full_cmd)
    }

    /// Removes `path` with the configured remove command.
    pub fn remove_file(&mut self, path: &str) -> Result<()> {
        let full_cmd = format!("{} \"{}\"", self.remove_command, path);
        self.exec_raw(full_cmd)
    }

    /// Whether `path` exists and is a regular file.
    ///
    /// Queries the filesystem directly, so dry-run has no effect on it.
    /// Directories report `false`, as does a missing path.
    pub fn file_exists(path: impl AsRef<Path>) -> Result<bool> {
        let path = path.as_ref();
        match fs::metadata(path) {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(BuildError::StatFailed {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}
