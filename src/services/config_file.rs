//! Guarded appends and permission changes on files under the home directory.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use crate::domain::{AppError, ConfigEdit, Environment};

/// Owner-only directory access.
pub const PRIVATE_DIR_MODE: u32 = 0o700;
/// Owner read-write file access.
pub const PRIVATE_FILE_MODE: u32 = 0o600;

/// Read a text file, treating a missing file as empty.
pub fn read_or_empty(path: &Path) -> Result<String, AppError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(err.into()),
    }
}

/// Whether `edit` is already present in its target file.
pub fn is_applied(env: &Environment, edit: &ConfigEdit) -> Result<bool, AppError> {
    let contents = read_or_empty(&env.home_path(&edit.file))?;
    Ok(edit.is_applied(&contents))
}

/// Append `edit` unless its marker is already present.
///
/// Returns `true` when the file was written. The block goes out in a single
/// write call; existing content is never rewritten.
pub fn ensure_edit(env: &Environment, edit: &ConfigEdit) -> Result<bool, AppError> {
    let path = env.home_path(&edit.file);
    let contents = read_or_empty(&path)?;
    if edit.is_applied(&contents) {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let block = edit.render_block(&contents);
    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    file.write_all(block.as_bytes())?;
    file.flush()?;
    Ok(true)
}

/// Set unix permission bits on `path`.
pub fn set_mode(path: &Path, mode: u32) -> Result<(), AppError> {
    fs::set_permissions(path, fs::Permissions::from_mode(mode))?;
    Ok(())
}
