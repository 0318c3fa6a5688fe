use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use super::AppError;

/// Ambient process state every step reads, captured once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    home: PathBuf,
    search_path: Vec<PathBuf>,
}

impl Environment {
    pub fn new(home: impl Into<PathBuf>, search_path: Vec<PathBuf>) -> Self {
        Self { home: home.into(), search_path }
    }

    /// Capture `HOME` and `PATH` from the current process.
    pub fn from_process() -> Result<Self, AppError> {
        let home = std::env::var_os("HOME")
            .filter(|value| !value.is_empty())
            .ok_or_else(|| AppError::config_error("HOME environment variable not set"))?;
        let search_path = std::env::var_os("PATH")
            .map(|value| std::env::split_paths(&value).collect())
            .unwrap_or_default();

        Ok(Self::new(home, search_path))
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Resolve a path relative to the home directory.
    pub fn home_path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.home.join(relative)
    }

    /// Locate an executable by name on the search path.
    pub fn find_executable(&self, name: impl AsRef<OsStr>) -> Option<PathBuf> {
        let name = name.as_ref();
        self.search_path.iter().map(|dir| dir.join(name)).find(|candidate| is_executable(candidate))
    }
}

pub(crate) fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path).is_ok_and(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
}
