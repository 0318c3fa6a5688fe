//! Preference store backed by the macOS `defaults` command.

use std::path::PathBuf;

use super::command;
use crate::domain::{AppError, Preference};
use crate::ports::PreferenceStore;

const DEFAULTS: &str = "defaults";

#[derive(Debug, Clone)]
pub struct DefaultsPreferenceStore {
    program: PathBuf,
}

impl Default for DefaultsPreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultsPreferenceStore {
    pub fn new() -> Self {
        Self::with_program(DEFAULTS)
    }

    /// Use a specific `defaults`-compatible executable.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into() }
    }
}

impl PreferenceStore for DefaultsPreferenceStore {
    fn read(&self, preference: &Preference) -> Result<Option<String>, AppError> {
        // `defaults read` exits non-zero for a key that was never written.
        let args = ["read", preference.domain.as_str(), preference.key.as_str()];
        command::run_capture_optional(&self.program, &args)
    }

    fn write(&self, preference: &Preference) -> Result<(), AppError> {
        let value = preference.value.to_arg();
        command::run_capture(
            &self.program,
            &[
                "write",
                preference.domain.as_str(),
                preference.key.as_str(),
                preference.value.type_flag(),
                value.as_str(),
            ],
        )
        .map(|_| ())
    }
}
