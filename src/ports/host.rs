use std::path::Path;

use crate::domain::{AppError, ProcessCommand};

/// Host-level operations outside the package service.
pub trait HostPort {
    /// Whether the developer toolchain is installed.
    fn toolchain_installed(&self) -> bool;

    /// Start the (asynchronous) toolchain installer.
    fn request_toolchain_install(&self) -> Result<(), AppError>;

    /// Run a local script with arguments.
    fn run_script(&self, script: &Path, args: &[String]) -> Result<(), AppError>;

    /// Run a one-off command, e.g. a process restart.
    fn run(&self, command: &ProcessCommand) -> Result<(), AppError>;
}

impl<T: HostPort + ?Sized> HostPort for &T {
    fn toolchain_installed(&self) -> bool {
        (**self).toolchain_installed()
    }

    fn request_toolchain_install(&self) -> Result<(), AppError> {
        (**self).request_toolchain_install()
    }

    fn run_script(&self, script: &Path, args: &[String]) -> Result<(), AppError> {
        (**self).run_script(script, args)
    }

    fn run(&self, command: &ProcessCommand) -> Result<(), AppError> {
        (**self).run(command)
    }
}
