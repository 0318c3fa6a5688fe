//! Host operations via plain commands.

use std::path::Path;

use super::command;
use crate::domain::{AppError, ProcessCommand};
use crate::ports::HostPort;

const XCODE_SELECT: &str = "xcode-select";

#[derive(Debug, Clone, Default)]
pub struct CommandHost;

impl CommandHost {
    pub fn new() -> Self {
        Self
    }
}

impl HostPort for CommandHost {
    fn toolchain_installed(&self) -> bool {
        command::succeeds(XCODE_SELECT, &["-p"])
    }

    fn request_toolchain_install(&self) -> Result<(), AppError> {
        command::run_inherit(XCODE_SELECT, &["--install"], &[])
    }

    fn run_script(&self, script: &Path, args: &[String]) -> Result<(), AppError> {
        command::run_inherit(script, args, &[])
    }

    fn run(&self, process: &ProcessCommand) -> Result<(), AppError> {
        command::run_capture(&process.program, process.args.as_slice()).map(|_| ())
    }
}
