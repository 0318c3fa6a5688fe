//! Homebrew-backed package service.

use std::path::PathBuf;

use url::Url;

use super::command;
use super::installer_download::download_script;
use crate::domain::environment::is_executable;
use crate::domain::{AppError, Environment, PackageSpec};
use crate::ports::PackageService;

const INSTALLER_SHELL: &str = "/bin/bash";

#[derive(Debug, Clone)]
pub struct HomebrewPackageService {
    env: Environment,
    installer_url: Url,
    candidates: Vec<PathBuf>,
}

impl HomebrewPackageService {
    pub fn new(env: Environment, installer_url: Url, candidates: Vec<PathBuf>) -> Self {
        Self { env, installer_url, candidates }
    }

    /// Resolved on every call: a fresh install is not on this process's PATH.
    fn binary(&self) -> Option<PathBuf> {
        self.env
            .find_executable("brew")
            .or_else(|| self.candidates.iter().find(|path| is_executable(path)).cloned())
    }

    fn brew(&self) -> Result<PathBuf, AppError> {
        self.binary().ok_or(AppError::PackageServiceUnavailable)
    }
}

impl PackageService for HomebrewPackageService {
    fn is_available(&self) -> bool {
        self.binary().is_some()
    }

    fn locate(&self) -> Result<PathBuf, AppError> {
        self.brew()
    }

    fn install_self(&self) -> Result<PathBuf, AppError> {
        let script = download_script(&self.installer_url)?;
        command::run_inherit(INSTALLER_SHELL, &[script.path()], &[("NONINTERACTIVE", "1")])?;
        self.brew()
    }

    fn prefix(&self) -> Result<PathBuf, AppError> {
        command::run_capture(self.brew()?, &["--prefix"]).map(PathBuf::from)
    }

    fn is_present(&self, package: &PackageSpec) -> Result<bool, AppError> {
        Ok(command::succeeds(self.brew()?, &["list", package.kind.flag(), package.name.as_str()]))
    }

    fn install(&self, package: &PackageSpec) -> Result<(), AppError> {
        command::run_inherit(
            self.brew()?,
            &["install", package.kind.flag(), package.name.as_str()],
            &[],
        )
    }

    fn update(&self) -> Result<(), AppError> {
        command::run_inherit(self.brew()?, &["update"], &[])
    }

    fn upgrade(&self) -> Result<(), AppError> {
        command::run_inherit(self.brew()?, &["upgrade"], &[])
    }
}
