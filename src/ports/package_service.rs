use std::path::PathBuf;

use crate::domain::{AppError, PackageSpec};

/// The host package manager.
pub trait PackageService {
    /// Whether the service binary can be located.
    fn is_available(&self) -> bool;

    /// Path of the service binary.
    fn locate(&self) -> Result<PathBuf, AppError>;

    /// Install the service itself. Returns the path of the installed binary.
    fn install_self(&self) -> Result<PathBuf, AppError>;

    /// Installation prefix (`brew --prefix`).
    fn prefix(&self) -> Result<PathBuf, AppError>;

    /// Whether `package` is already installed.
    fn is_present(&self, package: &PackageSpec) -> Result<bool, AppError>;

    /// Install `package`.
    fn install(&self, package: &PackageSpec) -> Result<(), AppError>;

    /// Refresh the catalog.
    fn update(&self) -> Result<(), AppError>;

    /// Upgrade every installed package.
    fn upgrade(&self) -> Result<(), AppError>;
}

impl<T: PackageService + ?Sized> PackageService for &T {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn locate(&self) -> Result<PathBuf, AppError> {
        (**self).locate()
    }

    fn install_self(&self) -> Result<PathBuf, AppError> {
        (**self).install_self()
    }

    fn prefix(&self) -> Result<PathBuf, AppError> {
        (**self).prefix()
    }

    fn is_present(&self, package: &PackageSpec) -> Result<bool, AppError> {
        (**self).is_present(package)
    }

    fn install(&self, package: &PackageSpec) -> Result<(), AppError> {
        (**self).install(package)
    }

    fn update(&self) -> Result<(), AppError> {
        (**self).update()
    }

    fn upgrade(&self) -> Result<(), AppError> {
        (**self).upgrade()
    }
}
