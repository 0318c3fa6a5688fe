use serde::Deserialize;

use super::AppError;

/// A validated package name as understood by the package service.
///
/// Guarantees:
/// - Non-empty
/// - Characters are alphanumeric, `-`, `_`, `.`, `@`, `+`, or `/` (tap-qualified names)
/// - No empty, `.` or `..` path segments
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct PackageName(String);

impl PackageName {
    /// Validate and create a new `PackageName`.
    pub fn new(name: &str) -> Result<Self, AppError> {
        if validate_package_name(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(AppError::InvalidPackageName(name.to_string()))
        }
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PackageName {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl AsRef<str> for PackageName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn validate_package_name(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    if name.split('/').any(|segment| segment.is_empty() || segment == "." || segment == "..") {
        return false;
    }
    name.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '@' | '+' | '/'))
}

/// How the package service installs a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageKind {
    /// A command-line formula.
    Formula,
    /// An application bundle.
    Cask,
}

impl PackageKind {
    /// The `brew` flag selecting this kind.
    pub fn flag(self) -> &'static str {
        match self {
            PackageKind::Formula => "--formula",
            PackageKind::Cask => "--cask",
        }
    }
}

/// A package the run ensures is installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSpec {
    pub name: PackageName,
    pub kind: PackageKind,
}

impl PackageSpec {
    pub fn formula(name: PackageName) -> Self {
        Self { name, kind: PackageKind::Formula }
    }

    pub fn cask(name: PackageName) -> Self {
        Self { name, kind: PackageKind::Cask }
    }
}

impl std::fmt::Display for PackageSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            PackageKind::Formula => write!(f, "{}", self.name),
            PackageKind::Cask => write!(f, "{} (app)", self.name),
        }
    }
}
