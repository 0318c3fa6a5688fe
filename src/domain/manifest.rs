//! Fixed provisioning manifest (`src/assets/manifest.yml`, embedded at build time).

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use super::{AppError, ConfigEdit, PackageName, PackageSpec, Preference};

static EMBEDDED_MANIFEST: &str = include_str!("../assets/manifest.yml");

/// Everything the run installs and writes, in declared order.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub toolchain: ToolchainConfig,
    pub package_service: PackageServiceConfig,
    pub cli_tools: Vec<PackageName>,
    pub shell_integration: ShellIntegration,
    pub shell_edits: Vec<ConfigEdit>,
    pub gpg_agent: GpgAgentConfig,
    pub version_manager: VersionManager,
    pub applications: Vec<PackageName>,
    pub preferences: Vec<Preference>,
    pub file_manager_restart: ProcessCommand,
    #[serde(default)]
    pub reminders: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToolchainConfig {
    pub poll_interval_secs: u64,
}

impl ToolchainConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PackageServiceConfig {
    pub installer_url: Url,
    /// Absolute locations checked when `brew` is not on the search path.
    #[serde(default)]
    pub binary_candidates: Vec<PathBuf>,
    /// Startup-file block registering the service for future shells.
    pub registration: Registration,
}

/// Where the `shellenv` line goes once the service is freshly installed.
#[derive(Debug, Clone, Deserialize)]
pub struct Registration {
    /// Startup file, relative to home.
    pub file: PathBuf,
    pub comment: String,
}

impl Registration {
    const MARKER: &'static str = "brew shellenv";

    /// The edit registering the binary at `brew`.
    pub fn edit_for(&self, brew: &Path) -> ConfigEdit {
        let line = format!(r#"eval "$({} shellenv)""#, brew.display());
        ConfigEdit::new(&self.file, &self.comment, &line).with_marker(Self::MARKER)
    }
}

/// A tool-bundled installer that wires the tool into the shell.
#[derive(Debug, Clone, Deserialize)]
pub struct ShellIntegration {
    pub package: PackageName,
    /// Script location relative to the package-service prefix.
    pub script: PathBuf,
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GpgAgentConfig {
    /// Config directory, relative to home.
    pub dir: PathBuf,
    /// Config file name inside `dir`.
    pub config: String,
    pub pinentry_program: String,
    pub directive: String,
    pub restart: ProcessCommand,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VersionManager {
    pub package: PackageName,
    pub edit: ConfigEdit,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProcessCommand {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl std::fmt::Display for ProcessCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

impl Manifest {
    /// Load the manifest compiled into the binary.
    pub fn embedded() -> Result<Self, AppError> {
        Self::parse(EMBEDDED_MANIFEST)
    }

    /// Parse and validate manifest content.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let manifest: Manifest = serde_yaml::from_str(content).map_err(|e| AppError::ParseError {
            what: "manifest.yml".into(),
            details: e.to_string(),
        })?;

        if manifest.cli_tools.is_empty() {
            return Err(AppError::ParseError {
                what: "manifest.yml".into(),
                details: "cli_tools must not be empty".into(),
            });
        }

        Ok(manifest)
    }

    pub fn cli_tool_specs(&self) -> Vec<PackageSpec> {
        self.cli_tools.iter().cloned().map(PackageSpec::formula).collect()
    }

    pub fn application_specs(&self) -> Vec<PackageSpec> {
        self.applications.iter().cloned().map(PackageSpec::cask).collect()
    }
}
