use std::io;

use thiserror::Error;

/// Library-wide error type for wsboot operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Package name is not something the package service would accept.
    #[error(
        "Invalid package name '{0}': must be alphanumeric with hyphens, underscores, periods, '@', '+', or tap slashes"
    )]
    InvalidPackageName(String),

    /// External tool could not be spawned or exited unsuccessfully.
    #[error("{tool} failed: {error}")]
    ExternalToolError { tool: String, error: String },

    /// Network fetch failed.
    #[error("Failed to download {url}: {details}")]
    Download { url: String, details: String },

    /// The package service binary could not be located.
    #[error("Package service (brew) not found on PATH or in known prefixes")]
    PackageServiceUnavailable,

    /// A fatal step failed and the run was aborted.
    #[error("Step '{step}' failed: {source}")]
    StepFailed {
        step: String,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn external<T: Into<String>, E: ToString>(tool: T, error: E) -> Self {
        AppError::ExternalToolError { tool: tool.into(), error: error.to_string() }
    }

    /// Closest `io::ErrorKind` for this error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::ParseError { .. }
            | AppError::InvalidPackageName(_) => io::ErrorKind::InvalidInput,
            AppError::PackageServiceUnavailable => io::ErrorKind::NotFound,
            AppError::StepFailed { source, .. } => source.kind(),
            AppError::ExternalToolError { .. } | AppError::Download { .. } => {
                io::ErrorKind::Other
            }
        }
    }
}
