pub mod config_edit;
pub mod environment;
pub mod error;
pub mod manifest;
pub mod package;
pub mod preference;

pub use config_edit::ConfigEdit;
pub use environment::Environment;
pub use error::AppError;
pub use manifest::{Manifest, ProcessCommand};
pub use package::{PackageKind, PackageName, PackageSpec};
pub use preference::{Preference, PreferenceValue};
