pub(crate) mod command;
pub mod config_file;
pub mod defaults_store;
pub mod homebrew;
pub mod host_command;
pub mod installer_download;

pub use defaults_store::DefaultsPreferenceStore;
pub use homebrew::HomebrewPackageService;
pub use host_command::CommandHost;
