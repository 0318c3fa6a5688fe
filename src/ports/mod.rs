mod host;
mod package_service;
mod preference_store;

pub use host::HostPort;
pub use package_service::PackageService;
pub use preference_store::PreferenceStore;
