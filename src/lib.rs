//! wsboot: idempotent, fail-fast bootstrap of a single-user macOS workstation.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;


use app::{ProvisionContext, Provisioner, steps};
use services::{CommandHost, DefaultsPreferenceStore, HomebrewPackageService};

pub use app::{RunReport, StepOutcome, StepRecord};
pub use domain::AppError;

/// Provision this machine.
///
/// Reads `HOME` and `PATH`, loads the embedded manifest, and runs every step
/// in order against Homebrew, `defaults`, and the host. Stops at the first
/// fatal step; everything already applied stays applied.
pub fn provision() -> Result<RunReport, AppError> {
    let env = domain::Environment::from_process()?;
    let manifest = domain::Manifest::embedded()?;

    let packages = HomebrewPackageService::new(
        env.clone(),
        manifest.package_service.installer_url.clone(),
        manifest.package_service.binary_candidates.clone(),
    );
    let ctx = ProvisionContext::new(
        env,
        manifest,
        packages,
        DefaultsPreferenceStore::new(),
        CommandHost::new(),
    );

    Provisioner::new().run(steps::plan(&ctx))
}
