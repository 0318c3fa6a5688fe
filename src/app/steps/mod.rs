//! The fixed provisioning sequence.

mod gpg_agent;
mod package_service;
mod packages;
mod preferences;
mod reminders;
mod shell;
mod toolchain;

use super::ProvisionContext;
use super::provisioner::Step;
use crate::ports::{HostPort, PackageService, PreferenceStore};

/// Build every step in execution order.
pub fn plan<P, S, H>(ctx: &ProvisionContext<P, S, H>) -> Vec<Step<'_>>
where
    P: PackageService,
    S: PreferenceStore,
    H: HostPort,
{
    let manifest = ctx.manifest();
    let mut steps = Vec::new();

    steps.extend(toolchain::steps(ctx));
    steps.extend(package_service::steps(ctx));
    steps.extend(packages::install_steps(ctx, manifest.cli_tool_specs()));
    steps.push(shell::integration_step(ctx));
    steps.extend(manifest.shell_edits.iter().map(|edit| shell::edit_step(ctx, edit)));
    steps.extend(gpg_agent::steps(ctx));
    steps.extend(packages::version_manager_steps(ctx));
    steps.extend(packages::install_steps(ctx, manifest.application_specs()));
    steps.extend(preferences::steps(ctx));
    steps.push(reminders::step(ctx));

    steps
}
