use crate::app::ProvisionContext;
use crate::app::provisioner::{Step, StepOutcome};
use crate::domain::PackageSpec;
use crate::ports::{HostPort, PackageService, PreferenceStore};

use super::shell;

/// One guarded install step per package, in list order.
pub(super) fn install_steps<P, S, H>(
    ctx: &ProvisionContext<P, S, H>,
    specs: Vec<PackageSpec>,
) -> Vec<Step<'_>>
where
    P: PackageService,
    S: PreferenceStore,
    H: HostPort,
{
    specs.into_iter().map(|spec| install_step(ctx, spec)).collect()
}

fn install_step<P, S, H>(ctx: &ProvisionContext<P, S, H>, spec: PackageSpec) -> Step<'_>
where
    P: PackageService,
    S: PreferenceStore,
    H: HostPort,
{
    let probe = spec.clone();
    Step::new(format!("Install {}", spec), move || {
        ctx.packages().install(&spec)?;
        Ok(StepOutcome::Completed)
    })
    .guarded_by(move || ctx.packages().is_present(&probe))
}

/// The version manager and its shell initialization line.
pub(super) fn version_manager_steps<P, S, H>(ctx: &ProvisionContext<P, S, H>) -> Vec<Step<'_>>
where
    P: PackageService,
    S: PreferenceStore,
    H: HostPort,
{
    let manager = &ctx.manifest().version_manager;
    vec![
        install_step(ctx, PackageSpec::formula(manager.package.clone())),
        shell::edit_step(ctx, &manager.edit),
    ]
}
