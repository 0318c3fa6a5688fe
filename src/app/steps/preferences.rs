use crate::app::ProvisionContext;
use crate::app::provisioner::{Step, StepOutcome};
use crate::domain::Preference;
use crate::ports::{HostPort, PackageService, PreferenceStore};

pub(super) fn steps<P, S, H>(ctx: &ProvisionContext<P, S, H>) -> Vec<Step<'_>>
where
    P: PackageService,
    S: PreferenceStore,
    H: HostPort,
{
    let manifest = ctx.manifest();
    let mut steps: Vec<Step<'_>> =
        manifest.preferences.iter().map(|preference| preference_step(ctx, preference)).collect();

    steps.push(
        Step::new("Restart Finder", move || {
            ctx.host().run(&manifest.file_manager_restart)?;
            Ok(StepOutcome::Completed)
        })
        .non_fatal(),
    );
    steps
}

fn preference_step<'a, P, S, H>(
    ctx: &'a ProvisionContext<P, S, H>,
    preference: &'a Preference,
) -> Step<'a>
where
    P: PackageService,
    S: PreferenceStore,
    H: HostPort,
{
    Step::new(format!("Set {} {}", preference.domain, preference.key), move || {
        ctx.preferences().write(preference)?;
        Ok(StepOutcome::Completed)
    })
    .guarded_by(move || {
        let current = ctx.preferences().read(preference)?;
        Ok(current.is_some_and(|raw| preference.value.matches(&raw)))
    })
}
