use crate::app::ProvisionContext;
use crate::app::provisioner::{Step, StepOutcome};
use crate::ports::{HostPort, PackageService, PreferenceStore};

/// Manual follow-ups the operator has to do interactively.
pub(super) fn step<P, S, H>(ctx: &ProvisionContext<P, S, H>) -> Step<'_>
where
    P: PackageService,
    S: PreferenceStore,
    H: HostPort,
{
    Step::new("Show follow-up reminders", move || {
        for reminder in &ctx.manifest().reminders {
            println!("👉 {}", reminder);
        }
        Ok(StepOutcome::Completed)
    })
}
