use crate::app::ProvisionContext;
use crate::app::provisioner::{Step, StepOutcome};
use crate::domain::{AppError, ConfigEdit};
use crate::ports::{HostPort, PackageService, PreferenceStore};
use crate::services::config_file;

/// Run the tool-bundled shell integration installer, if it shipped one.
pub(super) fn integration_step<P, S, H>(ctx: &ProvisionContext<P, S, H>) -> Step<'_>
where
    P: PackageService,
    S: PreferenceStore,
    H: HostPort,
{
    let integration = &ctx.manifest().shell_integration;
    Step::new(format!("Install {} shell integration", integration.package), move || {
        let script = ctx.packages().prefix()?.join(&integration.script);
        if !script.is_file() {
            return Ok(StepOutcome::Skipped(format!(
                "integration installer not found at {}",
                script.display()
            )));
        }
        ctx.host().run_script(&script, &integration.args)?;
        Ok(StepOutcome::Completed)
    })
}

/// Append `edit` to its startup file unless already present.
pub(super) fn edit_step<'a, P, S, H>(
    ctx: &'a ProvisionContext<P, S, H>,
    edit: &'a ConfigEdit,
) -> Step<'a>
where
    P: PackageService,
    S: PreferenceStore,
    H: HostPort,
{
    Step::new(format!("Configure {}: {}", edit.file.display(), edit.comment), move || {
        apply(ctx, edit)
    })
    .guarded_by(move || config_file::is_applied(ctx.env(), edit))
}

fn apply<P, S, H>(
    ctx: &ProvisionContext<P, S, H>,
    edit: &ConfigEdit,
) -> Result<StepOutcome, AppError>
where
    P: PackageService,
    S: PreferenceStore,
    H: HostPort,
{
    if config_file::ensure_edit(ctx.env(), edit)? {
        Ok(StepOutcome::Completed)
    } else {
        Ok(StepOutcome::AlreadySatisfied)
    }
}
