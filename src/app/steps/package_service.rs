use crate::app::ProvisionContext;
use crate::app::provisioner::{Step, StepOutcome};
use crate::domain::AppError;
use crate::ports::{HostPort, PackageService, PreferenceStore};
use crate::services::config_file;

pub(super) fn steps<P, S, H>(ctx: &ProvisionContext<P, S, H>) -> Vec<Step<'_>>
where
    P: PackageService,
    S: PreferenceStore,
    H: HostPort,
{
    let registration = &ctx.manifest().package_service.registration;
    vec![
        Step::new("Install package service", move || {
            ctx.packages().install_self()?;
            Ok(StepOutcome::Completed)
        })
        .guarded_by(move || Ok(ctx.packages().is_available())),
        Step::new(format!("Register package service in {}", registration.file.display()), move || {
            register(ctx)
        })
        .guarded_by(move || is_registered(ctx)),
        Step::new("Refresh package catalog", move || {
            ctx.packages().update()?;
            Ok(StepOutcome::Completed)
        }),
        Step::new("Upgrade installed packages", move || {
            ctx.packages().upgrade()?;
            Ok(StepOutcome::Completed)
        }),
    ]
}

/// A binary already on the search path needs no login-shell registration.
fn is_registered<P, S, H>(ctx: &ProvisionContext<P, S, H>) -> Result<bool, AppError>
where
    P: PackageService,
    S: PreferenceStore,
    H: HostPort,
{
    let brew = ctx.packages().locate()?;
    let on_search_path =
        brew.file_name().and_then(|name| ctx.env().find_executable(name)).is_some();
    if on_search_path {
        return Ok(true);
    }
    let registration = ctx.manifest().package_service.registration.edit_for(&brew);
    config_file::is_applied(ctx.env(), &registration)
}

fn register<P, S, H>(ctx: &ProvisionContext<P, S, H>) -> Result<StepOutcome, AppError>
where
    P: PackageService,
    S: PreferenceStore,
    H: HostPort,
{
    let brew = ctx.packages().locate()?;
    let registration = ctx.manifest().package_service.registration.edit_for(&brew);
    if config_file::ensure_edit(ctx.env(), &registration)? {
        println!("📝 Registered {} in ~/{}", brew.display(), registration.file.display());
        Ok(StepOutcome::Completed)
    } else {
        Ok(StepOutcome::AlreadySatisfied)
    }
}
