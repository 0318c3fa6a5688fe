use std::fs;
use std::path::PathBuf;

use crate::app::ProvisionContext;
use crate::app::provisioner::{Step, StepOutcome};
use crate::domain::environment::is_executable;
use crate::domain::{AppError, ConfigEdit};
use crate::ports::{HostPort, PackageService, PreferenceStore};
use crate::services::config_file::{self, PRIVATE_DIR_MODE, PRIVATE_FILE_MODE};

pub(super) fn steps<P, S, H>(ctx: &ProvisionContext<P, S, H>) -> Vec<Step<'_>>
where
    P: PackageService,
    S: PreferenceStore,
    H: HostPort,
{
    let gpg = &ctx.manifest().gpg_agent;
    let dir = ctx.env().home_path(&gpg.dir);
    let probe = dir.clone();

    vec![
        Step::new("Create gpg-agent config directory", move || {
            fs::create_dir_all(&dir)?;
            Ok(StepOutcome::Completed)
        })
        .guarded_by(move || Ok(probe.is_dir())),
        Step::new("Configure pinentry program", move || configure_pinentry(ctx)),
        Step::new("Restrict gpg-agent config permissions", move || restrict_permissions(ctx)),
        Step::new("Restart gpg-agent", move || {
            ctx.host().run(&gpg.restart)?;
            Ok(StepOutcome::Completed)
        })
        .non_fatal(),
    ]
}

fn configure_pinentry<P, S, H>(ctx: &ProvisionContext<P, S, H>) -> Result<StepOutcome, AppError>
where
    P: PackageService,
    S: PreferenceStore,
    H: HostPort,
{
    let gpg = &ctx.manifest().gpg_agent;
    let Some(helper) = find_helper(ctx)? else {
        return Ok(StepOutcome::Skipped(format!(
            "{} not found on PATH or in the package service bin directory",
            gpg.pinentry_program
        )));
    };

    let directive = format!("{} {}", gpg.directive, helper.display());
    let edit = ConfigEdit::new(
        gpg.dir.join(&gpg.config),
        &format!("Use {} for passphrase prompts", gpg.pinentry_program),
        &directive,
    )
    .with_marker(&gpg.directive);

    if config_file::ensure_edit(ctx.env(), &edit)? {
        Ok(StepOutcome::Completed)
    } else {
        Ok(StepOutcome::AlreadySatisfied)
    }
}

/// Search path first, then `<prefix>/bin`: a service installed during this
/// run is not on the search path captured at startup.
fn find_helper<P, S, H>(ctx: &ProvisionContext<P, S, H>) -> Result<Option<PathBuf>, AppError>
where
    P: PackageService,
    S: PreferenceStore,
    H: HostPort,
{
    let program = &ctx.manifest().gpg_agent.pinentry_program;
    if let Some(helper) = ctx.env().find_executable(program) {
        return Ok(Some(helper));
    }
    if !ctx.packages().is_available() {
        return Ok(None);
    }
    let candidate = ctx.packages().prefix()?.join("bin").join(program);
    Ok(is_executable(&candidate).then_some(candidate))
}

/// Always reapplied. The file mode is only set when the file exists.
fn restrict_permissions<P, S, H>(ctx: &ProvisionContext<P, S, H>) -> Result<StepOutcome, AppError>
where
    P: PackageService,
    S: PreferenceStore,
    H: HostPort,
{
    let gpg = &ctx.manifest().gpg_agent;
    let dir = ctx.env().home_path(&gpg.dir);
    let config = dir.join(&gpg.config);

    config_file::set_mode(&dir, PRIVATE_DIR_MODE)?;
    if !config.is_file() {
        return Ok(StepOutcome::Skipped(format!(
            "{} does not exist; only the directory was restricted",
            config.display()
        )));
    }
    config_file::set_mode(&config, PRIVATE_FILE_MODE)?;
    Ok(StepOutcome::Completed)
}
