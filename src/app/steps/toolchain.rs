use std::thread;
use std::time::Duration;

use crate::app::ProvisionContext;
use crate::app::provisioner::{Step, StepOutcome};
use crate::domain::AppError;
use crate::ports::{HostPort, PackageService, PreferenceStore};

pub(super) fn steps<P, S, H>(ctx: &ProvisionContext<P, S, H>) -> Vec<Step<'_>>
where
    P: PackageService,
    S: PreferenceStore,
    H: HostPort,
{
    vec![
        Step::new("Install developer toolchain", move || install(ctx))
            .guarded_by(move || Ok(ctx.host().toolchain_installed())),
    ]
}

fn install<P, S, H>(ctx: &ProvisionContext<P, S, H>) -> Result<StepOutcome, AppError>
where
    P: PackageService,
    S: PreferenceStore,
    H: HostPort,
{
    ctx.host().request_toolchain_install()?;
    wait_until_installed(ctx.host(), ctx.poll_interval());
    Ok(StepOutcome::Completed)
}

/// Block until the asynchronous installer finishes. No timeout.
///
/// Returns the number of waits taken.
fn wait_until_installed<H: HostPort>(host: &H, interval: Duration) -> u64 {
    let mut waits = 0;
    while !host.toolchain_installed() {
        if waits == 0 {
            println!("⏳ Waiting for the developer toolchain installer to finish...");
        }
        waits += 1;
        thread::sleep(interval);
    }
    waits
}
