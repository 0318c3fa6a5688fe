//! CLI Adapter.

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "wsboot")]
#[command(version)]
#[command(
    about = "Bootstrap this workstation: toolchain, Homebrew, CLI tools, apps, shell and desktop settings",
    long_about = "Runs a fixed, ordered list of idempotent steps. Steps whose state is already \
                  in place are skipped; the first failing step aborts the run. Re-running is safe."
)]
struct Cli {}

/// Entry point for the CLI.
pub fn run() {
    let Cli {} = Cli::parse();
    init_tracing();

    match crate::provision() {
        Ok(report) => {
            println!(
                "✅ Workstation bootstrap complete ({} steps, {} changed)",
                report.steps.len(),
                report.completed()
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
