pub mod cli;
mod context;
pub mod provisioner;
pub mod steps;

pub use context::ProvisionContext;
pub use provisioner::{Provisioner, RunReport, Step, StepOutcome, StepRecord};
