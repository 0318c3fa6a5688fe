//! Ordered, idempotent, fail-fast step execution.
//!
//! A [`Step`] pairs an optional idempotency check with an action. The
//! [`Provisioner`] walks steps strictly in order: a satisfied check skips the
//! action, a fatal failure aborts the run before any later step starts.

use tracing::warn;

use crate::domain::AppError;

type Check<'a> = Box<dyn Fn() -> Result<bool, AppError> + 'a>;
type Action<'a> = Box<dyn Fn() -> Result<StepOutcome, AppError> + 'a>;

/// How a single step ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The state already held; nothing was changed.
    AlreadySatisfied,
    /// The action ran and succeeded.
    Completed,
    /// A prerequisite was missing; the step did nothing.
    Skipped(String),
    /// A non-fatal action failed and the run continued.
    Tolerated(String),
}

/// One named unit of provisioning work.
pub struct Step<'a> {
    name: String,
    check: Option<Check<'a>>,
    action: Action<'a>,
    fatal: bool,
}

impl<'a> Step<'a> {
    /// A fatal step with no idempotency check.
    pub fn new(
        name: impl Into<String>,
        action: impl Fn() -> Result<StepOutcome, AppError> + 'a,
    ) -> Self {
        Self { name: name.into(), check: None, action: Box::new(action), fatal: true }
    }

    /// Skip the action whenever `check` reports the state is already in place.
    pub fn guarded_by(mut self, check: impl Fn() -> Result<bool, AppError> + 'a) -> Self {
        self.check = Some(Box::new(check));
        self
    }

    /// Failures are logged and the run continues.
    pub fn non_fatal(mut self) -> Self {
        self.fatal = false;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_fatal(&self) -> bool {
        self.fatal
    }

    fn execute(&self) -> Result<StepOutcome, AppError> {
        if let Some(check) = &self.check {
            if check()? {
                return Ok(StepOutcome::AlreadySatisfied);
            }
        }
        (self.action)()
    }
}

impl std::fmt::Debug for Step<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Step")
            .field("name", &self.name)
            .field("guarded", &self.check.is_some())
            .field("fatal", &self.fatal)
            .finish()
    }
}

/// Outcome of one executed step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub name: String,
    pub outcome: StepOutcome,
}

/// Outcomes of a fully completed run, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub steps: Vec<StepRecord>,
}

impl RunReport {
    pub fn outcome(&self, name: &str) -> Option<&StepOutcome> {
        self.steps.iter().find(|record| record.name == name).map(|record| &record.outcome)
    }

    /// Number of steps whose action changed something.
    pub fn completed(&self) -> usize {
        self.steps.iter().filter(|record| record.outcome == StepOutcome::Completed).count()
    }
}

/// Runs steps in order and stops at the first fatal failure.
#[derive(Debug, Default)]
pub struct Provisioner;

impl Provisioner {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self, steps: Vec<Step<'_>>) -> Result<RunReport, AppError> {
        let mut report = RunReport::default();

        for step in steps {
            println!("==> {}", step.name());

            let outcome = match step.execute() {
                Ok(outcome) => outcome,
                Err(err) if step.is_fatal() => {
                    println!("❌ {}: failed", step.name());
                    return Err(AppError::StepFailed {
                        step: step.name().to_string(),
                        source: Box::new(err),
                    });
                }
                Err(err) => StepOutcome::Tolerated(err.to_string()),
            };

            match &outcome {
                StepOutcome::AlreadySatisfied => {
                    println!("✅ {}: already satisfied, skipping", step.name());
                }
                StepOutcome::Completed => println!("✅ {}: done", step.name()),
                StepOutcome::Skipped(reason) => {
                    warn!(step = step.name(), "{}", reason);
                    println!("⚠️  {}: skipped ({})", step.name(), reason);
                }
                StepOutcome::Tolerated(reason) => {
                    warn!(step = step.name(), "{}", reason);
                    println!("⚠️  {}: failed, continuing ({})", step.name(), reason);
                }
            }

            report.steps.push(StepRecord { name: step.name().to_string(), outcome });
        }

        Ok(report)
    }
}
