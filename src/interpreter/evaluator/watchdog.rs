use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::{Duration, Instant},
};

use log::warn;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Cooperative limits on one evaluation.
///
/// The evaluator calls [`Watchdog::tick`] before every statement and before
/// every loop iteration. A tick fails once the call has run past its
/// deadline, used up its step budget, or been cancelled through the shared
/// flag. Nothing is ever killed: the evaluator stops at the next check and
/// returns the error like any other runtime failure.
///
/// Limits are configured once and re-armed at the start of every call, so the
/// same watchdog can be reused across the replays of a session.
///
/// # Example
/// ```
/// use std::time::Duration;
///
/// use alpha::{Outcome, SuppliedInputs, Watchdog, error::ErrorKind, execute};
///
/// let mut watchdog = Watchdog::unbounded().with_timeout(Duration::from_secs(5))
///                                         .with_max_steps(1_000);
///
/// let outcome = execute("x = 0\nwhile x == 0\nend",
///                       &mut SuppliedInputs::new(),
///                       &mut watchdog);
/// match outcome {
///     Outcome::Failed { error, .. } => assert_eq!(error.kind(), ErrorKind::Interrupted),
///     other => panic!("expected the step budget to trip, got {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Watchdog {
    timeout:   Option<Duration>,
    max_steps: Option<u64>,
    cancel:    Option<Arc<AtomicBool>>,
    deadline:  Option<Instant>,
    steps:     u64,
}

impl Watchdog {
    /// A watchdog that never trips.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Limits each call to `timeout` of wall-clock time.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Limits each call to `max_steps` checks (statements plus loop
    /// iterations).
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Stops the call as soon as `flag` is set to `true`, from any thread.
    #[must_use]
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Number of checks performed since the last [`Watchdog::arm`].
    #[must_use]
    pub const fn steps(&self) -> u64 {
        self.steps
    }

    /// Resets the step count and starts the clock for a new call.
    pub fn arm(&mut self) {
        self.steps = 0;
        self.deadline = self.timeout.map(|timeout| Instant::now() + timeout);
    }

    /// Counts one step and checks every limit.
    ///
    /// # Errors
    /// - [`RuntimeError::Cancelled`] if the cancel flag is set.
    /// - [`RuntimeError::StepLimitExceeded`] once the step budget is spent.
    /// - [`RuntimeError::TimedOut`] once the deadline has passed.
    pub fn tick(&mut self) -> EvalResult<()> {
        self.steps += 1;

        if let Some(flag) = &self.cancel
           && flag.load(Ordering::Relaxed)
        {
            warn!("evaluation cancelled after {} steps", self.steps);
            return Err(RuntimeError::Cancelled);
        }

        if let Some(limit) = self.max_steps
           && self.steps > limit
        {
            warn!("evaluation exceeded its budget of {limit} steps");
            return Err(RuntimeError::StepLimitExceeded { limit });
        }

        if let (Some(deadline), Some(limit)) = (self.deadline, self.timeout)
           && Instant::now() >= deadline
        {
            warn!("evaluation timed out after {} steps", self.steps);
            return Err(RuntimeError::TimedOut { limit });
        }

        Ok(())
    }
}
