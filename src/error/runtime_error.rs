use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that was never bound.
    #[error("Error on line {line}: '{name}' not defined.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    #[error("Error on line {line}: division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    #[error("Error on line {line}: Integer overflow while trying to compute result.")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A supplied value could not be read as an integer.
    #[error("Error on line {line}: Invalid input for '{name}': '{value}' is not an integer.")]
    InvalidInput {
        /// The variable the value was supplied for.
        name:  String,
        /// The raw value as supplied.
        value: String,
        /// The source line of the input statement.
        line:  usize,
    },
    /// The wall-clock deadline passed.
    #[error("Execution timed out ({}s).", .limit.as_secs_f64())]
    TimedOut {
        /// The configured time limit.
        limit: Duration,
    },
    /// The step budget ran out.
    #[error("Execution exceeded the limit of {limit} steps.")]
    StepLimitExceeded {
        /// The configured number of steps.
        limit: u64,
    },
    /// The host raised the cancellation flag.
    #[error("Execution was cancelled.")]
    Cancelled,
}

impl RuntimeError {
    /// Returns `true` for errors raised by the watchdog rather than by the
    /// program itself.
    #[must_use]
    pub const fn is_interruption(&self) -> bool {
        matches!(self,
                 Self::TimedOut { .. } | Self::StepLimitExceeded { .. } | Self::Cancelled)
    }
}
