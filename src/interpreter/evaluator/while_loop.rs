use log::trace;

use crate::{
    ast::{Condition, Statement},
    interpreter::evaluator::core::{Context, EvalResult, Flow},
};

impl Context<'_> {
    /// Evaluates a `while` loop.
    ///
    /// The condition is evaluated against the current variables before every
    /// iteration, and the body runs in order while it holds. The watchdog is
    /// consulted once per iteration on top of the per-statement checks, so a
    /// loop with an empty body can still be stopped.
    ///
    /// If a body statement pauses, the rest of the iteration and every later
    /// iteration are abandoned and the pause is returned unchanged. The next
    /// replay regenerates them once the missing value is supplied.
    ///
    /// # Parameters
    /// - `condition`: Loop test.
    /// - `body`: Statements of one iteration.
    /// - `line`: Line of the `while` keyword, for tracing.
    ///
    /// # Example
    /// ```
    /// use alpha::{Outcome, SuppliedInputs, run};
    ///
    /// let source = "i = 0\nwhile i != 2\n> x\n< x\ni = i + 1\nend";
    /// let mut inputs = SuppliedInputs::new();
    /// inputs.supply("x", "5");
    ///
    /// match run(source, &mut inputs) {
    ///     Outcome::Paused { needed, output } => {
    ///         assert_eq!(needed, "x");
    ///         assert_eq!(output, ["5"]);
    ///     },
    ///     other => panic!("expected a pause, got {other:?}"),
    /// }
    /// ```
    pub fn eval_while(&mut self,
                      condition: &Condition,
                      body: &[Statement],
                      line: usize)
                      -> EvalResult<Flow> {
        let mut iteration = 0_u64;

        loop {
            self.watchdog.tick()?;
            if !self.eval_condition(condition)? {
                break;
            }

            iteration += 1;
            trace!("line {line}: iteration {iteration}");

            if let Flow::Pause(name) = self.eval_block(body)? {
                return Ok(Flow::Pause(name));
            }
        }

        Ok(Flow::Continue)
    }
}
