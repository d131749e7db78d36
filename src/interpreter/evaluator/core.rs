use std::collections::HashMap;

use log::{debug, trace};

use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{input::SuppliedInputs, watchdog::Watchdog},
        outcome::Outcome,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// What to do after a statement has been evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Flow {
    /// Go on with the next statement.
    Continue,
    /// Stop the whole program: the named input has not been supplied yet.
    Pause(String),
}

/// Stores the state of one evaluation.
///
/// A `Context` lives for exactly one call. It starts with an empty variable
/// store and an empty output log, borrows the host's supplied inputs and
/// watchdog for the duration of the call, and is consumed by [`Context::run`].
///
/// Evaluation is a pure function of the program and the values it consumes:
/// the output log is its only effect. Replaying the same program with the same
/// inputs therefore reproduces the same output, which is what lets a paused
/// program resume by running again from the top.
pub struct Context<'h> {
    /// Variable bindings made so far by assignments and input statements.
    pub variables:       HashMap<String, i64>,
    /// Everything printed so far, in order.
    pub output:          Vec<String>,
    pub(super) inputs:   &'h mut SuppliedInputs,
    pub(super) watchdog: &'h mut Watchdog,
}

impl<'h> Context<'h> {
    /// Creates a new evaluation context with an empty variable store.
    #[must_use]
    pub fn new(inputs: &'h mut SuppliedInputs, watchdog: &'h mut Watchdog) -> Self {
        Self { variables: HashMap::new(),
               output: Vec::new(),
               inputs,
               watchdog }
    }

    /// Evaluates a whole program and converts the result into an [`Outcome`].
    ///
    /// The watchdog is armed first, so its deadline and step budget cover
    /// this call only.
    ///
    /// # Example
    /// ```
    /// use alpha::{
    ///     interpreter::evaluator::{core::Context, input::SuppliedInputs, watchdog::Watchdog},
    ///     parse,
    /// };
    ///
    /// let program = parse("x = 6 * 7\n< x").unwrap();
    /// let mut inputs = SuppliedInputs::new();
    /// let mut watchdog = Watchdog::unbounded();
    ///
    /// let outcome = Context::new(&mut inputs, &mut watchdog).run(&program);
    /// assert_eq!(outcome.output(), ["42"]);
    /// ```
    pub fn run(mut self, program: &Program) -> Outcome {
        self.watchdog.arm();

        match self.eval_block(&program.statements) {
            Ok(Flow::Continue) => Outcome::Completed { output: self.output },
            Ok(Flow::Pause(needed)) => {
                debug!("paused waiting for '{needed}' after {} lines of output",
                       self.output.len());
                Outcome::Paused { needed,
                                  output: self.output }
            },
            Err(error) => Outcome::Failed { error:  error.into(),
                                            output: self.output, },
        }
    }

    /// Evaluates statements in order.
    ///
    /// The watchdog is consulted before each statement. A pause stops the
    /// sequence at once and is handed to the caller unchanged.
    pub fn eval_block(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        for statement in statements {
            self.watchdog.tick()?;
            if let Flow::Pause(name) = self.eval_statement(statement)? {
                return Ok(Flow::Pause(name));
            }
        }
        Ok(Flow::Continue)
    }

    /// Evaluates a single statement.
    ///
    /// Assignments and input statements bind variables, print statements
    /// append to the output, loops run their body.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Flow> {
        trace!("line {}: {statement:?}", statement.line_number());

        match statement {
            Statement::Assignment { name, value, .. } => {
                let value = self.eval(value)?;
                self.variables.insert(name.clone(), value);
                Ok(Flow::Continue)
            },
            Statement::Print { expr, .. } => {
                let value = self.eval(expr)?;
                self.output.push(value.to_string());
                Ok(Flow::Continue)
            },
            Statement::Input { name, line } => self.eval_input(name, *line),
            Statement::While { condition,
                               body,
                               line, } => self.eval_while(condition, body, *line),
        }
    }

    /// Evaluates an expression to an integer.
    ///
    /// # Errors
    /// - [`RuntimeError::UndefinedVariable`] when a name is read before it is
    ///   bound. There are no default values.
    /// - Any arithmetic error from [`Context::eval_binary`].
    ///
    /// # Example
    /// ```
    /// use alpha::{
    ///     ast::Expr,
    ///     error::RuntimeError,
    ///     interpreter::evaluator::{core::Context, input::SuppliedInputs, watchdog::Watchdog},
    /// };
    ///
    /// let mut inputs = SuppliedInputs::new();
    /// let mut watchdog = Watchdog::unbounded();
    /// let mut ctx = Context::new(&mut inputs, &mut watchdog);
    ///
    /// let expr = Expr::Variable { name: "z".into(),
    ///                             line: 3, };
    /// assert_eq!(ctx.eval(&expr),
    ///            Err(RuntimeError::UndefinedVariable { name: "z".into(),
    ///                                                  line: 3, }));
    ///
    /// ctx.variables.insert("z".into(), 9);
    /// assert_eq!(ctx.eval(&expr), Ok(9));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<i64> {
        match expr {
            Expr::Number { value, .. } => Ok(*value),
            Expr::Variable { name, line } => {
                self.variables
                    .get(name)
                    .copied()
                    .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone(),
                                                                     line: *line, })
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right, *line)
            },
        }
    }
}
