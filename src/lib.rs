//! # alpha
//!
//! alpha is a minimal imperative scripting language with integer variables,
//! arithmetic, `while` loops and explicit print (`<`) and input (`>`)
//! statements.
//!
//! A program that reaches an input statement with no value available does not
//! block: the call returns [`Outcome::Paused`] naming the variable it needs.
//! The host supplies the value and calls again, and the program is replayed
//! from its first statement. Evaluation is deterministic and its only effect is
//! the output log, so the replay reaches the same point with the same output
//! and carries on. No state survives between calls apart from the supplied
//! values the host keeps.
//!
//! ```
//! use alpha::{Outcome, SuppliedInputs, run};
//!
//! let source = "> n\n< n * 2";
//! let mut inputs = SuppliedInputs::new();
//! assert_eq!(run(source, &mut inputs).needed_input(), Some("n"));
//!
//! inputs.supply("n", "21");
//! assert_eq!(run(source, &mut inputs),
//!            Outcome::Completed { output: vec!["42".to_string()] });
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines a closed set of statement and expression kinds.
/// - Attaches source lines to AST nodes for error reporting.
/// - Pretty-prints programs for inspection.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can end a call. It standardizes error
/// reporting and carries the source line of every failure.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Classifies errors into coarse kinds for hosts.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and the outcome of a
/// call.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser and evaluator.
/// - Implements the pause protocol and the cooperative watchdog.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Host-side replay journal.
///
/// Keeps the values supplied over several round trips so a program can be
/// replayed until it completes.
pub mod session;
/// General integer utilities.
///
/// Floor division and lenient integer parsing used by the evaluator.
pub mod util;

pub use error::{Error, ErrorKind};
pub use interpreter::{
    evaluator::{input::SuppliedInputs, watchdog::Watchdog},
    outcome::Outcome,
};
pub use session::Session;

use crate::{
    ast::Program,
    interpreter::{evaluator::core::Context, lexer::Token, parser::core::parse_tokens},
};

/// Tokenizes `source`.
///
/// See [`interpreter::lexer::tokenize`].
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, Error> {
    Ok(interpreter::lexer::tokenize(source)?)
}

/// Tokenizes and parses `source` into a [`Program`].
///
/// # Errors
/// Returns the first lexing or parsing error.
///
/// # Examples
/// ```
/// use alpha::{ErrorKind, parse};
///
/// let program = parse("i = 0\nwhile i != 3\ni = i + 1\nend").unwrap();
/// assert_eq!(program.statements.len(), 2);
///
/// let err = parse("while i != 3\ni = i + 1").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Parse);
/// ```
pub fn parse(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source)?;
    Ok(parse_tokens(&tokens)?)
}

/// Runs `source` once, consuming from `inputs`, under the limits of
/// `watchdog`.
///
/// The source is lexed and parsed from scratch and evaluated from its first
/// statement against an empty variable store. Supplied values are consumed
/// as input statements use them, so whatever is left in `inputs` afterwards
/// was not needed.
///
/// The call ends in one of three ways:
/// - [`Outcome::Completed`] with the whole output.
/// - [`Outcome::Paused`] when an input statement has no value; supply it and
///   call again with the same source.
/// - [`Outcome::Failed`] with the error and the output printed before it.
///
/// # Examples
/// ```
/// use alpha::{ErrorKind, Outcome, SuppliedInputs, Watchdog, execute};
///
/// let mut watchdog = Watchdog::unbounded();
///
/// let outcome = execute("i = 0\nwhile i != 3\n< i\ni = i + 1\nend",
///                       &mut SuppliedInputs::new(),
///                       &mut watchdog);
/// assert_eq!(outcome.output(), ["0", "1", "2"]);
///
/// let outcome = execute("< 1\nx = 1 / 0", &mut SuppliedInputs::new(), &mut watchdog);
/// let error = outcome.error().unwrap();
/// assert_eq!(error.kind(), ErrorKind::Runtime);
/// assert!(error.to_string().contains("division by zero"));
/// assert_eq!(outcome.output(), ["1"]);
/// ```
pub fn execute(source: &str, inputs: &mut SuppliedInputs, watchdog: &mut Watchdog) -> Outcome {
    match parse(source) {
        Ok(program) => Context::new(inputs, watchdog).run(&program),
        Err(error) => Outcome::Failed { error,
                                        output: Vec::new() },
    }
}

/// Runs `source` once without any limits.
///
/// Equivalent to [`execute`] with [`Watchdog::unbounded`]. Only use it for
/// trusted programs: a loop that never ends will never return.
pub fn run(source: &str, inputs: &mut SuppliedInputs) -> Outcome {
    execute(source, inputs, &mut Watchdog::unbounded())
}
