/// Lexing errors.
///
/// Defines the errors raised while scanning source text into tokens: characters
/// the language does not know and numeric literals that do not fit in an `i64`.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// the token stream. Parse errors include unexpected tokens, illegal loop
/// conditions and loops that are never closed.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include reads of unbound variables, division by zero, overflow,
/// malformed supplied input and interruptions raised by the watchdog.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// Any error that ends a call to [`crate::execute`].
///
/// Every phase of the pipeline has its own error type; this enum unifies them
/// so that a host only has to deal with one type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The source text could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token stream did not match the grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed or was interrupted.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unexpected character or oversized literal.
    Lex,
    /// Grammar violation.
    Parse,
    /// Unbound variable, division by zero, overflow or unparsable input.
    Runtime,
    /// The watchdog stopped the evaluation.
    Interrupted,
}

impl Error {
    /// Classifies the error.
    ///
    /// ## Example
    /// ```
    /// use alpha::error::{Error, ErrorKind, RuntimeError};
    ///
    /// let err = Error::from(RuntimeError::DivisionByZero { line: 1 });
    /// assert_eq!(err.kind(), ErrorKind::Runtime);
    ///
    /// let err = Error::from(RuntimeError::Cancelled);
    /// assert_eq!(err.kind(), ErrorKind::Interrupted);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(_) => ErrorKind::Lex,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Runtime(e) if e.is_interruption() => ErrorKind::Interrupted,
            Self::Runtime(_) => ErrorKind::Runtime,
        }
    }
}
