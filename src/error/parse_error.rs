use thiserror::Error;

use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token of the wrong kind.
    #[error("Error on line {line}: Expected {expected}, got {found}.")]
    UnexpectedToken {
        /// What the grammar allowed at this point, e.g. `IDENT` or
        /// `NUMBER or IDENT`.
        expected: String,
        /// The kind of the token actually found.
        found:    TokenKind,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A loop condition used something other than `==` or `!=`.
    #[error("Error on line {line}: Only == and != are allowed in a while condition, got {found}.")]
    InvalidCondition {
        /// The kind of the token found in operator position.
        found: TokenKind,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Input ended before the `end` closing a `while`.
    #[error("Error on line {line}: Unterminated while loop, expected END before end of input.")]
    UnterminatedLoop {
        /// The line of the `while` keyword that was never closed.
        line: usize,
    },
    /// Loops nest, or an expression chains operators, past
    /// [`MAX_DEPTH`](crate::interpreter::parser::core::MAX_DEPTH).
    #[error("Error on line {line}: Program is nested too deeply (limit {limit}).")]
    TooDeep {
        /// The line of the `while` or operator that went over the limit.
        line:  usize,
        /// The limit that was exceeded.
        limit: usize,
    },
}

impl ParseError {
    /// Returns the line the error was found on.
    ///
    /// ## Example
    /// ```
    /// use alpha::error::ParseError;
    ///
    /// let err = ParseError::UnterminatedLoop { line: 4 };
    /// assert_eq!(err.line(), 4);
    /// ```
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::InvalidCondition { line, .. }
            | Self::UnterminatedLoop { line }
            | Self::TooDeep { line, .. } => *line,
        }
    }
}
