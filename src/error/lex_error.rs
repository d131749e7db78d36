use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while tokenizing source text.
pub enum LexError {
    /// A character that starts no token. This includes a `!` that is not
    /// followed by `=`.
    #[error("Error on line {line}, column {column}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
        /// The 1-based column of the character within its line.
        column:    usize,
    },
    /// A numeric literal too large to be represented as an `i64`.
    #[error("Error on line {line}: Literal {literal} is too large.")]
    LiteralTooLarge {
        /// The digits of the literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl LexError {
    /// Returns the line the error was found on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. } | Self::LiteralTooLarge { line, .. } => *line,
        }
    }
}
