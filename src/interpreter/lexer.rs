use std::fmt;

use log::{trace, warn};
use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42` or `007`. There is no sign; `-` is
    /// always an operator.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// `while`
    #[token("while")]
    While,
    /// `end`
    #[token("end")]
    End,
    /// Identifier tokens; variable names such as `x`, `total2` or `größe`.
    /// A letter from any script, followed by letters and numeric characters.
    #[regex(r"\p{L}[\p{L}\p{N}]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Assign,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`, the print sigil.
    #[token("<")]
    Print,
    /// `>`, the input sigil.
    #[token(">")]
    Input,
    /// End of input. Produced by `;`, which stops the scan, and appended by
    /// [`tokenize`] when the source runs out.
    #[token(";")]
    Eof,

    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Any other Unicode whitespace, including no-break spaces.
    #[regex(r"[\p{White_Space}\x1C-\x1F&&[^\n]]+", logos::skip)]
    Ignored,
}

/// The kind of a [`Token`], without its payload.
///
/// Used wherever the parser has to name what it expected or found.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// An integer literal.
    Number,
    /// A variable name.
    Ident,
    /// `while`
    While,
    /// `end`
    End,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `=`
    Assign,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Print,
    /// `>`
    Input,
    /// `;` or the end of the source.
    Eof,
}

impl Token {
    /// Returns the kind of the token.
    ///
    /// ## Example
    /// ```
    /// use alpha::interpreter::lexer::{Token, TokenKind};
    ///
    /// assert_eq!(Token::Number(3).kind(), TokenKind::Number);
    /// assert_eq!(Token::Identifier("x".into()).kind(), TokenKind::Ident);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Number(_) => TokenKind::Number,
            Self::Identifier(_) => TokenKind::Ident,
            Self::While => TokenKind::While,
            Self::End => TokenKind::End,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Mul,
            Self::Slash => TokenKind::Div,
            Self::Assign => TokenKind::Assign,
            Self::EqualEqual => TokenKind::Eq,
            Self::BangEqual => TokenKind::Ne,
            Self::Print => TokenKind::Print,
            Self::Input => TokenKind::Input,
            Self::Eof => TokenKind::Eof,
            // Unreachable for tokens from `tokenize`: both are skipped by the
            // lexer and never pushed to a token list.
            Self::NewLine | Self::Ignored => TokenKind::Eof,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "NUMBER",
            Self::Ident => "IDENT",
            Self::While => "WHILE",
            Self::End => "END",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Assign => "ASSIGN",
            Self::Eq => "EQ",
            Self::Ne => "NE",
            Self::Print => "PRINT",
            Self::Input => "INPUT",
            Self::Eof => "EOF",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "NUMBER({value})"),
            Self::Identifier(name) => write!(f, "IDENT({name})"),
            other => write!(f, "{}", other.kind()),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and where that line starts, for error
/// reporting and diagnostics.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed value.
/// - `None`: If the literal does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Converts source text into a token list terminated by [`Token::Eof`].
///
/// Every token is paired with the line it starts on. The scan is a single
/// left-to-right pass. A `;` ends it early: whatever follows the first `;` is
/// never looked at, so even illegal characters there go unreported.
///
/// # Errors
/// - [`LexError::UnexpectedCharacter`] for a character that starts no token,
///   including a `!` not followed by `=`.
/// - [`LexError::LiteralTooLarge`] for a number that does not fit in an `i64`.
///
/// # Example
/// ```
/// use alpha::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = 5\n< x").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|(t, _)| t.clone()).collect();
/// assert_eq!(kinds,
///            vec![Token::Identifier("x".into()),
///                 Token::Assign,
///                 Token::Number(5),
///                 Token::Print,
///                 Token::Identifier("x".into()),
///                 Token::Eof]);
/// assert_eq!(tokens[3].1, 2);
///
/// assert!(tokenize("x = !1").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line;
        match token {
            Ok(Token::Eof) => {
                let rest = &source[lexer.span().end..];
                if !rest.trim().is_empty() {
                    warn!("';' on line {line} ends the program, {} trailing bytes ignored",
                          rest.len());
                }
                tokens.push((Token::Eof, line));
                return Ok(tokens);
            },
            Ok(tok) => {
                trace!("line {line}: {tok}");
                tokens.push((tok, line));
            },
            Err(()) => {
                let rest = &source[lexer.span().start..];
                if rest.starts_with(|c: char| c.is_ascii_digit()) {
                    return Err(LexError::LiteralTooLarge { literal: lexer.slice().to_string(),
                                                           line });
                }
                let character = rest.chars().next().unwrap_or_default();
                let column = source[lexer.extras.line_start..lexer.span().start].chars().count() + 1;
                return Err(LexError::UnexpectedCharacter { character,
                                                           line,
                                                           column });
            },
        }
    }

    tokens.push((Token::Eof, lexer.extras.line));
    Ok(tokens)
}
