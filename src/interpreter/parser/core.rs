use std::iter::Peekable;

use log::debug;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{binary::parse_additive, statement::parse_statement, utils::peek_kind},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How deep a program may nest.
///
/// Bounds both the number of `while` loops enclosing a statement and the
/// number of operators in one expression. Parsing and evaluation recurse on
/// these, so anything deeper is rejected as a [`ParseError::TooDeep`] before
/// it can exhaust the stack.
pub const MAX_DEPTH: usize = 256;

/// Parses a whole token list into a [`Program`].
///
/// Statements are parsed until the terminating `EOF`. A stray `end` at the
/// top level closes nothing; it is consumed and skipped, the same way the
/// grammar's empty statement is.
///
/// # Errors
/// Propagates the first [`ParseError`] raised by any grammar rule.
///
/// # Example
/// ```
/// use alpha::interpreter::{lexer::tokenize, parser::core::parse_tokens};
///
/// let tokens = tokenize("x = 1\nend\n< x").unwrap();
/// let program = parse_tokens(&tokens).unwrap();
/// assert_eq!(program.statements.len(), 2);
/// ```
pub fn parse_tokens(tokens: &[(Token, usize)]) -> ParseResult<Program> {
    parse_program(&mut tokens.iter().peekable())
}

/// Parses statements until `EOF`.
///
/// Grammar: `program := statement* EOF`
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    loop {
        match peek_kind(tokens) {
            (TokenKind::Eof, _) => break,
            (TokenKind::End, line) => {
                debug!("ignoring unmatched 'end' on line {line}");
                tokens.next();
            },
            _ => statements.push(parse_statement(tokens, 0)?),
        }
    }

    debug!("parsed {} top-level statements", statements.len());
    Ok(Program { statements })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the lowest
/// precedence level, addition and subtraction.
///
/// Grammar: `expression := additive`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens)
}
