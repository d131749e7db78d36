use std::iter::Peekable;

use crate::{
    ast::{Comparison, Condition, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{MAX_DEPTH, ParseResult, parse_expression},
            utils::{expect, parse_identifier, peek_kind, unexpected},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - an assignment, `IDENT = expr`.
/// - a print statement, `< expr`.
/// - an input statement, `> IDENT`.
/// - a `while` loop.
///
/// The leading token decides which rule applies. `END` and `EOF` are handled
/// by the callers, which know whether they close a loop body or the program.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
/// - `depth`: Number of loops enclosing the statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match peek_kind(tokens) {
        (TokenKind::Ident, _) => parse_assignment(tokens),
        (TokenKind::Print, line) => {
            tokens.next();
            let expr = parse_expression(tokens)?;
            Ok(Statement::Print { expr, line })
        },
        (TokenKind::Input, line) => {
            tokens.next();
            let (name, _) = parse_identifier(tokens)?;
            Ok(Statement::Input { name, line })
        },
        (TokenKind::While, line) => {
            tokens.next();
            parse_while(tokens, line, depth)
        },
        _ => Err(unexpected(tokens, "a statement")),
    }
}

/// Parses an assignment statement.
///
/// The form is `<identifier> = <expression>`. The target does not need to be
/// bound beforehand; assignment creates or overwrites the binding.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, line) = parse_identifier(tokens)?;
    expect(tokens, TokenKind::Assign)?;
    let value = parse_expression(tokens)?;

    Ok(Statement::Assignment { name, value, line })
}

/// Parses a `while` loop.
///
/// Syntax:
/// ```text
///     while <condition>
///         <statement>*
///     end
/// ```
/// Bodies may contain further loops. Reaching `EOF` before the matching
/// `end` is an error.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `while` keyword.
/// - `line`: Line number of the `while` token.
/// - `depth`: Number of loops enclosing this one.
///
/// # Errors
/// - [`ParseError::TooDeep`] if this loop would be nested [`MAX_DEPTH`]
///   levels deep.
/// - [`ParseError::UnterminatedLoop`] if input ends inside the body.
/// - Propagates any errors from the condition and the body statements.
fn parse_while<'a, I>(tokens: &mut Peekable<I>,
                      line: usize,
                      depth: usize)
                      -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if depth >= MAX_DEPTH {
        return Err(ParseError::TooDeep { line,
                                         limit: MAX_DEPTH });
    }

    let condition = parse_condition(tokens)?;
    let mut body = Vec::new();

    loop {
        match peek_kind(tokens) {
            (TokenKind::End, _) => {
                tokens.next();
                break;
            },
            (TokenKind::Eof, _) => return Err(ParseError::UnterminatedLoop { line }),
            _ => body.push(parse_statement(tokens, depth + 1)?),
        }
    }

    Ok(Statement::While { condition,
                          body,
                          line })
}

/// Parses a loop condition.
///
/// Grammar: `condition := expression ("==" | "!=") expression`
///
/// # Errors
/// [`ParseError::InvalidCondition`] if the operator is anything but `==` or
/// `!=`.
fn parse_condition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Condition>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_expression(tokens)?;

    let op = match peek_kind(tokens) {
        (TokenKind::Eq, _) => Comparison::Equal,
        (TokenKind::Ne, _) => Comparison::NotEqual,
        (found, line) => return Err(ParseError::InvalidCondition { found, line }),
    };
    tokens.next();

    let right = parse_expression(tokens)?;
    Ok(Condition { left, op, right })
}
