use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Returns the kind and line of the next token without consuming it.
///
/// A drained iterator reads as [`TokenKind::Eof`], so grammar rules never
/// have to special-case a token list that lacks its terminator.
pub(in crate::interpreter::parser) fn peek_kind<'a, I>(tokens: &mut Peekable<I>) -> (TokenKind, usize)
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.peek()
          .map_or((TokenKind::Eof, 0), |(token, line)| (token.kind(), *line))
}

/// Builds the error for a token that does not fit the grammar.
pub(in crate::interpreter::parser) fn unexpected<'a, I>(tokens: &mut Peekable<I>,
                                                        expected: impl Into<String>)
                                                        -> ParseError
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (found, line) = peek_kind(tokens);
    ParseError::UnexpectedToken { expected: expected.into(),
                                  found,
                                  line }
}

/// Consumes the next token if it has the expected kind.
///
/// Only an exact kind match advances the stream; anything else is reported
/// as an [`ParseError::UnexpectedToken`] naming both kinds.
///
/// # Returns
/// The line of the consumed token.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: TokenKind)
                                                    -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match peek_kind(tokens) {
        (kind, line) if kind == expected => {
            tokens.next();
            Ok(line)
        },
        _ => Err(unexpected(tokens, expected.to_string())),
    }
}

/// Parses a plain identifier and returns its name and line.
///
/// The next token must be `Token::Identifier`.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<(String, usize)>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next_if(|(token, _)| matches!(token, Token::Identifier(_))) {
        Some((Token::Identifier(name), line)) => Ok((name.clone(), *line)),
        _ => Err(unexpected(tokens, TokenKind::Ident.to_string())),
    }
}
